//! 工具模块

pub mod datetime;
pub mod debounce;
pub mod helpers;
pub mod validate;
