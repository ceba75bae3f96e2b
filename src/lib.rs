//! Proft - 教师档案管理平台客户端
//!
//! Proft 档案/任务管理系统的无头 Rust 客户端。后端 REST API 是外部协作方，
//! 本 crate 只承载客户端侧的决策逻辑与状态同步，不做任何渲染。
//!
//! # 架构
//! - `app`: 应用上下文（单实例装配）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `gateway`: HTTP 网关适配层（CSRF、错误映射、fixture 旁路）
//! - `models`: 数据模型定义
//! - `permissions`: 纯函数权限判定
//! - `routing`: 路由表与导航守卫
//! - `services`: 各领域 API 封装
//! - `session`: 会话/身份提供者
//! - `stores`: 客户端状态容器
//! - `toast`: 通知注册表
//! - `utils`: 工具函数

pub mod app;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod permissions;
pub mod routing;
pub mod services;
pub mod session;
pub mod stores;
pub mod toast;
pub mod utils;
