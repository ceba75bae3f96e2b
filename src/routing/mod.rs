//! 路由与导航守卫
//!
//! 路由表是声明式静态映射，只被守卫消费。守卫在每次导航前运行，
//! 根据路由元数据决定放行或重定向。

mod guard;
mod table;

pub use guard::{GuardState, NavigationGuard, Resolution};
pub use table::{Route, landing_route, match_path, page_title, route_by_name, routes};
