//! 后端 API 服务层
//!
//! 每个域一个薄封装：只负责端点路径与请求/响应类型，
//! 错误映射、CSRF、通知全部由网关承担。

pub mod analytics;
pub mod assignments;
pub mod categories;
pub mod notifications;
pub mod portfolios;
pub mod submissions;
pub mod users;

use std::sync::Arc;

use crate::gateway::ApiGateway;

/// 全部域服务的汇集点，共享同一个网关实例
pub struct Services {
    pub users: users::UserService,
    pub portfolios: portfolios::PortfolioService,
    pub assignments: assignments::AssignmentService,
    pub categories: categories::CategoryService,
    pub submissions: submissions::SubmissionService,
    pub analytics: analytics::AnalyticsService,
    pub notifications: notifications::NotificationService,
}

impl Services {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            users: users::UserService::new(Arc::clone(&gateway)),
            portfolios: portfolios::PortfolioService::new(Arc::clone(&gateway)),
            assignments: assignments::AssignmentService::new(Arc::clone(&gateway)),
            categories: categories::CategoryService::new(Arc::clone(&gateway)),
            submissions: submissions::SubmissionService::new(Arc::clone(&gateway)),
            analytics: analytics::AnalyticsService::new(Arc::clone(&gateway)),
            notifications: notifications::NotificationService::new(gateway),
        }
    }
}
