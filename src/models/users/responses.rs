use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::entities::Identity;

// 认证状态响应（GET /auth/status/）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<Identity>,
}

// CSRF 令牌响应（GET /auth/csrf/）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfTokenResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

// 用户统计（superadmin 仪表盘）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub total: i64,
    #[serde(default)]
    pub by_role: HashMap<String, i64>,
    pub active: i64,
    pub inactive: i64,
}
