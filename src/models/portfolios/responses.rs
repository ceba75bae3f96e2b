use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// 档案统计响应（GET /api/portfolios/stats/）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    #[serde(default)]
    pub by_category: HashMap<String, i64>,
    #[serde(default)]
    pub recent_activity: i64,
    #[serde(default)]
    pub approval_rate: f64,
}
