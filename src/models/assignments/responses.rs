use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// 任务统计响应（GET .../assignments/statistics/）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentStatistics {
    pub total: i64,
    #[serde(default)]
    pub by_status: HashMap<String, i64>,
    #[serde(default)]
    pub by_priority: HashMap<String, i64>,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub overdue_count: i64,
}

// 单条任务得分（GET /api/assignments/{id}/score/）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentScore {
    pub assignment_id: i64,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 得分历史条目（GET /api/assignments/score-history/）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreHistoryEntry {
    pub id: i64,
    pub assignment_id: i64,
    #[serde(default)]
    pub assignment_title: String,
    pub score: f64,
    #[serde(default)]
    pub graded_by: Option<super::entities::PersonRef>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
