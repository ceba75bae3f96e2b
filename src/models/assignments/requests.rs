use serde::Serialize;

use super::entities::{AssignmentStatus, Priority};

// 创建任务请求（admin/superadmin）
#[derive(Debug, Clone, Serialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub category: i64,
    pub priority: Priority,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub assigned_to: i64,
}

// 更新任务请求
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAssignmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
}

// 状态更新请求（PATCH .../update_status/）
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: AssignmentStatus,
}

// 得分设置更新请求（PUT /api/assignments/{id}/score/）
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateScoreRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

// 任务答复提交请求（教师）
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAssignmentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<String>,
}
