use serde::Serialize;

// 评分/重新评分请求（PATCH .../submissions/{id}/grade/）
#[derive(Debug, Clone, Serialize)]
pub struct GradeSubmissionRequest {
    pub grade: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
