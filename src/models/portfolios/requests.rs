use serde::Serialize;

// 创建档案请求（教师）
#[derive(Debug, Clone, Serialize)]
pub struct CreatePortfolioRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<serde_json::Value>,
}

// 更新档案请求
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePortfolioRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

// 审批请求（approve 的 comment 可为空，reject 的 comment 必填，
// 必填校验在 store 层网络调用之前完成）
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRequest {
    pub comment: String,
}

// 添加评论请求
#[derive(Debug, Clone, Serialize)]
pub struct AddCommentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}
