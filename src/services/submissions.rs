//! 提交（submission）服务

use std::sync::Arc;

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{ListEnvelope, ListParams};

pub struct SubmissionService {
    gateway: Arc<ApiGateway>,
}

impl SubmissionService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, params: &ListParams) -> Result<ListEnvelope<Submission>> {
        self.gateway
            .get_json("/api/assignments/v2/submissions/", params)
            .await
    }

    /// 评分。重新评分也走同一端点，由服务端记录评分历史。
    pub async fn grade(&self, id: i64, request: &GradeSubmissionRequest) -> Result<Submission> {
        self.gateway
            .patch_json(
                &format!("/api/assignments/v2/submissions/{id}/grade/"),
                request,
            )
            .await
    }
}
