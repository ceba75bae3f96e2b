//! 任务（assignment）服务

use std::sync::Arc;

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{
    CreateAssignmentRequest, SubmitAssignmentRequest, UpdateAssignmentRequest, UpdateScoreRequest,
    UpdateStatusRequest,
};
use crate::models::assignments::responses::{
    AssignmentScore, AssignmentStatistics, ScoreHistoryEntry,
};
use crate::models::submissions::entities::Submission;
use crate::models::{ListEnvelope, ListParams};

pub struct AssignmentService {
    gateway: Arc<ApiGateway>,
}

impl AssignmentService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, params: &ListParams) -> Result<ListEnvelope<Assignment>> {
        self.gateway
            .get_json("/api/assignments/v2/assignments/", params)
            .await
    }

    /// 当前用户名下的任务
    pub async fn my_assignments(&self, params: &ListParams) -> Result<ListEnvelope<Assignment>> {
        self.gateway
            .get_json("/api/assignments/v2/assignments/my_assignments/", params)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Assignment> {
        self.gateway
            .get_json(
                &format!("/api/assignments/v2/assignments/{id}/"),
                &ListParams::new(),
            )
            .await
    }

    pub async fn create(&self, request: &CreateAssignmentRequest) -> Result<Assignment> {
        self.gateway
            .post_json("/api/assignments/v2/assignments/", request)
            .await
    }

    pub async fn update(&self, id: i64, request: &UpdateAssignmentRequest) -> Result<Assignment> {
        self.gateway
            .put_json(&format!("/api/assignments/v2/assignments/{id}/"), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.gateway
            .delete(&format!("/api/assignments/v2/assignments/{id}/"))
            .await
    }

    pub async fn update_status(
        &self,
        id: i64,
        request: &UpdateStatusRequest,
    ) -> Result<serde_json::Value> {
        self.gateway
            .patch_json(
                &format!("/api/assignments/v2/assignments/{id}/update_status/"),
                request,
            )
            .await
    }

    pub async fn submit(&self, id: i64, request: &SubmitAssignmentRequest) -> Result<Submission> {
        self.gateway
            .post_json(
                &format!("/api/assignments/v2/assignments/{id}/submit/"),
                request,
            )
            .await
    }

    pub async fn statistics(&self) -> Result<AssignmentStatistics> {
        self.gateway
            .get_json(
                "/api/assignments/v2/assignments/statistics/",
                &ListParams::new(),
            )
            .await
    }

    /// 单条任务的得分设置
    pub async fn score(&self, id: i64) -> Result<AssignmentScore> {
        self.gateway
            .get_json(&format!("/api/assignments/{id}/score/"), &ListParams::new())
            .await
    }

    pub async fn update_score(&self, id: i64, request: &UpdateScoreRequest) -> Result<AssignmentScore> {
        self.gateway
            .put_json(&format!("/api/assignments/{id}/score/"), request)
            .await
    }

    pub async fn score_history(
        &self,
        params: &ListParams,
    ) -> Result<ListEnvelope<ScoreHistoryEntry>> {
        self.gateway
            .get_json("/api/assignments/score-history/", params)
            .await
    }
}
