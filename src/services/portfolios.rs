//! 档案（portfolio）服务

use std::sync::Arc;

use crate::errors::Result;
use crate::gateway::{ApiGateway, FilePart};
use crate::models::portfolios::entities::{
    Attachment, Portfolio, PortfolioComment, PortfolioHistoryEntry,
};
use crate::models::portfolios::requests::{
    AddCommentRequest, CreatePortfolioRequest, ReviewRequest, UpdatePortfolioRequest,
};
use crate::models::portfolios::responses::PortfolioStats;
use crate::models::{ListEnvelope, ListParams};

pub struct PortfolioService {
    gateway: Arc<ApiGateway>,
}

impl PortfolioService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, params: &ListParams) -> Result<ListEnvelope<Portfolio>> {
        self.gateway.get_json("/api/portfolios/", params).await
    }

    pub async fn get(&self, id: i64) -> Result<Portfolio> {
        self.gateway
            .get_json(&format!("/api/portfolios/{id}/"), &ListParams::new())
            .await
    }

    pub async fn create(&self, request: &CreatePortfolioRequest) -> Result<Portfolio> {
        self.gateway.post_json("/api/portfolios/", request).await
    }

    pub async fn update(&self, id: i64, request: &UpdatePortfolioRequest) -> Result<Portfolio> {
        self.gateway
            .put_json(&format!("/api/portfolios/{id}/"), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.gateway.delete(&format!("/api/portfolios/{id}/")).await
    }

    /// 审批通过（admin/superadmin）
    pub async fn approve(&self, id: i64, request: &ReviewRequest) -> Result<serde_json::Value> {
        self.gateway
            .post_json(&format!("/api/portfolios/{id}/approve/"), request)
            .await
    }

    /// 驳回（必须附带理由，由上层校验）
    pub async fn reject(&self, id: i64, request: &ReviewRequest) -> Result<serde_json::Value> {
        self.gateway
            .post_json(&format!("/api/portfolios/{id}/reject/"), request)
            .await
    }

    pub async fn add_comment(
        &self,
        id: i64,
        request: &AddCommentRequest,
    ) -> Result<PortfolioComment> {
        self.gateway
            .post_json(&format!("/api/portfolios/{id}/comments/"), request)
            .await
    }

    pub async fn upload_attachment(&self, id: i64, file: FilePart) -> Result<Attachment> {
        self.gateway
            .post_multipart(&format!("/api/portfolios/{id}/attachments/"), vec![file])
            .await
    }

    pub async fn delete_attachment(&self, id: i64, attachment_id: i64) -> Result<()> {
        self.gateway
            .delete(&format!(
                "/api/portfolios/{id}/attachments/{attachment_id}/"
            ))
            .await
    }

    pub async fn history(&self, id: i64) -> Result<Vec<PortfolioHistoryEntry>> {
        self.gateway
            .get_json(&format!("/api/portfolios/{id}/history/"), &ListParams::new())
            .await
    }

    pub async fn stats(&self) -> Result<PortfolioStats> {
        self.gateway
            .get_json("/api/portfolios/stats/", &ListParams::new())
            .await
    }
}
