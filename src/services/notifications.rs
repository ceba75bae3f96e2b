//! 通知服务

use std::sync::Arc;

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::notifications::entities::Notification;
use crate::models::{ListEnvelope, ListParams};

pub struct NotificationService {
    gateway: Arc<ApiGateway>,
}

impl NotificationService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, params: &ListParams) -> Result<ListEnvelope<Notification>> {
        self.gateway.get_json("/api/notifications/", params).await
    }

    pub async fn mark_read(&self, id: i64) -> Result<()> {
        self.gateway
            .post_no_content(&format!("/api/notifications/{id}/read/"), &serde_json::json!({}))
            .await
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        self.gateway
            .post_no_content("/api/notifications/read-all/", &serde_json::json!({}))
            .await
    }
}
