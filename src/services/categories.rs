//! 任务分类服务

use std::sync::Arc;

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::categories::entities::Category;
use crate::models::categories::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::{ListEnvelope, ListParams};

pub struct CategoryService {
    gateway: Arc<ApiGateway>,
}

impl CategoryService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, params: &ListParams) -> Result<ListEnvelope<Category>> {
        self.gateway
            .get_json("/api/assignments/v2/categories/", params)
            .await
    }

    pub async fn create(&self, request: &CreateCategoryRequest) -> Result<Category> {
        self.gateway
            .post_json("/api/assignments/v2/categories/", request)
            .await
    }

    pub async fn update(&self, id: i64, request: &UpdateCategoryRequest) -> Result<Category> {
        self.gateway
            .put_json(&format!("/api/assignments/v2/categories/{id}/"), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.gateway
            .delete(&format!("/api/assignments/v2/categories/{id}/"))
            .await
    }
}
