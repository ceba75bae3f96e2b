//! 用户管理服务（superadmin 专用端点）

use std::sync::Arc;

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::users::entities::ManagedUser;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::models::users::responses::UserStats;
use crate::models::{ListEnvelope, ListParams};

pub struct UserService {
    gateway: Arc<ApiGateway>,
}

impl UserService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, params: &ListParams) -> Result<ListEnvelope<ManagedUser>> {
        self.gateway.get_json("/api/accounts/users/", params).await
    }

    pub async fn get(&self, id: i64) -> Result<ManagedUser> {
        self.gateway
            .get_json(&format!("/api/accounts/users/{id}/"), &ListParams::new())
            .await
    }

    pub async fn create(&self, request: &CreateUserRequest) -> Result<ManagedUser> {
        self.gateway.post_json("/api/accounts/users/", request).await
    }

    pub async fn update(&self, id: i64, request: &UpdateUserRequest) -> Result<ManagedUser> {
        self.gateway
            .put_json(&format!("/api/accounts/users/{id}/"), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.gateway
            .delete(&format!("/api/accounts/users/{id}/"))
            .await
    }

    pub async fn stats(&self) -> Result<UserStats> {
        self.gateway
            .get_json("/api/accounts/users/stats/", &ListParams::new())
            .await
    }
}
