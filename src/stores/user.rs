//! 用户域 store
//!
//! 认证侧委托给 SessionProvider（身份只存一处）；
//! 管理侧是 superadmin 的用户列表。

use std::sync::{Arc, RwLock};

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::common::params::params;
use crate::models::users::entities::{Identity, ManagedUser};
use crate::models::users::requests::{CreateUserRequest, UpdateProfileRequest, UpdateUserRequest};
use crate::models::users::responses::UserStats;
use crate::models::ListParams;
use crate::services::users::UserService;
use crate::session::SessionProvider;
use crate::toast::ToastBus;

use super::ListState;

pub struct UserStore {
    service: UserService,
    session: Arc<SessionProvider>,
    toasts: Arc<ToastBus>,
    state: RwLock<ListState<ManagedUser>>,
    stats: RwLock<Option<UserStats>>,
}

impl UserStore {
    pub fn new(
        gateway: Arc<ApiGateway>,
        session: Arc<SessionProvider>,
        toasts: Arc<ToastBus>,
    ) -> Self {
        Self {
            service: UserService::new(gateway),
            session,
            toasts,
            state: RwLock::new(ListState::default()),
            stats: RwLock::new(None),
        }
    }

    pub fn snapshot(&self) -> ListState<ManagedUser> {
        self.state.read().unwrap().clone()
    }

    pub fn stats(&self) -> Option<UserStats> {
        self.stats.read().unwrap().clone()
    }

    pub async fn current_identity(&self) -> Option<Identity> {
        self.session.current().await
    }

    pub async fn check_auth(&self) -> Option<Identity> {
        self.session.check_auth().await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<Identity> {
        let identity = self.session.update_profile(request).await.inspect_err(|e| {
            tracing::error!("Failed to update profile: {e}");
        })?;
        self.toasts.success("Profil yangilandi");
        Ok(identity)
    }

    pub async fn logout(&self) -> Result<()> {
        self.session.logout().await
    }

    pub async fn fetch_users(&self, params: &ListParams) -> Result<()> {
        let merged = super::begin_fetch(&self.state, params);
        let result = self.service.list(&merged).await;
        super::finish_fetch(&self.state, &merged, result, "users")
    }

    /// 翻页：把 page 并入过滤器后重新拉取
    pub async fn go_to_page(&self, page: i64) -> Result<()> {
        self.fetch_users(&params(&[("page", &page.to_string())])).await
    }

    /// 创建后重新拉取列表
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<ManagedUser> {
        let user = self.service.create(request).await.inspect_err(|e| {
            tracing::error!("Failed to create user: {e}");
        })?;
        self.toasts.success("Foydalanuvchi yaratildi");
        self.fetch_users(&ListParams::new()).await?;
        Ok(user)
    }

    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> Result<ManagedUser> {
        let user = self.service.update(id, request).await.inspect_err(|e| {
            tracing::error!(id, "Failed to update user: {e}");
        })?;
        let mut state = self.state.write().unwrap();
        if let Some(slot) = state.items.iter_mut().find(|u| u.id == id) {
            *slot = user.clone();
        }
        drop(state);
        self.toasts.success("Foydalanuvchi yangilandi");
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.service.delete(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to delete user: {e}");
        })?;
        self.state.write().unwrap().items.retain(|u| u.id != id);
        self.toasts.success("Foydalanuvchi o'chirildi");
        Ok(())
    }

    pub async fn fetch_stats(&self) -> Result<UserStats> {
        let stats = self.service.stats().await.inspect_err(|e| {
            tracing::error!("Failed to fetch user stats: {e}");
        })?;
        *self.stats.write().unwrap() = Some(stats.clone());
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FixtureTransport;
    use crate::models::users::entities::UserRole;
    use std::time::Duration;

    fn store() -> UserStore {
        let toasts = ToastBus::new(Duration::ZERO);
        let (gateway, _rx) = ApiGateway::new(Arc::new(FixtureTransport::new()), toasts.clone());
        let session = SessionProvider::new(Arc::clone(&gateway));
        UserStore::new(gateway, session, toasts)
    }

    #[tokio::test]
    async fn test_fetch_users_with_role_filter() {
        let store = store();
        store
            .fetch_users(&crate::models::common::params::params(&[(
                "role", "teacher",
            )]))
            .await
            .unwrap();
        let state = store.snapshot();
        assert_eq!(state.items.len(), 3);
        assert!(state.items.iter().all(|u| u.role == UserRole::Teacher));
    }

    #[tokio::test]
    async fn test_delete_user_patches_locally() {
        let store = store();
        store.fetch_users(&ListParams::new()).await.unwrap();
        assert_eq!(store.snapshot().items.len(), 5);
        store.delete_user(5).await.unwrap();
        assert_eq!(store.snapshot().items.len(), 4);
    }

    #[tokio::test]
    async fn test_go_to_page_tracks_pagination() {
        let store = store();
        store.go_to_page(2).await.unwrap();
        let state = store.snapshot();
        assert_eq!(state.pagination.page, 2);
        assert_eq!(state.filters.get("page").map(String::as_str), Some("2"));
    }

    #[tokio::test]
    async fn test_fetch_stats() {
        let store = store();
        let stats = store.fetch_stats().await.unwrap();
        assert_eq!(stats.total, 156);
        assert_eq!(store.stats().unwrap().active, 148);
    }

    #[tokio::test]
    async fn test_slow_fetch_after_delete_lands_as_is() {
        // 已接受的竞态：fetch 的快照晚于 delete 落下时按快照为准
        let store = store();
        store.fetch_users(&ListParams::new()).await.unwrap();
        store.delete_user(3).await.unwrap();
        assert_eq!(store.snapshot().items.len(), 4);

        // 之后完成的列表拉取会把该条目带回来（服务端快照）
        store.fetch_users(&ListParams::new()).await.unwrap();
        assert_eq!(store.snapshot().items.len(), 5);
    }
}
