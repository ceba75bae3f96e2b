//! 会话提供者
//!
//! 保存当前认证身份的唯一位置。导航守卫、权限判定、各数据域
//! 都从这里读身份，绝不各自缓存。
//!
//! 失败关闭：认证状态检查出错时按未登录处理，而不是放行。

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::ListParams;
use crate::models::users::entities::Identity;
use crate::models::users::requests::UpdateProfileRequest;
use crate::models::users::responses::AuthStatus;

pub struct SessionProvider {
    gateway: Arc<ApiGateway>,
    identity: RwLock<Option<Identity>>,
}

impl SessionProvider {
    pub fn new(gateway: Arc<ApiGateway>) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            identity: RwLock::new(None),
        })
    }

    /// 当前缓存的身份（不触发网络）
    pub async fn current(&self) -> Option<Identity> {
        self.identity.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.identity.read().await.is_some()
    }

    /// 向服务端确认会话有效性并刷新缓存身份。
    ///
    /// 任何失败（网络、解析、服务端否定）都清空缓存并返回 None。
    pub async fn check_auth(&self) -> Option<Identity> {
        let status: AuthStatus = match self
            .gateway
            .get_json("/auth/status/", &ListParams::new())
            .await
        {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Auth status check failed, treating as unauthenticated: {e}");
                *self.identity.write().await = None;
                return None;
            }
        };

        let identity = if status.authenticated {
            status.user
        } else {
            None
        };
        *self.identity.write().await = identity.clone();
        identity
    }

    /// 完整个人资料（比 /auth/status/ 的摘要更全）
    pub async fn fetch_current_user(&self) -> Result<Identity> {
        let identity: Identity = self
            .gateway
            .get_json("/api/accounts/me/", &ListParams::new())
            .await?;
        *self.identity.write().await = Some(identity.clone());
        Ok(identity)
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<Identity> {
        let identity: Identity = self.gateway.put_json("/api/accounts/me/", request).await?;
        *self.identity.write().await = Some(identity.clone());
        Ok(identity)
    }

    /// 登出：先通知服务端，无论成败都清空本地会话
    pub async fn logout(&self) -> Result<()> {
        let result = self
            .gateway
            .post_json::<serde_json::Value>("/auth/hemis/logout/", &serde_json::json!({}))
            .await;
        *self.identity.write().await = None;
        result.map(|_| ())
    }

    /// 直接写入身份（开发旁路与测试）
    pub async fn set_identity(&self, identity: Option<Identity>) {
        *self.identity.write().await = identity;
    }
}

/// HEMIS 单点登录入口地址，next 为登录成功后的回跳路径
pub fn login_url(config: &AppConfig, next: &str) -> String {
    let base = config.api.base_url.trim_end_matches('/');
    match reqwest::Url::parse_with_params(
        &format!("{base}/auth/hemis/login/"),
        &[("next", next)],
    ) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{base}/auth/hemis/login/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FixtureTransport;
    use crate::toast::ToastBus;
    use std::time::Duration;

    fn provider(transport: FixtureTransport) -> Arc<SessionProvider> {
        let toasts = ToastBus::new(Duration::ZERO);
        let (gateway, _rx) = ApiGateway::new(Arc::new(transport), toasts);
        SessionProvider::new(gateway)
    }

    #[tokio::test]
    async fn test_check_auth_caches_identity() {
        let session = provider(FixtureTransport::new());
        assert!(session.current().await.is_none());

        let identity = session.check_auth().await.unwrap();
        assert_eq!(identity.username, "test_superadmin");
        assert!(session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_check_auth_fails_closed_for_anonymous() {
        let session = provider(FixtureTransport::anonymous());
        assert!(session.check_auth().await.is_none());
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_identity() {
        let session = provider(FixtureTransport::new());
        session.check_auth().await;
        assert!(session.is_authenticated().await);

        session.logout().await.unwrap();
        assert!(!session.is_authenticated().await);
    }

    #[test]
    fn test_login_url_encodes_next() {
        let config = AppConfig::default();
        let url = login_url(&config, "/portfolios?page=2");
        assert!(url.contains("/auth/hemis/login/"));
        assert!(url.contains("next=%2Fportfolios%3Fpage%3D2"));
    }
}
