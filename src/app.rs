//! 应用上下文
//!
//! 进程内唯一的装配点：配置决定传输层，网关、会话、服务层与各
//! 域 store 全部从这里接线。整个进程只构建一次。

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::AppConfig;
use crate::gateway::{ApiGateway, AuthEvent, create_transport};
use crate::routing::NavigationGuard;
use crate::services::Services;
use crate::session::SessionProvider;
use crate::stores::Stores;
use crate::toast::ToastBus;

pub struct AppContext {
    pub config: &'static AppConfig,
    pub gateway: Arc<ApiGateway>,
    pub toasts: Arc<ToastBus>,
    pub session: Arc<SessionProvider>,
    pub services: Services,
    pub stores: Stores,
    pub guard: NavigationGuard,
    /// 网关发出的认证事件，由导航消费层轮询
    pub auth_events: UnboundedReceiver<AuthEvent>,
}

impl AppContext {
    pub fn initialize(config: &'static AppConfig) -> Self {
        let transport = create_transport(&config.api);
        let toasts = ToastBus::new(std::time::Duration::from_millis(
            config.ui.toast_duration_ms,
        ));
        let (gateway, auth_events) = ApiGateway::new(transport, Arc::clone(&toasts));
        let session = SessionProvider::new(Arc::clone(&gateway));
        let services = Services::new(Arc::clone(&gateway));
        let stores = Stores::new(
            Arc::clone(&gateway),
            Arc::clone(&session),
            Arc::clone(&toasts),
            config.ui.theme_file.clone(),
        );
        let guard = NavigationGuard::new(Arc::clone(&session), config.api.dev_bypass);

        tracing::debug!(
            dev_bypass = config.api.dev_bypass,
            base_url = %config.api.base_url,
            "application context initialized"
        );

        Self {
            config,
            gateway,
            toasts,
            session,
            services,
            stores,
            guard,
            auth_events,
        }
    }
}
