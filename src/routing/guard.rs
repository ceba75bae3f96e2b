//! 导航守卫
//!
//! 每次导航按固定顺序决策：
//! 1. 开发旁路标志单独最先判断，置位时跳过认证与角色检查；
//! 2. 无认证要求的路由直接放行，唯一例外是持有效会话访问登录页，
//!    改为重定向到该角色的落地路由；
//! 3. 需认证且无缓存身份时，做一次会话检查；否定或失败则重定向到
//!    登录页，并把原始完整路径作为 redirect 参数带上（可恢复）;
//! 4. 角色集合非空且当前角色不在其中，重定向到该角色自己的落地
//!    路由。普通角色不匹配从不展示 403 页，/403 只留给明确无法
//!    解析的情形。

use std::sync::Arc;

use crate::gateway::AuthEvent;
use crate::session::SessionProvider;

use super::table::{self, Route};

/// 单次导航尝试的解析状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unchecked,
    AuthPending,
    Authorized,
    Unauthenticated,
    Unauthorized,
}

#[derive(Debug)]
pub enum Resolution {
    /// 放行到匹配的路由
    Allow(&'static Route),
    /// 重定向到登录页，redirect 为原始完整路径
    RedirectLogin { redirect: String },
    /// 重定向到另一条路由（落地路由或 /403）
    Redirect(&'static Route),
}

impl Resolution {
    pub fn state(&self) -> GuardState {
        match self {
            Resolution::Allow(_) => GuardState::Authorized,
            Resolution::RedirectLogin { .. } => GuardState::Unauthenticated,
            Resolution::Redirect(_) => GuardState::Unauthorized,
        }
    }

    pub fn route_name(&self) -> &'static str {
        match self {
            Resolution::Allow(route) => route.name,
            Resolution::RedirectLogin { .. } => "login",
            Resolution::Redirect(route) => route.name,
        }
    }
}

pub struct NavigationGuard {
    session: Arc<SessionProvider>,
    dev_bypass: bool,
}

impl NavigationGuard {
    pub fn new(session: Arc<SessionProvider>, dev_bypass: bool) -> Self {
        Self {
            session,
            dev_bypass,
        }
    }

    /// 解析一次导航。full_path 可含查询串，匹配时忽略、重定向时保留。
    pub async fn resolve(&self, full_path: &str) -> Resolution {
        let route = table::match_path(full_path);
        let mut state = GuardState::Unchecked;
        tracing::debug!(route = route.name, ?state, "navigation: {full_path}");

        if !route.requires_auth {
            // 已登录用户访问登录页时送回落地路由
            if route.name == "login" {
                if let Some(identity) = self.session.check_auth().await {
                    let landing = table::landing_route(identity.role);
                    tracing::debug!(
                        role = %identity.role,
                        to = landing.name,
                        "authenticated user on login route"
                    );
                    return Resolution::Redirect(landing);
                }
            }
            return Resolution::Allow(route);
        }

        if self.dev_bypass {
            return Resolution::Allow(route);
        }

        let identity = match self.session.current().await {
            Some(identity) => identity,
            None => {
                state = GuardState::AuthPending;
                tracing::debug!(route = route.name, ?state, "no cached identity");
                match self.session.check_auth().await {
                    Some(identity) => identity,
                    None => {
                        return Resolution::RedirectLogin {
                            redirect: full_path.to_string(),
                        };
                    }
                }
            }
        };

        if !route.roles.is_empty() && !route.roles.contains(&identity.role) {
            let landing = table::landing_route(identity.role);
            tracing::debug!(
                route = route.name,
                role = %identity.role,
                to = landing.name,
                "role not allowed"
            );
            return Resolution::Redirect(landing);
        }

        Resolution::Allow(route)
    }

    /// 网关认证事件转为导航动作
    pub fn resolve_auth_event(&self, event: AuthEvent, current_path: &str) -> Resolution {
        match event {
            AuthEvent::SessionExpired => Resolution::RedirectLogin {
                redirect: current_path.to_string(),
            },
            AuthEvent::Forbidden => Resolution::Redirect(
                table::route_by_name("forbidden").expect("forbidden route is in the table"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{ApiGateway, FixtureTransport};
    use crate::models::users::entities::{Identity, PermissionFlags, UserRole};
    use crate::toast::ToastBus;
    use std::time::Duration;

    fn identity(role: UserRole) -> Identity {
        Identity {
            id: 7,
            username: "sinov".into(),
            email: "sinov@example.com".into(),
            first_name: String::new(),
            last_name: String::new(),
            full_name: "Sinov Foydalanuvchi".into(),
            role,
            hemis_id: None,
            department: None,
            position: None,
            permissions: PermissionFlags::default(),
        }
    }

    fn guard_with(transport: FixtureTransport, dev_bypass: bool) -> NavigationGuard {
        let toasts = ToastBus::new(Duration::ZERO);
        let (gateway, _rx) = ApiGateway::new(Arc::new(transport), toasts);
        NavigationGuard::new(SessionProvider::new(gateway), dev_bypass)
    }

    #[tokio::test]
    async fn test_unauthenticated_redirects_to_login_with_full_path() {
        let guard = guard_with(FixtureTransport::anonymous(), false);
        let resolution = guard.resolve("/portfolios?page=2").await;
        match resolution {
            Resolution::RedirectLogin { redirect } => {
                assert_eq!(redirect, "/portfolios?page=2");
            }
            other => panic!("expected login redirect, got {other:?}"),
        }
        assert_eq!(guard.resolve("/portfolios?page=2").await.state(), GuardState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_public_route_allows_without_session() {
        let guard = guard_with(FixtureTransport::anonymous(), false);
        assert_eq!(guard.resolve("/403").await.route_name(), "forbidden");
        assert_eq!(guard.resolve("/403").await.state(), GuardState::Authorized);
    }

    #[tokio::test]
    async fn test_login_with_valid_session_goes_to_landing() {
        let guard = guard_with(
            FixtureTransport::with_identity(identity(UserRole::SuperAdmin)),
            false,
        );
        let resolution = guard.resolve("/login").await;
        assert_eq!(resolution.route_name(), "admin-dashboard");

        let guard = guard_with(
            FixtureTransport::with_identity(identity(UserRole::Teacher)),
            false,
        );
        assert_eq!(guard.resolve("/login").await.route_name(), "dashboard");
    }

    #[tokio::test]
    async fn test_role_mismatch_redirects_to_own_landing_not_403() {
        // admin 访问 superadmin 专属路由
        let guard = guard_with(
            FixtureTransport::with_identity(identity(UserRole::Admin)),
            false,
        );
        let resolution = guard.resolve("/admin/users").await;
        assert_eq!(resolution.route_name(), "dashboard");
        assert_eq!(resolution.state(), GuardState::Unauthorized);

        // teacher 访问 admin 级路由
        let guard = guard_with(
            FixtureTransport::with_identity(identity(UserRole::Teacher)),
            false,
        );
        assert_eq!(guard.resolve("/approval").await.route_name(), "dashboard");
    }

    #[tokio::test]
    async fn test_role_matrix_on_shared_routes() {
        for role in UserRole::all_roles() {
            let guard = guard_with(FixtureTransport::with_identity(identity(*role)), false);
            assert_eq!(guard.resolve("/dashboard").await.route_name(), "dashboard");
            assert_eq!(guard.resolve("/profile").await.route_name(), "profile");
            assert_eq!(
                guard.resolve("/portfolios/5").await.route_name(),
                "portfolio-detail"
            );
        }
    }

    #[tokio::test]
    async fn test_teacher_only_routes() {
        let guard = guard_with(
            FixtureTransport::with_identity(identity(UserRole::Teacher)),
            false,
        );
        assert_eq!(
            guard.resolve("/my-assignments").await.route_name(),
            "my-assignments"
        );

        let guard = guard_with(
            FixtureTransport::with_identity(identity(UserRole::Admin)),
            false,
        );
        assert_eq!(guard.resolve("/my-scores").await.route_name(), "dashboard");
    }

    #[tokio::test]
    async fn test_idempotent_on_authorized_route() {
        let guard = guard_with(
            FixtureTransport::with_identity(identity(UserRole::SuperAdmin)),
            false,
        );
        let first = guard.resolve("/admin").await;
        let second = guard.resolve("/admin").await;
        assert_eq!(first.route_name(), "admin-dashboard");
        assert_eq!(second.route_name(), "admin-dashboard");
        assert_eq!(second.state(), GuardState::Authorized);
    }

    #[tokio::test]
    async fn test_dev_bypass_skips_auth_and_role_checks() {
        let guard = guard_with(FixtureTransport::anonymous(), true);
        assert_eq!(guard.resolve("/admin/users").await.route_name(), "users");
        assert_eq!(guard.resolve("/my-scores").await.route_name(), "my-scores");
    }

    #[tokio::test]
    async fn test_auth_events_map_to_redirects() {
        let guard = guard_with(FixtureTransport::anonymous(), false);
        match guard.resolve_auth_event(AuthEvent::SessionExpired, "/portfolios") {
            Resolution::RedirectLogin { redirect } => assert_eq!(redirect, "/portfolios"),
            other => panic!("expected login redirect, got {other:?}"),
        }
        assert_eq!(
            guard
                .resolve_auth_event(AuthEvent::Forbidden, "/portfolios")
                .route_name(),
            "forbidden"
        );
    }
}
