//! 客户端状态域
//!
//! 每个域一个 store，统一形状 {items, current, pagination, filters,
//! is_loading}，内部可变性用 std RwLock。锁绝不跨 await 持有：
//! 写入发生在网络调用前后的两个短临界区，因此慢的 fetch 在 delete
//! 之后完成时会原样落下快照。这是已接受的竞态，换来的是 store
//! 方法之间永不死锁。
//!
//! 所有动作失败时记录日志并传播错误；成功提示由各动作按需发通知。

pub mod analytics;
pub mod assignment;
pub mod notification;
pub mod portfolio;
pub mod theme;
pub mod user;

use std::sync::{Arc, RwLock};

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::common::params::merge_params;
use crate::models::{ListEnvelope, ListParams, Pagination};
use crate::session::SessionProvider;
use crate::toast::ToastBus;

/// 列表域的统一状态形状
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub pagination: Pagination,
    pub filters: ListParams,
    pub is_loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            pagination: Pagination::default(),
            filters: ListParams::new(),
            is_loading: false,
        }
    }
}

/// 列表拉取的前半段：置 loading，过滤条件变化时回到第一页，
/// 显式参数覆盖持久化过滤器并去除空值。返回合并后的参数。
pub(crate) fn begin_fetch<T>(state: &RwLock<ListState<T>>, params: &ListParams) -> ListParams {
    let mut state = state.write().unwrap();
    state.is_loading = true;
    if params.keys().any(|k| k != "page" && k != "page_size") {
        state.filters.remove("page");
    }
    state.filters = merge_params(&state.filters, params);
    state.filters.clone()
}

/// 列表拉取的后半段：整体替换 items 并重算分页，失败记录后传播
pub(crate) fn finish_fetch<T>(
    state: &RwLock<ListState<T>>,
    merged: &ListParams,
    result: Result<ListEnvelope<T>>,
    domain: &str,
) -> Result<()> {
    let mut state = state.write().unwrap();
    state.is_loading = false;
    match result {
        Ok(envelope) => {
            state.pagination.track(merged);
            state.pagination.apply(&envelope);
            state.items = envelope.results;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to fetch {domain}: {e}");
            Err(e)
        }
    }
}

/// 全部域 store 的汇集点
pub struct Stores {
    pub user: user::UserStore,
    pub portfolio: portfolio::PortfolioStore,
    pub assignment: assignment::AssignmentStore,
    pub analytics: analytics::AnalyticsStore,
    pub notification: notification::NotificationStore,
    pub theme: theme::ThemeStore,
}

impl Stores {
    pub fn new(
        gateway: Arc<ApiGateway>,
        session: Arc<SessionProvider>,
        toasts: Arc<ToastBus>,
        theme_file: impl Into<std::path::PathBuf>,
    ) -> Self {
        Self {
            user: user::UserStore::new(Arc::clone(&gateway), session, Arc::clone(&toasts)),
            portfolio: portfolio::PortfolioStore::new(Arc::clone(&gateway), Arc::clone(&toasts)),
            assignment: assignment::AssignmentStore::new(
                Arc::clone(&gateway),
                Arc::clone(&toasts),
            ),
            analytics: analytics::AnalyticsStore::new(Arc::clone(&gateway), Arc::clone(&toasts)),
            notification: notification::NotificationStore::new(gateway, toasts),
            theme: theme::ThemeStore::new(theme_file),
        }
    }
}
