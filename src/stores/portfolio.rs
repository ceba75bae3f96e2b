//! 档案域 store

use std::sync::{Arc, RwLock};

use crate::errors::{ProftError, Result};
use crate::gateway::{ApiGateway, FilePart};
use crate::models::portfolios::entities::{Portfolio, PortfolioComment};
use crate::models::portfolios::requests::{
    AddCommentRequest, CreatePortfolioRequest, ReviewRequest, UpdatePortfolioRequest,
};
use crate::models::portfolios::responses::PortfolioStats;
use crate::models::common::params::params;
use crate::models::ListParams;
use crate::services::portfolios::PortfolioService;
use crate::toast::ToastBus;

use super::ListState;

pub struct PortfolioStore {
    service: PortfolioService,
    toasts: Arc<ToastBus>,
    state: RwLock<ListState<Portfolio>>,
    stats: RwLock<Option<PortfolioStats>>,
}

impl PortfolioStore {
    pub fn new(gateway: Arc<ApiGateway>, toasts: Arc<ToastBus>) -> Self {
        Self {
            service: PortfolioService::new(gateway),
            toasts,
            state: RwLock::new(ListState::default()),
            stats: RwLock::new(None),
        }
    }

    pub fn snapshot(&self) -> ListState<Portfolio> {
        self.state.read().unwrap().clone()
    }

    pub fn stats(&self) -> Option<PortfolioStats> {
        self.stats.read().unwrap().clone()
    }

    /// 拉取列表：显式参数覆盖持久化过滤器，空值剔除，整体替换 items
    pub async fn fetch_list(&self, params: &ListParams) -> Result<()> {
        let merged = super::begin_fetch(&self.state, params);
        let result = self.service.list(&merged).await;
        super::finish_fetch(&self.state, &merged, result, "portfolios")
    }

    /// 翻页：把 page 并入过滤器后重新拉取
    pub async fn go_to_page(&self, page: i64) -> Result<()> {
        self.fetch_list(&params(&[("page", &page.to_string())])).await
    }

    pub async fn fetch_one(&self, id: i64) -> Result<Portfolio> {
        let portfolio = self.service.get(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to fetch portfolio: {e}");
        })?;
        self.state.write().unwrap().current = Some(portfolio.clone());
        Ok(portfolio)
    }

    /// 创建后重新拉取列表（服务端补全所有者与时间戳）
    pub async fn create(&self, request: &CreatePortfolioRequest) -> Result<Portfolio> {
        let portfolio = self.service.create(request).await.inspect_err(|e| {
            tracing::error!("Failed to create portfolio: {e}");
        })?;
        self.toasts.success("Portfolio muvaffaqiyatli yaratildi");
        self.fetch_list(&ListParams::new()).await?;
        Ok(portfolio)
    }

    /// 更新后按 id 就地替换，不重新拉取
    pub async fn update(&self, id: i64, request: &UpdatePortfolioRequest) -> Result<Portfolio> {
        let portfolio = self.service.update(id, request).await.inspect_err(|e| {
            tracing::error!(id, "Failed to update portfolio: {e}");
        })?;
        let mut state = self.state.write().unwrap();
        if let Some(slot) = state.items.iter_mut().find(|p| p.id == id) {
            *slot = portfolio.clone();
        }
        if state.current.as_ref().is_some_and(|p| p.id == id) {
            state.current = Some(portfolio.clone());
        }
        drop(state);
        self.toasts.success("Portfolio yangilandi");
        Ok(portfolio)
    }

    /// 删除后本地剔除，不重新拉取
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.service.delete(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to delete portfolio: {e}");
        })?;
        let mut state = self.state.write().unwrap();
        state.items.retain(|p| p.id != id);
        if state.current.as_ref().is_some_and(|p| p.id == id) {
            state.current = None;
        }
        drop(state);
        self.toasts.success("Portfolio o'chirildi");
        Ok(())
    }

    pub async fn approve(&self, id: i64, comment: String) -> Result<()> {
        self.service
            .approve(id, &ReviewRequest { comment })
            .await
            .inspect_err(|e| {
                tracing::error!(id, "Failed to approve portfolio: {e}");
            })?;
        self.remove_reviewed(id);
        self.toasts.success("Portfolio tasdiqlandi");
        Ok(())
    }

    /// 驳回必须附理由；校验在网络调用之前完成
    pub async fn reject(&self, id: i64, comment: String) -> Result<()> {
        if comment.trim().is_empty() {
            let text = "Rad etish uchun izoh kiritish majburiy";
            self.toasts.warning(text);
            return Err(ProftError::validation(text));
        }
        self.service
            .reject(id, &ReviewRequest { comment })
            .await
            .inspect_err(|e| {
                tracing::error!(id, "Failed to reject portfolio: {e}");
            })?;
        self.remove_reviewed(id);
        self.toasts.success("Portfolio rad etildi");
        Ok(())
    }

    // 审批队列视图：已处理的条目立即离开列表
    fn remove_reviewed(&self, id: i64) {
        let mut state = self.state.write().unwrap();
        state.items.retain(|p| p.id != id);
    }

    pub async fn add_comment(&self, id: i64, content: String) -> Result<PortfolioComment> {
        let comment = self
            .service
            .add_comment(
                id,
                &AddCommentRequest {
                    content,
                    parent_id: None,
                },
            )
            .await
            .inspect_err(|e| {
                tracing::error!(id, "Failed to add comment: {e}");
            })?;
        let mut state = self.state.write().unwrap();
        if let Some(current) = state.current.as_mut().filter(|p| p.id == id) {
            current.comments.push(comment.clone());
        }
        Ok(comment)
    }

    pub async fn upload_attachment(&self, id: i64, file: FilePart) -> Result<()> {
        let attachment = self.service.upload_attachment(id, file).await.inspect_err(|e| {
            tracing::error!(id, "Failed to upload attachment: {e}");
        })?;
        let mut state = self.state.write().unwrap();
        if let Some(current) = state.current.as_mut().filter(|p| p.id == id) {
            current.attachments.push(attachment);
        }
        drop(state);
        self.toasts.success("Fayl yuklandi");
        Ok(())
    }

    pub async fn fetch_stats(&self) -> Result<PortfolioStats> {
        let stats = self.service.stats().await.inspect_err(|e| {
            tracing::error!("Failed to fetch portfolio stats: {e}");
        })?;
        *self.stats.write().unwrap() = Some(stats.clone());
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FixtureTransport;
    use std::time::Duration;

    fn store() -> PortfolioStore {
        let toasts = ToastBus::new(Duration::ZERO);
        let (gateway, _rx) = ApiGateway::new(Arc::new(FixtureTransport::new()), toasts.clone());
        PortfolioStore::new(gateway, toasts)
    }

    #[tokio::test]
    async fn test_fetch_list_replaces_items_and_pagination() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        let state = store.snapshot();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.pagination.total_count, 3);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_fetch_list_merges_and_strips_filters() {
        let store = store();
        store
            .fetch_list(&crate::models::common::params::params(&[(
                "status", "pending",
            )]))
            .await
            .unwrap();
        assert_eq!(store.snapshot().items.len(), 1);

        // 空值覆盖即清除该过滤器
        store
            .fetch_list(&crate::models::common::params::params(&[("status", "")]))
            .await
            .unwrap();
        let state = store.snapshot();
        assert!(!state.filters.contains_key("status"));
        assert_eq!(state.items.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_list_tracks_requested_page() {
        let store = store();
        store
            .fetch_list(&crate::models::common::params::params(&[("page", "2")]))
            .await
            .unwrap();
        let state = store.snapshot();
        assert_eq!(state.pagination.page, 2);
        assert_eq!(state.filters.get("page").map(String::as_str), Some("2"));
    }

    #[tokio::test]
    async fn test_go_to_page_then_filter_change_resets_page() {
        let store = store();
        store.go_to_page(3).await.unwrap();
        assert_eq!(store.snapshot().pagination.page, 3);

        // 过滤条件变化时回到第一页
        store
            .fetch_list(&crate::models::common::params::params(&[(
                "status", "pending",
            )]))
            .await
            .unwrap();
        let state = store.snapshot();
        assert_eq!(state.pagination.page, 1);
        assert!(!state.filters.contains_key("page"));
    }

    #[tokio::test]
    async fn test_delete_patches_locally() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        store.delete(2).await.unwrap();
        let state = store.snapshot();
        assert_eq!(state.items.len(), 2);
        assert!(state.items.iter().all(|p| p.id != 2));
    }

    #[tokio::test]
    async fn test_reject_without_comment_blocks_before_network() {
        let store = store();
        let err = store.reject(2, "   ".into()).await.unwrap_err();
        assert_eq!(err.code(), "E007");
    }

    #[tokio::test]
    async fn test_reject_with_comment_removes_from_queue() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        store.reject(2, "Hujjatlar yetarli emas".into()).await.unwrap();
        assert!(store.snapshot().items.iter().all(|p| p.id != 2));
    }

    #[tokio::test]
    async fn test_update_replaces_by_id() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        let updated = store
            .update(
                1,
                &UpdatePortfolioRequest {
                    title: Some("Yangilangan sarlavha".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Yangilangan sarlavha");
        let state = store.snapshot();
        let in_list = state.items.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(in_list.title, "Yangilangan sarlavha");
    }
}
