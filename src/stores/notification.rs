//! 通知域 store

use std::sync::{Arc, RwLock};

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::notifications::entities::Notification;
use crate::models::ListParams;
use crate::services::notifications::NotificationService;
use crate::toast::ToastBus;

pub struct NotificationStore {
    service: NotificationService,
    toasts: Arc<ToastBus>,
    items: RwLock<Vec<Notification>>,
}

impl NotificationStore {
    pub fn new(gateway: Arc<ApiGateway>, toasts: Arc<ToastBus>) -> Self {
        Self {
            service: NotificationService::new(gateway),
            toasts,
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.read().unwrap().clone()
    }

    pub fn unread_count(&self) -> usize {
        self.items.read().unwrap().iter().filter(|n| !n.is_read).count()
    }

    pub async fn fetch_list(&self, params: &ListParams) -> Result<()> {
        let envelope = self.service.list(params).await.inspect_err(|e| {
            tracing::error!("Failed to fetch notifications: {e}");
        })?;
        *self.items.write().unwrap() = envelope.results;
        Ok(())
    }

    /// 单条已读，本地立即翻转 is_read
    pub async fn mark_read(&self, id: i64) -> Result<()> {
        self.service.mark_read(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to mark notification as read: {e}");
        })?;
        let mut items = self.items.write().unwrap();
        if let Some(item) = items.iter_mut().find(|n| n.id == id) {
            item.is_read = true;
        }
        Ok(())
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        self.service.mark_all_read().await.inspect_err(|e| {
            tracing::error!("Failed to mark all notifications as read: {e}");
        })?;
        for item in self.items.write().unwrap().iter_mut() {
            item.is_read = true;
        }
        self.toasts.success("Barcha bildirishnomalar o'qildi");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FixtureTransport;
    use std::time::Duration;

    fn store() -> NotificationStore {
        let toasts = ToastBus::new(Duration::ZERO);
        let (gateway, _rx) = ApiGateway::new(Arc::new(FixtureTransport::new()), toasts.clone());
        NotificationStore::new(gateway, toasts)
    }

    #[tokio::test]
    async fn test_unread_count() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        assert_eq!(store.items().len(), 3);
        assert_eq!(store.unread_count(), 2);
    }

    #[tokio::test]
    async fn test_mark_read_flips_locally() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        store.mark_read(1).await.unwrap();
        assert_eq!(store.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_read() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        store.mark_all_read().await.unwrap();
        assert_eq!(store.unread_count(), 0);
    }
}
