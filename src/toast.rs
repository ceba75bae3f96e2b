//! 通知（toast）注册表
//!
//! 进程内唯一的通知容器，由 AppContext 持有并显式传递，不做环境全局。
//! 每条通知有独立的自毁定时器；移除按 id 恒等匹配，而不是按下标，
//! 并发关闭不会误删相邻条目。

use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
    pub duration: Duration,
}

pub struct ToastBus {
    toasts: DashMap<u64, Toast>,
    seq: AtomicU64,
    default_duration: Duration,
}

impl ToastBus {
    pub fn new(default_duration: Duration) -> Arc<Self> {
        Arc::new(Self {
            toasts: DashMap::new(),
            seq: AtomicU64::new(0),
            default_duration,
        })
    }

    /// 展示一条通知；duration 为零表示不自动过期
    pub fn show(self: &Arc<Self>, message: impl Into<String>, level: ToastLevel) -> u64 {
        self.show_for(message, level, self.default_duration)
    }

    pub fn show_for(
        self: &Arc<Self>,
        message: impl Into<String>,
        level: ToastLevel,
        duration: Duration,
    ) -> u64 {
        let id = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let toast = Toast {
            id,
            message: message.into(),
            level,
            duration,
        };
        tracing::debug!(toast_id = id, level = ?level, "toast: {}", toast.message);
        self.toasts.insert(id, toast);

        if !duration.is_zero() {
            // 没有运行时（纯同步测试）就退化为手动移除
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                let bus = Arc::clone(self);
                handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    bus.remove(id);
                });
            }
        }
        id
    }

    pub fn success(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastLevel::Success)
    }

    pub fn error(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastLevel::Error)
    }

    pub fn warning(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastLevel::Warning)
    }

    pub fn info(self: &Arc<Self>, message: impl Into<String>) -> u64 {
        self.show(message, ToastLevel::Info)
    }

    /// 按 id 移除；不存在时为空操作
    pub fn remove(&self, id: u64) -> bool {
        self.toasts.remove(&id).is_some()
    }

    pub fn clear(&self) {
        self.toasts.clear();
    }

    /// 当前可见通知，按创建顺序
    pub fn list(&self) -> Vec<Toast> {
        let mut items: Vec<Toast> = self.toasts.iter().map(|e| e.value().clone()).collect();
        items.sort_by_key(|t| t.id);
        items
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_duration() {
        let bus = ToastBus::new(Duration::from_millis(100));
        bus.success("Saqlandi");
        assert_eq!(bus.len(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        assert!(bus.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_removal_by_identity_not_index() {
        let bus = ToastBus::new(Duration::ZERO);
        let a = bus.error("birinchi");
        let b = bus.error("ikkinchi");
        let c = bus.error("uchinchi");

        // 先删中间一条，再删第一条；剩余的必须是第三条
        assert!(bus.remove(b));
        assert!(bus.remove(a));
        let left = bus.list();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, c);
        assert_eq!(left[0].message, "uchinchi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_remove_is_noop() {
        let bus = ToastBus::new(Duration::ZERO);
        let id = bus.info("bir marta");
        assert!(bus.remove(id));
        assert!(!bus.remove(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_ordered_by_creation() {
        let bus = ToastBus::new(Duration::ZERO);
        bus.info("a");
        bus.info("b");
        bus.info("c");
        let ids: Vec<u64> = bus.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
