//! 防抖与节流
//!
//! 搜索输入等高频触发场景用。Debouncer 是尾沿语义：静默期内的
//! 新调用取代旧调用，只有最后一次在延迟到期后执行。Throttler 是
//! 前沿语义：间隔内最多放行一次，多余的调用直接丢弃。

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// 调度一次执行；取代任何尚未到期的前一次调度
    pub fn call<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f().await;
        });
        let mut pending = self.pending.lock().unwrap();
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// 取消尚未到期的调度
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub struct Throttler {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl Throttler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// 前沿放行：间隔已过则立即执行并返回 true，否则丢弃返回 false
    pub fn call<F: FnOnce()>(&self, f: F) -> bool {
        let mut last = self.last.lock().unwrap();
        let now = Instant::now();
        if let Some(previous) = *last {
            if now.duration_since(previous) < self.interval {
                return false;
            }
        }
        *last = Some(now);
        drop(last);
        f();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_debounce_only_last_call_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let counter = Arc::clone(&counter);
            debouncer.call(move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel_drops_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let counter = Arc::new(AtomicUsize::new(0));

        let cloned = Arc::clone(&counter);
        debouncer.call(move || async move {
            cloned.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_leading_edge() {
        let throttler = Throttler::new(Duration::from_millis(200));
        let counter = AtomicUsize::new(0);

        assert!(throttler.call(|| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        // 间隔内的调用被丢弃
        assert!(!throttler.call(|| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_millis(250)).await;
        assert!(throttler.call(|| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
