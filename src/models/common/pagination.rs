use serde::{Deserialize, Serialize};

use super::params::ListParams;

// 列表端点的分页封套（后端契约: {results, count, next, previous}）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub results: Vec<T>,
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> ListEnvelope<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

// 客户端分页状态（store 内持有，每次 fetch 后由封套重算）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            total_pages: 1,
            total_count: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

impl Pagination {
    /// 从已合并的请求参数同步 page/page_size（缺省 1/20）
    pub fn track(&mut self, params: &ListParams) {
        self.page = params
            .get("page")
            .and_then(|v| v.parse().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        self.page_size = params
            .get("page_size")
            .and_then(|v| v.parse().ok())
            .filter(|s| *s >= 1)
            .unwrap_or(20);
    }

    /// 根据封套的 count/next/previous 重算分页状态
    pub fn apply<T>(&mut self, envelope: &ListEnvelope<T>) {
        self.total_count = envelope.count;
        self.total_pages = if self.page_size > 0 {
            ((envelope.count + self.page_size - 1) / self.page_size).max(1)
        } else {
            1
        };
        self.has_next = envelope.has_next();
        self.has_previous = envelope.has_previous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(count: i64, next: Option<&str>, prev: Option<&str>) -> ListEnvelope<i64> {
        ListEnvelope {
            results: Vec::new(),
            count,
            next: next.map(String::from),
            previous: prev.map(String::from),
        }
    }

    #[test]
    fn test_apply_recomputes_totals() {
        let mut p = Pagination::default();
        p.apply(&envelope(45, Some("?page=2"), None));
        assert_eq!(p.total_count, 45);
        assert_eq!(p.total_pages, 3); // 45 / 20, 向上取整
        assert!(p.has_next);
        assert!(!p.has_previous);
    }

    #[test]
    fn test_track_reads_page_params() {
        use crate::models::common::params::params;

        let mut p = Pagination::default();
        p.track(&params(&[("page", "3"), ("page_size", "10")]));
        assert_eq!(p.page, 3);
        assert_eq!(p.page_size, 10);

        // 参数缺失或非法时回到缺省值
        p.track(&params(&[("status", "pending"), ("page", "abc")]));
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 20);
    }

    #[test]
    fn test_apply_empty_list() {
        let mut p = Pagination::default();
        p.apply(&envelope(0, None, None));
        assert_eq!(p.total_count, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
    }
}
