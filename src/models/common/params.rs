use std::collections::BTreeMap;

/// 查询参数集合
///
/// store 的 fetch_list 统一做三件事：显式参数覆盖持久化过滤器、
/// 去除空值、再交给 service 构造一次请求。
pub type ListParams = BTreeMap<String, String>;

/// 显式参数覆盖 base，之后去除空值
pub fn merge_params(base: &ListParams, overrides: &ListParams) -> ListParams {
    let mut merged = base.clone();
    for (k, v) in overrides {
        merged.insert(k.clone(), v.clone());
    }
    merged.retain(|_, v| !v.is_empty());
    merged
}

/// 便捷构造
pub fn params(pairs: &[(&str, &str)]) -> ListParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_and_strips_empty() {
        let base = params(&[("status", "pending"), ("search", ""), ("ordering", "-created_at")]);
        let over = params(&[("status", "approved"), ("page", "2")]);
        let merged = merge_params(&base, &over);

        assert_eq!(merged.get("status").map(String::as_str), Some("approved"));
        assert_eq!(merged.get("page").map(String::as_str), Some("2"));
        assert_eq!(merged.get("ordering").map(String::as_str), Some("-created_at"));
        // 空值被剔除，不会发到后端
        assert!(!merged.contains_key("search"));
    }

    #[test]
    fn test_merge_strips_empty_override() {
        let base = params(&[("category", "research")]);
        let over = params(&[("category", "")]);
        let merged = merge_params(&base, &over);
        assert!(!merged.contains_key("category"));
    }
}
