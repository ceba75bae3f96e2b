//! 状态与优先级标签目录
//!
//! 表单下拉与徽章展示用的静态目录。产品文案保持乌兹别克语，
//! color 为展示层的徽章色调名（warning/success/danger/info/gray）。

/// 目录条目：线上值、乌语标签、徽章色调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabel {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// 按线上值查标签文案
pub fn label_for(catalog: &'static [StatusLabel], value: &str) -> Option<&'static str> {
    catalog.iter().find(|e| e.value == value).map(|e| e.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[StatusLabel] = &[StatusLabel {
        value: "pending",
        label: "Kutilmoqda",
        color: "warning",
    }];

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(CATALOG, "pending"), Some("Kutilmoqda"));
        assert_eq!(label_for(CATALOG, "archived"), None);
    }
}
