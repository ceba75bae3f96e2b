use serde::{Deserialize, Serialize};

use crate::models::common::labels::StatusLabel;

// 档案状态
//
// 状态迁移只有 pending → approved / pending → rejected，由管理员发起。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStatus {
    Pending,  // 待审核
    Approved, // 已通过
    Rejected, // 已驳回
}

impl PortfolioStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";
}

impl<'de> Deserialize<'de> for PortfolioStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            PortfolioStatus::PENDING => Ok(PortfolioStatus::Pending),
            PortfolioStatus::APPROVED => Ok(PortfolioStatus::Approved),
            PortfolioStatus::REJECTED => Ok(PortfolioStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的档案状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for PortfolioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortfolioStatus::Pending => write!(f, "pending"),
            PortfolioStatus::Approved => write!(f, "approved"),
            PortfolioStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for PortfolioStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PortfolioStatus::Pending),
            "approved" => Ok(PortfolioStatus::Approved),
            "rejected" => Ok(PortfolioStatus::Rejected),
            _ => Err(format!("Invalid portfolio status: {s}")),
        }
    }
}

// 档案所有者引用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioOwner {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub department: Option<String>,
}

// 档案附件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: i64,
    pub file_name: String,
    #[serde(default)]
    pub file_size: i64,
    #[serde(default)]
    pub file_url: Option<String>,
}

// 档案评论
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioComment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author: Option<PortfolioOwner>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 档案状态变更历史
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioHistoryEntry {
    pub id: i64,
    pub status: PortfolioStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub changed_by: Option<PortfolioOwner>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 教师档案实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub status: PortfolioStatus,
    #[serde(default)]
    pub is_public: bool,
    pub teacher: PortfolioOwner,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub comments: Vec<PortfolioComment>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 档案分类目录（表单用，产品文案保持乌兹别克语）
pub const PORTFOLIO_CATEGORIES: &[(&str, &str)] = &[
    ("teaching", "O'quv materiallari"),
    ("research", "Ilmiy ishlar va nashrlar"),
    ("certificates", "Sertifikatlar va mukofotlar"),
    ("projects", "Loyihalar"),
    ("professional", "Kasbiy rivojlanish"),
    ("other", "Boshqa"),
];

/// 档案状态标签目录（含徽章色调）
pub const PORTFOLIO_STATUSES: &[StatusLabel] = &[
    StatusLabel {
        value: "pending",
        label: "Kutilmoqda",
        color: "warning",
    },
    StatusLabel {
        value: "approved",
        label: "Tasdiqlangan",
        color: "success",
    },
    StatusLabel {
        value: "rejected",
        label: "Rad etilgan",
        color: "danger",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::labels::label_for;

    #[test]
    fn test_status_catalog_covers_every_status() {
        for status in [
            PortfolioStatus::Pending,
            PortfolioStatus::Approved,
            PortfolioStatus::Rejected,
        ] {
            assert!(label_for(PORTFOLIO_STATUSES, &status.to_string()).is_some());
        }
        assert_eq!(label_for(PORTFOLIO_STATUSES, "approved"), Some("Tasdiqlangan"));
    }

    #[test]
    fn test_category_catalog_values_are_distinct() {
        let mut values: Vec<&str> = PORTFOLIO_CATEGORIES.iter().map(|(v, _)| *v).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), PORTFOLIO_CATEGORIES.len());
    }
}
