use serde::{Deserialize, Serialize};

use crate::models::common::labels::StatusLabel;

// 任务状态
//
// overdue 是派生状态（截止时间已过且未完成），以服务端下发值为准，
// 客户端不自行覆盖；展示层的派生判断见 utils::datetime::is_overdue。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,    // 待开始
    InProgress, // 进行中
    Completed,  // 已完成
    Overdue,    // 已逾期
    Cancelled,  // 已取消
}

impl AssignmentStatus {
    pub const VALUES: &'static [(&'static str, AssignmentStatus)] = &[
        ("pending", AssignmentStatus::Pending),
        ("in_progress", AssignmentStatus::InProgress),
        ("completed", AssignmentStatus::Completed),
        ("overdue", AssignmentStatus::Overdue),
        ("cancelled", AssignmentStatus::Cancelled),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::InProgress => "in_progress",
            AssignmentStatus::Completed => "completed",
            AssignmentStatus::Overdue => "overdue",
            AssignmentStatus::Cancelled => "cancelled",
        }
    }
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::VALUES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, v)| *v)
            .ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "无效的任务状态: '{s}'. 支持的状态: pending, in_progress, completed, overdue, cancelled"
                ))
            })
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VALUES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, v)| *v)
            .ok_or_else(|| format!("Invalid assignment status: {s}"))
    }
}

// 任务优先级
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(serde::de::Error::custom(format!(
                "无效的优先级: '{s}'. 支持的优先级: low, medium, high"
            ))),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

// 人员引用（被指派人/创建人）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
}

// 任务关联的分类引用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

// 任务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    pub status: AssignmentStatus,
    pub priority: Priority,
    pub deadline: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub assigned_to: Option<PersonRef>,
    #[serde(default)]
    pub created_by: Option<PersonRef>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// 任务状态标签目录（含徽章色调）
pub const ASSIGNMENT_STATUSES: &[StatusLabel] = &[
    StatusLabel {
        value: "pending",
        label: "Kutilmoqda",
        color: "warning",
    },
    StatusLabel {
        value: "in_progress",
        label: "Bajarilmoqda",
        color: "info",
    },
    StatusLabel {
        value: "completed",
        label: "Bajarildi",
        color: "success",
    },
    StatusLabel {
        value: "overdue",
        label: "Muddati o'tgan",
        color: "danger",
    },
    StatusLabel {
        value: "cancelled",
        label: "Bekor qilindi",
        color: "gray",
    },
];

/// 优先级标签目录
pub const ASSIGNMENT_PRIORITIES: &[StatusLabel] = &[
    StatusLabel {
        value: "low",
        label: "Past",
        color: "gray",
    },
    StatusLabel {
        value: "medium",
        label: "O'rta",
        color: "warning",
    },
    StatusLabel {
        value: "high",
        label: "Yuqori",
        color: "danger",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::labels::label_for;

    #[test]
    fn test_status_catalog_covers_every_status() {
        for (value, _) in AssignmentStatus::VALUES {
            assert!(label_for(ASSIGNMENT_STATUSES, value).is_some());
        }
        assert_eq!(label_for(ASSIGNMENT_STATUSES, "in_progress"), Some("Bajarilmoqda"));
    }

    #[test]
    fn test_priority_catalog_labels() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert!(label_for(ASSIGNMENT_PRIORITIES, &p.to_string()).is_some());
        }
        assert_eq!(label_for(ASSIGNMENT_PRIORITIES, "high"), Some("Yuqori"));
    }

    #[test]
    fn test_status_round_trip() {
        let s: AssignmentStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(s, AssignmentStatus::InProgress);
        assert_eq!(s.to_string(), "in_progress");
    }

    #[test]
    fn test_status_rejects_unknown() {
        let res: Result<AssignmentStatus, _> = serde_json::from_str("\"done\"");
        assert!(res.is_err());
    }

    #[test]
    fn test_priority_parse() {
        let p: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(p, Priority::High);
    }
}
