use serde::{Deserialize, Serialize};

// 报表/导出任务状态
//
// 异步语义：创建立即返回，完成靠再次拉取刷新，客户端不做轮询。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,    // 排队中
    Processing, // 生成中
    Completed,  // 已完成
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "processing" => Ok(ReportStatus::Processing),
            "completed" => Ok(ReportStatus::Completed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的报表状态: '{s}'. 支持的状态: pending, processing, completed"
            ))),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Processing => write!(f, "processing"),
            ReportStatus::Completed => write!(f, "completed"),
        }
    }
}

// 报表/导出任务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(rename = "type")]
    pub report_type: String,
    pub format: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub filename: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 仪表盘总览
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardOverview {
    #[serde(default)]
    pub total_portfolios: i64,
    #[serde(default)]
    pub pending_portfolios: i64,
    #[serde(default)]
    pub total_assignments: i64,
    #[serde(default)]
    pub active_teachers: i64,
    // 后端可能追加的零散指标，照单全收用于展示
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// 图表数据只做透传展示，保持松散结构
pub type ChartData = serde_json::Value;

// 教师绩效行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherPerformance {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub portfolios_approved: i64,
    #[serde(default)]
    pub assignments_completed: i64,
    #[serde(default)]
    pub total_score: f64,
}
