use serde::{Deserialize, Serialize};

// 任务/档案分类实体
//
// 权重与默认分值参与服务端的成绩计算，客户端只展示和编辑设置。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub default_score: f64,
    #[serde(default)]
    pub min_score: f64,
    #[serde(default = "default_weight")]
    pub score_weight: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, rename = "order")]
    pub display_order: i64,
    #[serde(default)]
    pub assignments_count: i64,
}

fn default_weight() -> f64 {
    1.0
}
