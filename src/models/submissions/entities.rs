use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::PersonRef;

// 任务答复实体
//
// grade 一旦写入，只能通过显式的重新评分操作修改，
// 客户端不提供对该字段的直接编辑。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment: i64,
    #[serde(default)]
    pub assignment_title: String,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub submitted_by: Option<PersonRef>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
