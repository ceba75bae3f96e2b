use serde::Serialize;

// 创建报表任务请求
#[derive(Debug, Clone, Serialize)]
pub struct CreateReportRequest {
    #[serde(rename = "type")]
    pub report_type: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

// 即时导出请求（POST /api/analytics/export/，响应为二进制）
#[derive(Debug, Clone, Serialize)]
pub struct QuickExportRequest {
    #[serde(rename = "type")]
    pub export_type: String,
    pub format: String,
}

impl QuickExportRequest {
    /// 下载文件的建议扩展名
    pub fn file_extension(&self) -> &str {
        if self.format == "excel" { "xlsx" } else { &self.format }
    }
}
