//! 统计分析服务

use std::sync::Arc;

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::analytics::entities::{ChartData, DashboardOverview, Report, TeacherPerformance};
use crate::models::analytics::requests::{CreateReportRequest, QuickExportRequest};
use crate::models::{ListEnvelope, ListParams};

pub struct AnalyticsService {
    gateway: Arc<ApiGateway>,
}

impl AnalyticsService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    pub async fn dashboard_overview(&self) -> Result<DashboardOverview> {
        self.gateway
            .get_json("/api/analytics/dashboard/overview/", &ListParams::new())
            .await
    }

    pub async fn dashboard_widgets(&self) -> Result<serde_json::Value> {
        self.gateway
            .get_json("/api/analytics/dashboard/widgets/", &ListParams::new())
            .await
    }

    /// 图表数据，chart 为图表标识（portfolio_trend 等）
    pub async fn chart(&self, chart: &str, params: &ListParams) -> Result<ChartData> {
        self.gateway
            .get_json(&format!("/api/analytics/charts/{chart}/"), params)
            .await
    }

    pub async fn portfolio_analytics(&self, params: &ListParams) -> Result<serde_json::Value> {
        self.gateway.get_json("/api/analytics/portfolios/", params).await
    }

    pub async fn assignment_analytics(&self, params: &ListParams) -> Result<serde_json::Value> {
        self.gateway.get_json("/api/analytics/assignments/", params).await
    }

    pub async fn teacher_performance(
        &self,
        params: &ListParams,
    ) -> Result<ListEnvelope<TeacherPerformance>> {
        self.gateway.get_json("/api/analytics/teachers/", params).await
    }

    pub async fn teacher_detail(
        &self,
        id: i64,
        params: &ListParams,
    ) -> Result<TeacherPerformance> {
        self.gateway
            .get_json(&format!("/api/analytics/teachers/{id}/"), params)
            .await
    }

    pub async fn reports(&self, params: &ListParams) -> Result<ListEnvelope<Report>> {
        self.gateway.get_json("/api/analytics/reports/", params).await
    }

    pub async fn report(&self, id: i64) -> Result<Report> {
        self.gateway
            .get_json(&format!("/api/analytics/reports/{id}/"), &ListParams::new())
            .await
    }

    pub async fn create_report(&self, request: &CreateReportRequest) -> Result<Report> {
        self.gateway.post_json("/api/analytics/reports/", request).await
    }

    pub async fn delete_report(&self, id: i64) -> Result<()> {
        self.gateway
            .delete(&format!("/api/analytics/reports/{id}/"))
            .await
    }

    /// 已生成报表的文件内容
    pub async fn download_report(&self, id: i64) -> Result<Vec<u8>> {
        self.gateway
            .get_bytes(&format!("/api/analytics/reports/{id}/download/"))
            .await
    }

    /// 同步快捷导出，直接返回文件字节
    pub async fn quick_export(&self, request: &QuickExportRequest) -> Result<Vec<u8>> {
        self.gateway.post_bytes("/api/analytics/export/", request).await
    }

    pub async fn clear_cache(&self) -> Result<()> {
        self.gateway.delete("/api/analytics/cache/").await
    }
}
