//! 统计分析域 store
//!
//! 仪表盘总览与图表缓存、报表任务列表、二进制下载与即时导出。
//! 报表创建立即返回，完成状态靠再次拉取刷新，不做轮询。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::analytics::entities::{ChartData, DashboardOverview, Report, TeacherPerformance};
use crate::models::analytics::requests::{CreateReportRequest, QuickExportRequest};
use crate::models::ListParams;
use crate::services::analytics::AnalyticsService;
use crate::toast::ToastBus;

pub struct AnalyticsStore {
    service: AnalyticsService,
    toasts: Arc<ToastBus>,
    overview: RwLock<Option<DashboardOverview>>,
    charts: RwLock<HashMap<String, ChartData>>,
    reports: RwLock<Vec<Report>>,
    is_loading: RwLock<bool>,
}

impl AnalyticsStore {
    pub fn new(gateway: Arc<ApiGateway>, toasts: Arc<ToastBus>) -> Self {
        Self {
            service: AnalyticsService::new(gateway),
            toasts,
            overview: RwLock::new(None),
            charts: RwLock::new(HashMap::new()),
            reports: RwLock::new(Vec::new()),
            is_loading: RwLock::new(false),
        }
    }

    pub fn overview(&self) -> Option<DashboardOverview> {
        self.overview.read().unwrap().clone()
    }

    pub fn chart(&self, name: &str) -> Option<ChartData> {
        self.charts.read().unwrap().get(name).cloned()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.read().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.is_loading.read().unwrap()
    }

    pub async fn fetch_overview(&self) -> Result<DashboardOverview> {
        *self.is_loading.write().unwrap() = true;
        let result = self.service.dashboard_overview().await;
        *self.is_loading.write().unwrap() = false;

        let overview = result.inspect_err(|e| {
            tracing::error!("Failed to fetch dashboard overview: {e}");
        })?;
        *self.overview.write().unwrap() = Some(overview.clone());
        Ok(overview)
    }

    /// 图表数据按标识缓存，整体替换
    pub async fn fetch_chart(&self, name: &str, params: &ListParams) -> Result<ChartData> {
        let data = self.service.chart(name, params).await.inspect_err(|e| {
            tracing::error!(chart = name, "Failed to fetch chart: {e}");
        })?;
        self.charts
            .write()
            .unwrap()
            .insert(name.to_string(), data.clone());
        Ok(data)
    }

    pub async fn fetch_teacher_performance(
        &self,
        params: &ListParams,
    ) -> Result<Vec<TeacherPerformance>> {
        let envelope = self
            .service
            .teacher_performance(params)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to fetch teacher performance: {e}");
            })?;
        Ok(envelope.results)
    }

    pub async fn fetch_teacher_detail(&self, id: i64) -> Result<TeacherPerformance> {
        self.service
            .teacher_detail(id, &ListParams::new())
            .await
            .inspect_err(|e| {
                tracing::error!(id, "Failed to fetch teacher detail: {e}");
            })
    }

    pub async fn fetch_reports(&self, params: &ListParams) -> Result<()> {
        *self.is_loading.write().unwrap() = true;
        let result = self.service.reports(params).await;
        *self.is_loading.write().unwrap() = false;

        let envelope = result.inspect_err(|e| {
            tracing::error!("Failed to fetch reports: {e}");
        })?;
        *self.reports.write().unwrap() = envelope.results;
        Ok(())
    }

    /// 创建报表任务后头插到列表
    pub async fn create_report(&self, request: &CreateReportRequest) -> Result<Report> {
        let report = self.service.create_report(request).await.inspect_err(|e| {
            tracing::error!("Failed to create report: {e}");
        })?;
        self.reports.write().unwrap().insert(0, report.clone());
        self.toasts.success("Hisobot navbatga qo'yildi");
        Ok(report)
    }

    pub async fn delete_report(&self, id: i64) -> Result<()> {
        self.service.delete_report(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to delete report: {e}");
        })?;
        self.reports.write().unwrap().retain(|r| r.id != id);
        self.toasts.success("Hisobot o'chirildi");
        Ok(())
    }

    pub async fn download_report(&self, id: i64) -> Result<Vec<u8>> {
        self.service.download_report(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to download report: {e}");
        })
    }

    /// 即时导出：返回文件字节与建议文件名
    pub async fn quick_export(&self, request: &QuickExportRequest) -> Result<(Vec<u8>, String)> {
        let bytes = self.service.quick_export(request).await.inspect_err(|e| {
            tracing::error!("Failed to export: {e}");
        })?;
        let filename = format!(
            "{}_{}.{}",
            request.export_type,
            chrono::Utc::now().format("%Y%m%d"),
            request.file_extension()
        );
        Ok((bytes, filename))
    }

    pub async fn clear_cache(&self) -> Result<()> {
        self.service.clear_cache().await.inspect_err(|e| {
            tracing::error!("Failed to clear analytics cache: {e}");
        })?;
        self.toasts.success("Kesh tozalandi");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FixtureTransport;
    use std::time::Duration;

    fn store() -> AnalyticsStore {
        let toasts = ToastBus::new(Duration::ZERO);
        let (gateway, _rx) = ApiGateway::new(Arc::new(FixtureTransport::new()), toasts.clone());
        AnalyticsStore::new(gateway, toasts)
    }

    #[tokio::test]
    async fn test_fetch_overview_caches() {
        let store = store();
        let overview = store.fetch_overview().await.unwrap();
        assert_eq!(overview.total_portfolios, 45);
        assert!(store.overview().is_some());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_charts_cached_by_name() {
        let store = store();
        store
            .fetch_chart("portfolio_trend", &ListParams::new())
            .await
            .unwrap();
        assert!(store.chart("portfolio_trend").is_some());
        assert!(store.chart("assignment_status").is_none());
    }

    #[tokio::test]
    async fn test_teacher_detail() {
        let store = store();
        let teacher = store.fetch_teacher_detail(3).await.unwrap();
        assert_eq!(teacher.id, 3);
        assert_eq!(teacher.full_name, "Aliyev Vali");
    }

    #[tokio::test]
    async fn test_create_report_unshifts() {
        let store = store();
        store.fetch_reports(&ListParams::new()).await.unwrap();
        assert_eq!(store.reports().len(), 2);
        assert!(!store.is_loading());

        let report = store
            .create_report(&CreateReportRequest {
                report_type: "portfolio".into(),
                format: "xlsx".into(),
                period: None,
            })
            .await
            .unwrap();
        let reports = store.reports();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].id, report.id);
    }

    #[tokio::test]
    async fn test_download_returns_bytes() {
        let store = store();
        let bytes = store.download_report(1).await.unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn test_quick_export_filename() {
        let store = store();
        let (bytes, filename) = store
            .quick_export(&QuickExportRequest {
                export_type: "portfolio".into(),
                format: "excel".into(),
            })
            .await
            .unwrap();
        assert!(!bytes.is_empty());
        assert!(filename.starts_with("portfolio_"));
        assert!(filename.ends_with(".xlsx"));
    }
}
