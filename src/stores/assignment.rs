//! 任务域 store
//!
//! 任务 CRUD 与状态流转、分类 CRUD、答复提交与评分、统计。

use std::sync::{Arc, RwLock};

use crate::errors::Result;
use crate::gateway::ApiGateway;
use crate::models::assignments::entities::{Assignment, AssignmentStatus};
use crate::models::assignments::requests::{
    CreateAssignmentRequest, SubmitAssignmentRequest, UpdateAssignmentRequest, UpdateScoreRequest,
    UpdateStatusRequest,
};
use crate::models::assignments::responses::{
    AssignmentScore, AssignmentStatistics, ScoreHistoryEntry,
};
use crate::models::categories::entities::Category;
use crate::models::categories::requests::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::common::params::params;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::ListParams;
use crate::services::assignments::AssignmentService;
use crate::services::categories::CategoryService;
use crate::services::submissions::SubmissionService;
use crate::toast::ToastBus;

use super::ListState;

pub struct AssignmentStore {
    assignments: AssignmentService,
    categories: CategoryService,
    submissions: SubmissionService,
    toasts: Arc<ToastBus>,
    state: RwLock<ListState<Assignment>>,
    category_items: RwLock<Vec<Category>>,
    submission_state: RwLock<ListState<Submission>>,
    statistics: RwLock<Option<AssignmentStatistics>>,
}

impl AssignmentStore {
    pub fn new(gateway: Arc<ApiGateway>, toasts: Arc<ToastBus>) -> Self {
        Self {
            assignments: AssignmentService::new(Arc::clone(&gateway)),
            categories: CategoryService::new(Arc::clone(&gateway)),
            submissions: SubmissionService::new(gateway),
            toasts,
            state: RwLock::new(ListState::default()),
            category_items: RwLock::new(Vec::new()),
            submission_state: RwLock::new(ListState::default()),
            statistics: RwLock::new(None),
        }
    }

    pub fn snapshot(&self) -> ListState<Assignment> {
        self.state.read().unwrap().clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.category_items.read().unwrap().clone()
    }

    pub fn submissions(&self) -> ListState<Submission> {
        self.submission_state.read().unwrap().clone()
    }

    pub fn statistics(&self) -> Option<AssignmentStatistics> {
        self.statistics.read().unwrap().clone()
    }

    pub async fn fetch_list(&self, params: &ListParams) -> Result<()> {
        let merged = super::begin_fetch(&self.state, params);
        let result = self.assignments.list(&merged).await;
        super::finish_fetch(&self.state, &merged, result, "assignments")
    }

    /// 教师视图：本人名下的任务替换同一列表
    pub async fn fetch_my_assignments(&self, params: &ListParams) -> Result<()> {
        let merged = super::begin_fetch(&self.state, params);
        let result = self.assignments.my_assignments(&merged).await;
        super::finish_fetch(&self.state, &merged, result, "my assignments")
    }

    /// 翻页：把 page 并入过滤器后重新拉取
    pub async fn go_to_page(&self, page: i64) -> Result<()> {
        self.fetch_list(&params(&[("page", &page.to_string())])).await
    }

    pub async fn fetch_one(&self, id: i64) -> Result<Assignment> {
        let assignment = self.assignments.get(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to fetch assignment: {e}");
        })?;
        self.state.write().unwrap().current = Some(assignment.clone());
        Ok(assignment)
    }

    /// 创建后头插，不重新拉取
    pub async fn create(&self, request: &CreateAssignmentRequest) -> Result<Assignment> {
        let assignment = self.assignments.create(request).await.inspect_err(|e| {
            tracing::error!("Failed to create assignment: {e}");
        })?;
        self.state.write().unwrap().items.insert(0, assignment.clone());
        self.toasts.success("Topshiriq yaratildi");
        Ok(assignment)
    }

    pub async fn update(&self, id: i64, request: &UpdateAssignmentRequest) -> Result<Assignment> {
        let assignment = self.assignments.update(id, request).await.inspect_err(|e| {
            tracing::error!(id, "Failed to update assignment: {e}");
        })?;
        let mut state = self.state.write().unwrap();
        if let Some(slot) = state.items.iter_mut().find(|a| a.id == id) {
            *slot = assignment.clone();
        }
        if state.current.as_ref().is_some_and(|a| a.id == id) {
            state.current = Some(assignment.clone());
        }
        drop(state);
        self.toasts.success("Topshiriq yangilandi");
        Ok(assignment)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.assignments.delete(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to delete assignment: {e}");
        })?;
        let mut state = self.state.write().unwrap();
        state.items.retain(|a| a.id != id);
        if state.current.as_ref().is_some_and(|a| a.id == id) {
            state.current = None;
        }
        drop(state);
        self.toasts.success("Topshiriq o'chirildi");
        Ok(())
    }

    /// 状态流转；成功后就地改写本地条目的状态字段
    pub async fn update_status(&self, id: i64, status: AssignmentStatus) -> Result<()> {
        self.assignments
            .update_status(id, &UpdateStatusRequest { status })
            .await
            .inspect_err(|e| {
                tracing::error!(id, "Failed to update assignment status: {e}");
            })?;
        let mut state = self.state.write().unwrap();
        if let Some(slot) = state.items.iter_mut().find(|a| a.id == id) {
            slot.status = status;
        }
        if let Some(current) = state.current.as_mut().filter(|a| a.id == id) {
            current.status = status;
        }
        Ok(())
    }

    pub async fn submit(&self, id: i64, request: &SubmitAssignmentRequest) -> Result<Submission> {
        let submission = self.assignments.submit(id, request).await.inspect_err(|e| {
            tracing::error!(id, "Failed to submit assignment: {e}");
        })?;
        self.toasts.success("Javob yuborildi");
        Ok(submission)
    }

    pub async fn fetch_statistics(&self) -> Result<AssignmentStatistics> {
        let stats = self.assignments.statistics().await.inspect_err(|e| {
            tracing::error!("Failed to fetch assignment statistics: {e}");
        })?;
        *self.statistics.write().unwrap() = Some(stats.clone());
        Ok(stats)
    }

    pub async fn fetch_score(&self, id: i64) -> Result<AssignmentScore> {
        self.assignments.score(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to fetch assignment score: {e}");
        })
    }

    pub async fn update_score(&self, id: i64, request: &UpdateScoreRequest) -> Result<AssignmentScore> {
        let score = self.assignments.update_score(id, request).await.inspect_err(|e| {
            tracing::error!(id, "Failed to update assignment score: {e}");
        })?;
        self.toasts.success("Ball sozlamalari yangilandi");
        Ok(score)
    }

    pub async fn fetch_score_history(
        &self,
        params: &ListParams,
    ) -> Result<Vec<ScoreHistoryEntry>> {
        let envelope = self.assignments.score_history(params).await.inspect_err(|e| {
            tracing::error!("Failed to fetch score history: {e}");
        })?;
        Ok(envelope.results)
    }

    // ---- 分类 ----

    pub async fn fetch_categories(&self, params: &ListParams) -> Result<()> {
        let envelope = self.categories.list(params).await.inspect_err(|e| {
            tracing::error!("Failed to fetch categories: {e}");
        })?;
        *self.category_items.write().unwrap() = envelope.results;
        Ok(())
    }

    pub async fn create_category(&self, request: &CreateCategoryRequest) -> Result<Category> {
        let category = self.categories.create(request).await.inspect_err(|e| {
            tracing::error!("Failed to create category: {e}");
        })?;
        self.category_items.write().unwrap().insert(0, category.clone());
        self.toasts.success("Kategoriya yaratildi");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: i64,
        request: &UpdateCategoryRequest,
    ) -> Result<Category> {
        let category = self.categories.update(id, request).await.inspect_err(|e| {
            tracing::error!(id, "Failed to update category: {e}");
        })?;
        let mut items = self.category_items.write().unwrap();
        if let Some(slot) = items.iter_mut().find(|c| c.id == id) {
            *slot = category.clone();
        }
        drop(items);
        self.toasts.success("Kategoriya yangilandi");
        Ok(category)
    }

    pub async fn delete_category(&self, id: i64) -> Result<()> {
        self.categories.delete(id).await.inspect_err(|e| {
            tracing::error!(id, "Failed to delete category: {e}");
        })?;
        self.category_items.write().unwrap().retain(|c| c.id != id);
        self.toasts.success("Kategoriya o'chirildi");
        Ok(())
    }

    // ---- 答复与评分 ----

    pub async fn fetch_submissions(&self, params: &ListParams) -> Result<()> {
        let merged = super::begin_fetch(&self.submission_state, params);
        let result = self.submissions.list(&merged).await;
        super::finish_fetch(&self.submission_state, &merged, result, "submissions")
    }

    /// 评分（含重新评分），成功后就地替换该答复
    pub async fn grade_submission(
        &self,
        id: i64,
        request: &GradeSubmissionRequest,
    ) -> Result<Submission> {
        let submission = self.submissions.grade(id, request).await.inspect_err(|e| {
            tracing::error!(id, "Failed to grade submission: {e}");
        })?;
        let mut state = self.submission_state.write().unwrap();
        if let Some(slot) = state.items.iter_mut().find(|s| s.id == id) {
            *slot = submission.clone();
        }
        drop(state);
        self.toasts.success("Baho qo'yildi");
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FixtureTransport;
    use crate::models::assignments::entities::Priority;
    use std::time::Duration;

    fn store() -> AssignmentStore {
        let toasts = ToastBus::new(Duration::ZERO);
        let (gateway, _rx) = ApiGateway::new(Arc::new(FixtureTransport::new()), toasts.clone());
        AssignmentStore::new(gateway, toasts)
    }

    #[tokio::test]
    async fn test_fetch_list_with_status_filter() {
        let store = store();
        store
            .fetch_list(&crate::models::common::params::params(&[(
                "status", "pending",
            )]))
            .await
            .unwrap();
        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].status, AssignmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_unshifts() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        let created = store
            .create(&CreateAssignmentRequest {
                title: "Yangi topshiriq".into(),
                description: String::new(),
                category: 1,
                priority: Priority::High,
                deadline: chrono::Utc::now() + chrono::TimeDelta::days(3),
                assigned_to: 3,
            })
            .await
            .unwrap();
        let state = store.snapshot();
        assert_eq!(state.items.len(), 5);
        assert_eq!(state.items[0].id, created.id);
    }

    #[tokio::test]
    async fn test_my_assignments_follows_list_pattern() {
        let store = store();
        store
            .fetch_my_assignments(&crate::models::common::params::params(&[("page", "2")]))
            .await
            .unwrap();
        let state = store.snapshot();
        assert_eq!(state.pagination.page, 2);
        assert!(!state.is_loading);
        assert_eq!(state.filters.get("page").map(String::as_str), Some("2"));
    }

    #[tokio::test]
    async fn test_update_status_patches_in_place() {
        let store = store();
        store.fetch_list(&ListParams::new()).await.unwrap();
        store
            .update_status(2, AssignmentStatus::InProgress)
            .await
            .unwrap();
        let state = store.snapshot();
        let patched = state.items.iter().find(|a| a.id == 2).unwrap();
        assert_eq!(patched.status, AssignmentStatus::InProgress);
    }

    #[tokio::test]
    async fn test_update_score_echoes_settings() {
        let store = store();
        let score = store
            .update_score(
                3,
                &UpdateScoreRequest {
                    max_score: Some(25.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(score.assignment_id, 3);
        assert_eq!(score.max_score, Some(25.0));
    }

    #[tokio::test]
    async fn test_grade_submission_replaces_entry() {
        let store = store();
        store.fetch_submissions(&ListParams::new()).await.unwrap();
        let graded = store
            .grade_submission(
                2,
                &GradeSubmissionRequest {
                    grade: 17.5,
                    feedback: Some("Yaxshi".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(graded.grade, Some(17.5));
        let state = store.submissions();
        let in_list = state.items.iter().find(|s| s.id == 2).unwrap();
        assert_eq!(in_list.grade, Some(17.5));
    }

    #[tokio::test]
    async fn test_categories_crud_patches() {
        let store = store();
        store.fetch_categories(&ListParams::new()).await.unwrap();
        assert_eq!(store.categories().len(), 4);

        store.delete_category(4).await.unwrap();
        assert_eq!(store.categories().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_statistics() {
        let store = store();
        let stats = store.fetch_statistics().await.unwrap();
        assert_eq!(stats.total, 4);
        assert!(store.statistics().is_some());
    }
}
