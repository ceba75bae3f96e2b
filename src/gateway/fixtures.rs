//! Fixture 传输层（开发旁路）
//!
//! 取代原本散落在各调用点的 mock 分支：启动时选定后，
//! 所有出站请求在离开客户端之前被拦截，返回静态 fixture 数据。
//! 测试同样以它替代网络。

use serde_json::{Value, json};

use crate::errors::{ProftError, Result};
use crate::models::users::entities::{Identity, PermissionFlags, UserRole};

use super::transport::{ApiRequest, ApiResponse, Method, Transport};

pub struct FixtureTransport {
    identity: Option<Identity>,
}

impl FixtureTransport {
    /// 默认身份：superadmin（对所有页面可见）
    pub fn new() -> Self {
        Self {
            identity: Some(superadmin_identity()),
        }
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// 未登录会话（认证状态检查返回否定结果）
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    fn ok(&self, body: Value) -> Result<ApiResponse> {
        Ok(ApiResponse {
            status: 200,
            body: serde_json::to_vec(&body).expect("fixture body is always serializable"),
        })
    }

    fn ok_bytes(&self, body: Vec<u8>) -> Result<ApiResponse> {
        Ok(ApiResponse { status: 200, body })
    }

    fn no_content(&self) -> Result<ApiResponse> {
        Ok(ApiResponse {
            status: 204,
            body: Vec::new(),
        })
    }

    /// 变更响应：以完整实体为底，覆盖请求体里出现的字段
    fn portfolio_entity(&self, id: i64, request: &ApiRequest) -> Value {
        let now = chrono::Utc::now().to_rfc3339();
        let owner = match &self.identity {
            Some(identity) => json!({
                "id": identity.id,
                "full_name": identity.full_name,
                "department": identity.department,
            }),
            None => json!({ "id": 1, "full_name": "Test Teacher", "department": null }),
        };
        overlay(
            json!({
                "id": id,
                "title": "",
                "description": "",
                "category": "other",
                "status": "pending",
                "is_public": false,
                "teacher": owner,
                "attachments": [],
                "comments": [],
                "created_at": now,
                "updated_at": now,
            }),
            request,
        )
    }

    fn assignment_entity(&self, id: i64, request: &ApiRequest) -> Value {
        let now = chrono::Utc::now();
        let mut entity = overlay(
            json!({
                "id": id,
                "title": "",
                "description": "",
                "category": { "id": 1, "name": "Ilmiy maqola", "color": "#3B82F6" },
                "status": "pending",
                "priority": "medium",
                "deadline": (now + chrono::TimeDelta::days(7)).to_rfc3339(),
                "progress": 0,
                "assigned_to": { "id": 1, "full_name": "Test User" },
                "created_by": { "id": 2, "full_name": "Admin User" },
                "created_at": now.to_rfc3339(),
            }),
            request,
        );
        // 请求里的 category/assigned_to 是裸 id，实体里是引用对象
        if let Some(map) = entity.as_object_mut() {
            for (key, name) in [("category", "Ilmiy maqola"), ("assigned_to", "Test User")] {
                if let Some(raw) = map.get(key).and_then(Value::as_i64) {
                    map.insert(key.into(), json!({ "id": raw, "name": name, "full_name": name }));
                }
            }
        }
        entity
    }

    fn user_entity(&self, id: i64, request: &ApiRequest) -> Value {
        overlay(
            json!({
                "id": id,
                "username": format!("user{id}"),
                "full_name": "",
                "email": "",
                "role": "teacher",
                "department": null,
                "is_active": true,
            }),
            request,
        )
    }

    fn category_entity(&self, id: i64, request: &ApiRequest) -> Value {
        overlay(
            json!({
                "id": id,
                "name": "Kategoriya",
                "description": "",
                "color": null,
                "icon": null,
                "default_score": 0.0,
                "min_score": 0.0,
                "score_weight": 1.0,
                "is_active": true,
                "order": 0,
                "assignments_count": 0,
            }),
            request,
        )
    }

    fn query<'a>(request: &'a ApiRequest, key: &str) -> Option<&'a str> {
        request
            .query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Default for FixtureTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for FixtureTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let path = request.path.clone();
        let method = request.method;

        match (method, path.as_str()) {
            // ---- 认证 ----
            (Method::Get, "/auth/csrf/") => self.ok(json!({ "csrfToken": "fixture-csrf-token" })),
            (Method::Get, "/auth/status/") => match &self.identity {
                Some(identity) => self.ok(json!({
                    "authenticated": true,
                    "user": serde_json::to_value(identity)?,
                })),
                None => self.ok(json!({ "authenticated": false })),
            },
            (Method::Get, "/api/accounts/me/") => match &self.identity {
                Some(identity) => self.ok(serde_json::to_value(identity)?),
                None => Ok(ApiResponse {
                    status: 401,
                    body: br#"{"error":"Not authenticated"}"#.to_vec(),
                }),
            },
            (Method::Put, "/api/accounts/me/") => match &self.identity {
                Some(identity) => self.ok(serde_json::to_value(identity)?),
                None => Ok(ApiResponse {
                    status: 401,
                    body: br#"{"error":"Not authenticated"}"#.to_vec(),
                }),
            },
            (Method::Post, "/auth/hemis/logout/") => self.ok(json!({ "success": true })),

            // ---- 用户管理 ----
            (Method::Get, "/api/accounts/users/") => {
                let mut users = fixture_users();
                if let Some(role) = Self::query(&request, "role") {
                    users.retain(|u| u["role"] == role);
                }
                if let Some(search) = Self::query(&request, "search") {
                    let needle = search.to_lowercase();
                    users.retain(|u| {
                        u["full_name"]
                            .as_str()
                            .is_some_and(|n| n.to_lowercase().contains(&needle))
                    });
                }
                self.ok(envelope(users))
            }
            (Method::Get, "/api/accounts/users/stats/") => self.ok(json!({
                "total": 156,
                "by_role": { "superadmin": 2, "admin": 10, "teacher": 144 },
                "active": 148,
                "inactive": 8,
            })),
            (Method::Post, "/api/accounts/users/") => {
                let body = self.user_entity(100, &request);
                self.ok(body)
            }

            // ---- 档案 ----
            (Method::Get, "/api/portfolios/") => {
                let mut portfolios = fixture_portfolios();
                if let Some(status) = Self::query(&request, "status") {
                    portfolios.retain(|p| p["status"] == status);
                }
                self.ok(envelope(portfolios))
            }
            (Method::Get, "/api/portfolios/stats/") => self.ok(json!({
                "total": 45,
                "pending": 12,
                "approved": 28,
                "rejected": 5,
                "by_category": { "research": 15, "teaching": 12, "projects": 10, "other": 8 },
                "recent_activity": 8,
                "approval_rate": 82.0,
            })),
            (Method::Post, "/api/portfolios/") => {
                let body = self.portfolio_entity(100, &request);
                self.ok(body)
            }

            // ---- 任务与分类 ----
            (Method::Get, "/api/assignments/v2/assignments/") => {
                let mut assignments = fixture_assignments();
                if let Some(status) = Self::query(&request, "status") {
                    assignments.retain(|a| a["status"] == status);
                }
                self.ok(envelope(assignments))
            }
            (Method::Get, "/api/assignments/v2/assignments/my_assignments/") => {
                self.ok(envelope(fixture_assignments()))
            }
            (Method::Get, "/api/assignments/v2/assignments/statistics/") => self.ok(json!({
                "total": 4,
                "by_status": { "pending": 1, "in_progress": 1, "completed": 1, "overdue": 1 },
                "by_priority": { "low": 1, "medium": 1, "high": 2 },
                "completion_rate": 25.0,
                "overdue_count": 1,
            })),
            (Method::Post, "/api/assignments/v2/assignments/") => {
                let body = self.assignment_entity(100, &request);
                self.ok(body)
            }
            (Method::Get, "/api/assignments/v2/categories/") => {
                self.ok(envelope(fixture_categories()))
            }
            (Method::Post, "/api/assignments/v2/categories/") => {
                let body = self.category_entity(100, &request);
                self.ok(body)
            }
            (Method::Get, "/api/assignments/v2/submissions/") => {
                self.ok(envelope(fixture_submissions()))
            }
            (Method::Get, "/api/assignments/score-history/") => self.ok(envelope(vec![json!({
                "id": 1,
                "assignment_id": 3,
                "assignment_title": "Loyiha hisoboti",
                "score": 18.0,
                "graded_by": { "id": 2, "full_name": "Admin User" },
                "created_at": chrono::Utc::now().to_rfc3339(),
            })])),

            // ---- 通知 ----
            (Method::Get, "/api/notifications/") => self.ok(envelope(fixture_notifications())),

            // ---- 统计分析 ----
            (Method::Get, "/api/analytics/dashboard/overview/") => self.ok(json!({
                "total_portfolios": 45,
                "pending_portfolios": 12,
                "total_assignments": 30,
                "active_teachers": 144,
            })),
            (Method::Get, "/api/analytics/dashboard/widgets/") => self.ok(json!([
                { "id": "portfolios", "title": "Portfolio", "value": 45 },
                { "id": "assignments", "title": "Topshiriqlar", "value": 30 },
            ])),
            (Method::Get, "/api/analytics/charts/portfolio_trend/") => self.ok(json!({
                "labels": ["Yan", "Fev", "Mar"],
                "series": [4, 9, 12],
            })),
            (Method::Get, "/api/analytics/charts/assignment_status/") => self.ok(json!({
                "labels": ["pending", "in_progress", "completed"],
                "series": [8, 12, 10],
            })),
            (Method::Get, "/api/analytics/charts/category_distribution/") => self.ok(json!({
                "labels": ["Ilmiy maqola", "Esse", "Loyiha"],
                "series": [15, 12, 10],
            })),
            (Method::Get, "/api/analytics/portfolios/") => self.ok(json!({ "total": 45 })),
            (Method::Get, "/api/analytics/assignments/") => self.ok(json!({ "total": 30 })),
            (Method::Get, "/api/analytics/teachers/") => self.ok(envelope(vec![json!({
                "id": 3,
                "full_name": "Aliyev Vali",
                "department": "Pedagogika",
                "portfolios_approved": 6,
                "assignments_completed": 11,
                "total_score": 84.5,
            })])),
            (Method::Get, "/api/analytics/reports/") => self.ok(envelope(fixture_reports())),
            (Method::Post, "/api/analytics/reports/") => {
                let mut body = match &request.body {
                    super::transport::ApiBody::Json(value) => value.clone(),
                    _ => json!({}),
                };
                if let Some(map) = body.as_object_mut() {
                    map.insert("id".into(), json!(100));
                    map.insert("status".into(), json!("pending"));
                    map.insert("created_at".into(), json!(chrono::Utc::now().to_rfc3339()));
                }
                self.ok(body)
            }
            (Method::Post, "/api/analytics/export/") => {
                self.ok_bytes(b"id,title\n1,Ilmiy maqola\n".to_vec())
            }
            (Method::Delete, "/api/analytics/cache/") => self.no_content(),

            _ => self.dispatch_parameterized(request),
        }
    }
}

impl FixtureTransport {
    /// 带路径参数的端点（/{id}/ 形式）单独分发
    fn dispatch_parameterized(&self, request: ApiRequest) -> Result<ApiResponse> {
        let segments: Vec<&str> = request
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, ["api", "portfolios", id]) => {
                let id: i64 = id.parse().unwrap_or(0);
                match fixture_portfolios().into_iter().find(|p| p["id"] == id) {
                    Some(portfolio) => self.ok(portfolio),
                    None => Ok(ApiResponse {
                        status: 404,
                        body: br#"{"error":"Portfolio topilmadi"}"#.to_vec(),
                    }),
                }
            }
            (Method::Put, ["api", "portfolios", id]) => {
                let body = self.portfolio_entity(id.parse().unwrap_or(0), &request);
                self.ok(body)
            }
            (Method::Delete, ["api", "portfolios", _id]) => self.no_content(),
            (Method::Post, ["api", "portfolios", _id, "approve"]) => {
                self.ok(json!({ "status": "approved" }))
            }
            (Method::Post, ["api", "portfolios", _id, "reject"]) => {
                self.ok(json!({ "status": "rejected" }))
            }
            (Method::Post, ["api", "portfolios", _id, "comments"]) => {
                let content = match &request.body {
                    super::transport::ApiBody::Json(value) => {
                        value.get("content").cloned().unwrap_or(json!(""))
                    }
                    _ => json!(""),
                };
                self.ok(json!({
                    "id": 500,
                    "content": content,
                    "author": { "id": 2, "full_name": "Admin User" },
                    "created_at": chrono::Utc::now().to_rfc3339(),
                }))
            }
            (Method::Post, ["api", "portfolios", _id, "attachments"]) => self.ok(json!({
                "id": 700,
                "file_name": "hujjat.pdf",
                "file_size": 1024,
            })),
            (Method::Delete, ["api", "portfolios", _id, "attachments", _aid]) => self.no_content(),
            (Method::Get, ["api", "portfolios", _id, "history"]) => self.ok(json!([{
                "id": 1,
                "status": "pending",
                "comment": null,
                "changed_by": { "id": 1, "full_name": "Aliyev Vali" },
                "created_at": chrono::Utc::now().to_rfc3339(),
            }])),

            (Method::Get, ["api", "assignments", "v2", "assignments", id]) => {
                let id: i64 = id.parse().unwrap_or(0);
                match fixture_assignments().into_iter().find(|a| a["id"] == id) {
                    Some(assignment) => self.ok(assignment),
                    None => Ok(ApiResponse {
                        status: 404,
                        body: br#"{"error":"Topshiriq topilmadi"}"#.to_vec(),
                    }),
                }
            }
            (Method::Put, ["api", "assignments", "v2", "assignments", id]) => {
                let body = self.assignment_entity(id.parse().unwrap_or(0), &request);
                self.ok(body)
            }
            (Method::Delete, ["api", "assignments", "v2", "assignments", _id]) => {
                self.no_content()
            }
            (Method::Get, ["api", "assignments", id, "score"]) => {
                self.ok(json!({
                    "assignment_id": id.parse::<i64>().unwrap_or(0),
                    "score": 18.0,
                    "max_score": 20.0,
                    "feedback": "Yaxshi bajarilgan",
                    "graded_at": chrono::Utc::now().to_rfc3339(),
                }))
            }
            (Method::Put, ["api", "assignments", id, "score"]) => {
                let base = json!({
                    "assignment_id": id.parse::<i64>().unwrap_or(0),
                    "score": 18.0,
                    "max_score": 20.0,
                    "feedback": null,
                    "graded_at": chrono::Utc::now().to_rfc3339(),
                });
                self.ok(overlay(base, &request))
            }
            (Method::Patch, ["api", "assignments", "v2", "assignments", id, "update_status"]) => {
                let status = match &request.body {
                    super::transport::ApiBody::Json(value) => {
                        value.get("status").cloned().unwrap_or(json!("pending"))
                    }
                    _ => json!("pending"),
                };
                self.ok(json!({ "id": id.parse::<i64>().unwrap_or(0), "status": status }))
            }
            (Method::Post, ["api", "assignments", "v2", "assignments", id, "submit"]) => {
                let content = match &request.body {
                    super::transport::ApiBody::Json(value) => {
                        value.get("content").cloned().unwrap_or(json!(""))
                    }
                    _ => json!(""),
                };
                self.ok(json!({
                    "id": 900,
                    "assignment": id.parse::<i64>().unwrap_or(0),
                    "content": content,
                    "attachments": [],
                    "grade": null,
                    "feedback": null,
                    "created_at": chrono::Utc::now().to_rfc3339(),
                }))
            }
            (Method::Patch, ["api", "assignments", "v2", "submissions", id, "grade"]) => {
                let (grade, feedback) = match &request.body {
                    super::transport::ApiBody::Json(value) => (
                        value.get("grade").cloned().unwrap_or(json!(null)),
                        value.get("feedback").cloned().unwrap_or(json!(null)),
                    ),
                    _ => (json!(null), json!(null)),
                };
                self.ok(json!({
                    "id": id.parse::<i64>().unwrap_or(0),
                    "assignment": 1,
                    "content": "Topshiriq javobi",
                    "grade": grade,
                    "feedback": feedback,
                    "created_at": chrono::Utc::now().to_rfc3339(),
                }))
            }
            (Method::Put, ["api", "assignments", "v2", "categories", id]) => {
                let body = self.category_entity(id.parse().unwrap_or(0), &request);
                self.ok(body)
            }
            (Method::Delete, ["api", "assignments", "v2", "categories", _id]) => self.no_content(),

            (Method::Put, ["api", "accounts", "users", id]) => {
                let body = self.user_entity(id.parse().unwrap_or(0), &request);
                self.ok(body)
            }
            (Method::Delete, ["api", "accounts", "users", _id]) => self.no_content(),
            (Method::Get, ["api", "accounts", "users", id]) => {
                let id: i64 = id.parse().unwrap_or(0);
                match fixture_users().into_iter().find(|u| u["id"] == id) {
                    Some(user) => self.ok(user),
                    None => Ok(ApiResponse {
                        status: 404,
                        body: br#"{"error":"Foydalanuvchi topilmadi"}"#.to_vec(),
                    }),
                }
            }

            (Method::Get, ["api", "analytics", "teachers", id]) => self.ok(json!({
                "id": id.parse::<i64>().unwrap_or(0),
                "full_name": "Aliyev Vali",
                "department": "Pedagogika",
                "portfolios_approved": 6,
                "assignments_completed": 11,
                "total_score": 84.5,
            })),

            (Method::Get, ["api", "analytics", "reports", id]) => {
                let id: i64 = id.parse().unwrap_or(0);
                match fixture_reports().into_iter().find(|r| r["id"] == id) {
                    Some(report) => self.ok(report),
                    None => Ok(ApiResponse {
                        status: 404,
                        body: br#"{"error":"Hisobot topilmadi"}"#.to_vec(),
                    }),
                }
            }
            (Method::Delete, ["api", "analytics", "reports", _id]) => self.no_content(),
            (Method::Get, ["api", "analytics", "reports", _id, "download"]) => {
                self.ok_bytes(b"id,title,status\n1,Portfolio hisobot,completed\n".to_vec())
            }

            (Method::Post, ["api", "notifications", _id, "read"]) => self.no_content(),
            (Method::Post, ["api", "notifications", "read-all"]) => {
                self.ok(json!({ "marked_count": 2 }))
            }

            _ => Err(ProftError::fixture(format!(
                "No fixture for [{}] {}",
                request.method.as_str(),
                request.path
            ))),
        }
    }
}

/// superadmin mock 身份（开发旁路默认用户）
pub fn superadmin_identity() -> Identity {
    Identity {
        id: 1,
        username: "test_superadmin".into(),
        email: "admin@example.com".into(),
        first_name: "Super".into(),
        last_name: "Admin".into(),
        full_name: "Super Admin".into(),
        role: UserRole::SuperAdmin,
        hemis_id: Some("12345".into()),
        department: Some("IT Bo'limi".into()),
        position: Some("Tizim administratori".into()),
        permissions: PermissionFlags {
            can_manage_users: true,
            can_approve_portfolios: true,
            can_manage_all_portfolios: true,
        },
    }
}

// 请求体里的字段覆盖底板实体的同名字段
fn overlay(mut base: Value, request: &ApiRequest) -> Value {
    if let super::transport::ApiBody::Json(body) = &request.body {
        if let (Some(base_map), Some(body_map)) = (base.as_object_mut(), body.as_object()) {
            for (key, value) in body_map {
                base_map.insert(key.clone(), value.clone());
            }
        }
    }
    base
}

fn envelope(items: Vec<Value>) -> Value {
    let count = items.len();
    json!({
        "results": items,
        "count": count,
        "next": null,
        "previous": null,
    })
}

fn fixture_users() -> Vec<Value> {
    vec![
        json!({ "id": 1, "username": "superadmin", "full_name": "Super Admin", "email": "admin@example.com", "role": "superadmin", "department": "IT", "is_active": true }),
        json!({ "id": 2, "username": "admin1", "full_name": "Admin User", "email": "admin1@example.com", "role": "admin", "department": "Pedagogika", "is_active": true }),
        json!({ "id": 3, "username": "teacher1", "full_name": "Aliyev Vali", "email": "teacher1@example.com", "role": "teacher", "department": "Pedagogika", "is_active": true }),
        json!({ "id": 4, "username": "teacher2", "full_name": "Karimova Nilufar", "email": "teacher2@example.com", "role": "teacher", "department": "IT", "is_active": true }),
        json!({ "id": 5, "username": "teacher3", "full_name": "Rahimov Jasur", "email": "teacher3@example.com", "role": "teacher", "department": "Tarix", "is_active": false }),
    ]
}

fn fixture_portfolios() -> Vec<Value> {
    let now = chrono::Utc::now().to_rfc3339();
    vec![
        json!({
            "id": 1,
            "title": "Ilmiy maqola - Pedagogika",
            "description": "Zamonaviy pedagogika usullari haqida ilmiy maqola",
            "category": "research",
            "status": "approved",
            "is_public": true,
            "teacher": { "id": 1, "full_name": "Test Teacher", "department": "Pedagogika" },
            "created_at": now,
            "updated_at": now,
        }),
        json!({
            "id": 2,
            "title": "Loyiha - IT innovatsiyalar",
            "description": "Ta'limda IT texnologiyalarni qo'llash loyihasi",
            "category": "projects",
            "status": "pending",
            "is_public": false,
            "teacher": { "id": 1, "full_name": "Test Teacher", "department": "IT" },
            "created_at": now,
            "updated_at": now,
        }),
        json!({
            "id": 3,
            "title": "Esse - Milliy qadriyatlar",
            "description": "Milliy qadriyatlar va ta'lim tizimi",
            "category": "other",
            "status": "rejected",
            "is_public": false,
            "teacher": { "id": 2, "full_name": "Another Teacher", "department": "Tarix" },
            "created_at": now,
            "updated_at": now,
        }),
    ]
}

fn fixture_assignments() -> Vec<Value> {
    let now = chrono::Utc::now();
    let day = chrono::TimeDelta::days(1);
    vec![
        json!({
            "id": 1,
            "title": "Ilmiy maqola yozish",
            "description": "Pedagogika sohasida ilmiy maqola tayyorlash",
            "category": { "id": 1, "name": "Ilmiy maqola", "color": "#3B82F6" },
            "status": "in_progress",
            "priority": "high",
            "deadline": (now + day * 7).to_rfc3339(),
            "progress": 45,
            "assigned_to": { "id": 1, "full_name": "Test User" },
            "created_by": { "id": 2, "full_name": "Admin User" },
            "created_at": now.to_rfc3339(),
        }),
        json!({
            "id": 2,
            "title": "Esse tayyorlash",
            "description": "Zamonaviy ta'lim metodlari haqida esse",
            "category": { "id": 2, "name": "Esse", "color": "#10B981" },
            "status": "pending",
            "priority": "medium",
            "deadline": (now + day * 14).to_rfc3339(),
            "progress": 0,
            "assigned_to": { "id": 1, "full_name": "Test User" },
            "created_by": { "id": 2, "full_name": "Admin User" },
            "created_at": now.to_rfc3339(),
        }),
        json!({
            "id": 3,
            "title": "Loyiha hisoboti",
            "description": "Yakuniy loyiha hisobotini tayyorlash",
            "category": { "id": 3, "name": "Hisobot", "color": "#F59E0B" },
            "status": "completed",
            "priority": "low",
            "deadline": (now - day * 2).to_rfc3339(),
            "progress": 100,
            "assigned_to": { "id": 1, "full_name": "Test User" },
            "created_by": { "id": 2, "full_name": "Admin User" },
            "created_at": now.to_rfc3339(),
        }),
        json!({
            "id": 4,
            "title": "Muddati o'tgan topshiriq",
            "description": "Bu topshiriq muddati o'tgan",
            "category": { "id": 1, "name": "Ilmiy maqola", "color": "#3B82F6" },
            "status": "overdue",
            "priority": "high",
            "deadline": (now - day * 5).to_rfc3339(),
            "progress": 20,
            "assigned_to": { "id": 1, "full_name": "Test User" },
            "created_by": { "id": 2, "full_name": "Admin User" },
            "created_at": now.to_rfc3339(),
        }),
    ]
}

fn fixture_categories() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "Ilmiy maqola", "description": "Ilmiy jurnallarda chop etilgan maqolalar", "color": "#3B82F6", "icon": "document", "default_score": 10.0, "min_score": 5.0, "score_weight": 1.5, "is_active": true, "order": 1, "assignments_count": 15 }),
        json!({ "id": 2, "name": "Esse", "description": "Ijodiy esse va insholar", "color": "#10B981", "icon": "pencil", "default_score": 5.0, "min_score": 2.0, "score_weight": 1.0, "is_active": true, "order": 2, "assignments_count": 12 }),
        json!({ "id": 3, "name": "Loyiha", "description": "Innovatsion loyihalar", "color": "#F59E0B", "icon": "folder", "default_score": 20.0, "min_score": 10.0, "score_weight": 2.0, "is_active": true, "order": 3, "assignments_count": 8 }),
        json!({ "id": 4, "name": "Hisobot", "description": "Oylik va yillik hisobotlar", "color": "#8B5CF6", "icon": "chart", "default_score": 8.0, "min_score": 4.0, "score_weight": 1.2, "is_active": true, "order": 4, "assignments_count": 6 }),
    ]
}

fn fixture_submissions() -> Vec<Value> {
    let now = chrono::Utc::now().to_rfc3339();
    vec![
        json!({
            "id": 1,
            "assignment": 3,
            "assignment_title": "Loyiha hisoboti",
            "content": "Yakuniy hisobot ilova qilindi",
            "attachments": ["hisobot.pdf"],
            "grade": 18.0,
            "feedback": "Yaxshi bajarilgan",
            "submitted_by": { "id": 1, "full_name": "Test User" },
            "created_at": now,
        }),
        json!({
            "id": 2,
            "assignment": 1,
            "assignment_title": "Ilmiy maqola yozish",
            "content": "Birinchi qoralama",
            "attachments": [],
            "grade": null,
            "feedback": null,
            "submitted_by": { "id": 1, "full_name": "Test User" },
            "created_at": now,
        }),
    ]
}

fn fixture_notifications() -> Vec<Value> {
    let now = chrono::Utc::now();
    let day = chrono::TimeDelta::days(1);
    vec![
        json!({
            "id": 1,
            "title": "Yangi topshiriq",
            "message": "Sizga yangi topshiriq berildi: \"Ilmiy maqola yuklash\"",
            "type": "assignment",
            "is_read": false,
            "created_at": now.to_rfc3339(),
        }),
        json!({
            "id": 2,
            "title": "Portfolio tasdiqlandi",
            "message": "Sizning \"Metodik qo'llanma\" portfoliongiz tasdiqlandi",
            "type": "approval",
            "is_read": false,
            "created_at": (now - day).to_rfc3339(),
        }),
        json!({
            "id": 3,
            "title": "Ball qo'shildi",
            "message": "Sizga 50 ball qo'shildi",
            "type": "score",
            "is_read": true,
            "created_at": (now - day * 2).to_rfc3339(),
        }),
    ]
}

fn fixture_reports() -> Vec<Value> {
    let now = chrono::Utc::now().to_rfc3339();
    vec![
        json!({ "id": 1, "type": "portfolio", "format": "xlsx", "status": "completed", "filename": "portfolio_hisobot.xlsx", "created_at": now }),
        json!({ "id": 2, "type": "assignment", "format": "pdf", "status": "processing", "filename": null, "created_at": now }),
    ]
}
