//! HTTP 网关适配层
//!
//! 单实例客户端，两段拦截：
//! - 出站：变更类方法（POST/PUT/PATCH/DELETE）注入 CSRF 令牌，
//!   缺失时每会话惰性获取一次并缓存；
//! - 入站：HTTP 错误映射为分类通知 + 认证事件，同时照常向调用方
//!   返回 Err（双通道：全局通知 + 局部传播）。
//!
//! 开发旁路是启动时一次性选择的 FixtureTransport，而不是散落在
//! 各调用点的分支。

mod fixtures;
mod http;
mod transport;

pub use fixtures::FixtureTransport;
pub use http::HttpTransport;
pub use transport::{ApiBody, ApiRequest, ApiResponse, FilePart, Method, Transport, create_transport};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::errors::{ProftError, Result};
use crate::models::ListParams;
use crate::models::users::responses::CsrfTokenResponse;
use crate::toast::ToastBus;

/// 认证失败事件，由导航层消费并转为重定向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// 401：会话缺失或过期，重定向到登录页
    SessionExpired,
    /// 403：无权限，重定向到 forbidden 页
    Forbidden,
}

pub struct ApiGateway {
    transport: Arc<dyn Transport>,
    toasts: Arc<ToastBus>,
    auth_events: UnboundedSender<AuthEvent>,
    csrf: Mutex<Option<String>>,
}

impl ApiGateway {
    pub fn new(
        transport: Arc<dyn Transport>,
        toasts: Arc<ToastBus>,
    ) -> (Arc<Self>, UnboundedReceiver<AuthEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                transport,
                toasts,
                auth_events: tx,
                csrf: Mutex::new(None),
            }),
            rx,
        )
    }

    /// 每会话惰性获取一次 CSRF 令牌；失败只记录，不阻断请求
    async fn ensure_csrf(&self) -> Option<String> {
        let mut guard = self.csrf.lock().await;
        if let Some(token) = guard.as_ref() {
            return Some(token.clone());
        }
        let request = ApiRequest::get("/auth/csrf/");
        match self.transport.execute(request).await {
            Ok(response) if response.is_success() => {
                match response.json::<CsrfTokenResponse>() {
                    Ok(body) => {
                        *guard = Some(body.csrf_token.clone());
                        Some(body.csrf_token)
                    }
                    Err(e) => {
                        tracing::error!("Could not parse CSRF token response: {e}");
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::error!(status = response.status, "Could not fetch CSRF token");
                None
            }
            Err(e) => {
                tracing::error!("Could not fetch CSRF token: {e}");
                None
            }
        }
    }

    /// 统一发送入口：CSRF 注入、请求标识、错误映射
    async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        if request.method.is_mutating() {
            if let Some(token) = self.ensure_csrf().await {
                request.headers.push(("X-CSRFToken".into(), token));
            }
        }
        request
            .headers
            .push(("X-Request-ID".into(), uuid::Uuid::new_v4().to_string()));

        tracing::debug!("[{}] {}", request.method.as_str(), request.path);

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    ProftError::Offline(_) => {
                        self.toasts
                            .error("Internet aloqasi yo'q. Iltimos, tarmoqni tekshiring.");
                    }
                    _ => {
                        self.toasts.error("Xatolik yuz berdi.");
                    }
                }
                return Err(err);
            }
        };

        if response.is_success() {
            return Ok(response);
        }
        Err(self.map_failure(&response))
    }

    /// 入站错误映射。每个分支都既发通知，又返回 Err 让调用方自行处理。
    fn map_failure(&self, response: &ApiResponse) -> ProftError {
        let message = response.error_message();
        tracing::error!(status = response.status, "API error: {message}");

        match response.status {
            401 => {
                self.toasts
                    .error("Siz tizimga kirmagansiz. Iltimos, qaytadan kiring.");
                let _ = self.auth_events.send(AuthEvent::SessionExpired);
                ProftError::authentication(message)
            }
            403 => {
                self.toasts
                    .error("Sizda bu amalni bajarish uchun ruxsat yo'q.");
                let _ = self.auth_events.send(AuthEvent::Forbidden);
                ProftError::authorization(message)
            }
            404 => {
                self.toasts.error("So'ralgan ma'lumot topilmadi.");
                ProftError::not_found(message)
            }
            422 => {
                let text = if message.is_empty() {
                    "Ma'lumotlar noto'g'ri kiritilgan.".to_string()
                } else {
                    message.clone()
                };
                self.toasts.error(text.clone());
                ProftError::validation(text)
            }
            500..=599 => {
                self.toasts
                    .error("Server xatosi yuz berdi. Iltimos, qaytadan urinib ko'ring.");
                ProftError::server(message)
            }
            _ => {
                self.toasts.error(if message.is_empty() {
                    "Xatolik yuz berdi.".to_string()
                } else {
                    message.clone()
                });
                ProftError::network(format!("HTTP {}: {message}", response.status))
            }
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &ListParams) -> Result<T> {
        let response = self.send(ApiRequest::get(path).with_params(query)).await?;
        response.json()
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.send(ApiRequest::get(path)).await?;
        Ok(response.body)
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let response = self
            .send(ApiRequest::new(Method::Post, path).with_json(body)?)
            .await?;
        response.json()
    }

    /// POST 后不关心响应体（204 端点）
    pub async fn post_no_content(&self, path: &str, body: &impl Serialize) -> Result<()> {
        self.send(ApiRequest::new(Method::Post, path).with_json(body)?)
            .await?;
        Ok(())
    }

    pub async fn post_bytes(&self, path: &str, body: &impl Serialize) -> Result<Vec<u8>> {
        let response = self
            .send(ApiRequest::new(Method::Post, path).with_json(body)?)
            .await?;
        Ok(response.body)
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        files: Vec<FilePart>,
    ) -> Result<T> {
        let mut request = ApiRequest::new(Method::Post, path);
        request.body = ApiBody::Multipart(files);
        let response = self.send(request).await?;
        response.json()
    }

    pub async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let response = self
            .send(ApiRequest::new(Method::Put, path).with_json(body)?)
            .await?;
        response.json()
    }

    pub async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let response = self
            .send(ApiRequest::new(Method::Patch, path).with_json(body)?)
            .await?;
        response.json()
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(ApiRequest::new(Method::Delete, path)).await?;
        Ok(())
    }

    pub async fn delete_with_params(&self, path: &str, query: &ListParams) -> Result<()> {
        self.send(ApiRequest::new(Method::Delete, path).with_params(query))
            .await?;
        Ok(())
    }
}
