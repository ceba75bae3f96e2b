use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::errors::Result;
use crate::models::ListParams;

// HTTP 方法（客户端实际用到的子集）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// 变更类方法需要 CSRF 令牌
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Method::Get)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

// 请求体
#[derive(Debug, Clone)]
pub enum ApiBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FilePart>),
}

// multipart 文件分片
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

// 一次出站请求，path 相对配置的 base_url
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: ApiBody,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: ApiBody::Empty,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn with_params(mut self, params: &ListParams) -> Self {
        self.query
            .extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn with_json(mut self, body: &impl Serialize) -> Result<Self> {
        self.body = ApiBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }
}

// 一次入站响应
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// 从错误响应体提取用户可读信息（error / message / detail 字段）
    pub fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&self.body) {
            for key in ["error", "message", "detail"] {
                if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                    return text.to_string();
                }
            }
        }
        String::new()
    }
}

/// 传输层抽象
///
/// 只有网络层故障（连不上、超时）返回 Err；HTTP 错误状态码
/// 原样返回响应，由网关统一映射。
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// 启动时一次性选择传输层：开发旁路用 fixture，否则走 HTTP
pub fn create_transport(config: &ApiConfig) -> Arc<dyn Transport> {
    if config.dev_bypass {
        tracing::warn!("DEV bypass enabled: all outbound API calls are served from fixtures");
        Arc::new(super::FixtureTransport::new())
    } else {
        Arc::new(super::HttpTransport::new(config))
    }
}
