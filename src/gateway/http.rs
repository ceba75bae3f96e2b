use std::time::Duration;

use crate::config::ApiConfig;
use crate::errors::Result;

use super::transport::{ApiBody, ApiRequest, ApiResponse, Method, Transport};

/// reqwest 传输层
///
/// 会话 cookie 认证：启用 cookie store，每个请求自动携带会话 cookie。
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_millis(config.timeout))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn method(&self, method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .client
            .request(self.method(request.method), url)
            .header("Accept", "application/json")
            .query(&request.query);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            ApiBody::Empty => builder,
            ApiBody::Json(value) => builder.json(&value),
            ApiBody::Multipart(files) => {
                let mut form = reqwest::multipart::Form::new();
                for part in files {
                    form = form.part(
                        part.field,
                        reqwest::multipart::Part::bytes(part.bytes).file_name(part.file_name),
                    );
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(ApiResponse { status, body })
    }
}
