// Service Client
//
// 法律助手服务的 HTTP 客户端，供聊天与账户适配器共用

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

/// HTTP 调用错误
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(String),

    #[error("Client error: {0}")]
    Client(String),
}

/// 服务 HTTP 客户端
///
/// 只发送 JSON POST 请求；不重试、不退避，默认不设超时
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
}

impl ServiceClient {
    /// 创建新的客户端
    ///
    /// # Arguments
    /// * `base_url` - 服务根地址
    /// * `timeout_secs` - 可选的请求超时
    pub fn new(base_url: impl Into<String>, timeout_secs: Option<u64>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs.filter(|secs| *secs > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self::with_client(base_url, client))
    }

    /// 使用已有的 reqwest 客户端
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接端点 URL
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// 发送 JSON POST 请求并解析 JSON 响应
    pub async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R, HttpError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        debug!("[ServiceClient] POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("[ServiceClient] {} returned {} - {}", url, status, body);
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| HttpError::Decode(e.to_string()))
    }
}
