//! 产品目录 HTTP 客户端

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use crate::app::product::model::ProductRecord;

/// 服务端统一响应信封，客户端只关心这几个字段
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with status code {status}: {message}")]
    Status { status: u16, message: String },
}

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_products(&self) -> Result<ApiEnvelope<Vec<ProductRecord>>, ClientError>;

    async fn delete_product(&self, id: i64) -> Result<ApiEnvelope<ProductRecord>, ClientError>;

    async fn reset_products(&self) -> Result<ApiEnvelope<Vec<ProductRecord>>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        Ok(response.json::<ApiEnvelope<T>>().await?)
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> ClientError {
        // 错误响应体不是 JSON 时退回到状态码描述
        let message = response
            .json::<ApiEnvelope<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });

        ClientError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_products(&self) -> Result<ApiEnvelope<Vec<ProductRecord>>, ClientError> {
        debug!(base_url = %self.base_url, "获取产品列表");
        let response = self.client.get(self.url("/api/products")).send().await?;
        Self::decode(response).await
    }

    async fn delete_product(&self, id: i64) -> Result<ApiEnvelope<ProductRecord>, ClientError> {
        debug!(product_id = id, "删除产品");
        let response = self
            .client
            .delete(self.url(&format!("/api/products/{}", id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn reset_products(&self) -> Result<ApiEnvelope<Vec<ProductRecord>>, ClientError> {
        debug!("重置产品目录");
        let response = self
            .client
            .post(self.url("/api/products/reset"))
            .send()
            .await?;
        Self::decode(response).await
    }
}
