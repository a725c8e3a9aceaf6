use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::common::{ChatMessage, CreateMessageRequest, HealthResponse};

use super::ChatApi;
use super::error::TransportError;

/// HTTP client for the message API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://127.0.0.1:5000/api`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl ChatApi for ApiClient {
    async fn health(&self) -> Result<HealthResponse, TransportError> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(check_status(response).await?).await
    }

    async fn list_messages(&self) -> Result<Vec<ChatMessage>, TransportError> {
        let response = self.http.get(self.url("/messages")).send().await?;
        decode(check_status(response).await?).await
    }

    async fn send_message(
        &self,
        request: &CreateMessageRequest,
    ) -> Result<ChatMessage, TransportError> {
        let response = self
            .http
            .post(self.url("/messages"))
            .json(request)
            .send()
            .await?;
        decode(check_status(response).await?).await
    }

    async fn clear_messages(&self) -> Result<(), TransportError> {
        let response = self.http.delete(self.url("/messages")).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-success status into an error, keeping the server's `error`
/// message when the body carries one.
async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TransportError::Status {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| TransportError::Decode(err.to_string()))
}
