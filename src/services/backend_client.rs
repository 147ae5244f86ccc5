use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use url::Url;

use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("could not reach backend: {0}")]
    Connection(String),

    #[error("backend returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

/// The one operation this client tier needs from the remote backend: a JSON
/// POST that either yields a parsed body or a classified failure. Behind a
/// trait so flows can be tested without a live backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn post(&self, path: &str, payload: Value) -> Result<Value, BackendError>;
}

/// reqwest-backed client for the support backend. One shared connection pool,
/// a fixed per-call timeout, no retries. Each call is fire-once.
pub struct BackendClient {
    base: Url,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(config::REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { base, client })
    }
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn post(&self, path: &str, payload: Value) -> Result<Value, BackendError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::InvalidBody(e.to_string()))
    }
}

/// Builds the status error for a non-2xx response, preferring the backend's
/// `{"detail": ...}` message when the body carries one.
fn status_error(status: u16, body: &str) -> BackendError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string());
    BackendError::Status { status, detail }
}
