//! HTTP client for the Q&A backend: health check, statistics and ask.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::messages::{AskRequest, AskResponse, HealthResponse, StatsResponse};

/// Client request error. Transport failures and undecodable bodies both surface as `Http`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// The three backend operations the chat UI depends on.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn health(&self) -> Result<HealthResponse, ClientError>;

    async fn stats(&self) -> Result<StatsResponse, ClientError>;

    async fn ask(&self, question: &str, n_results: u32) -> Result<AskResponse, ClientError>;
}

/// Backend client bound to one base address (e.g. `http://localhost:8000`).
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

#[async_trait]
impl Backend for Client {
    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint("/health");
        tracing::debug!(%url, "checking backend health");
        let response = check_status(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn stats(&self) -> Result<StatsResponse, ClientError> {
        let url = self.endpoint("/stats");
        tracing::debug!(%url, "loading stats");
        let response = check_status(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn ask(&self, question: &str, n_results: u32) -> Result<AskResponse, ClientError> {
        let url = self.endpoint("/ask");
        tracing::debug!(%url, n_results, "asking question");
        let body = AskRequest::new(question, n_results);
        let response = check_status(self.http.post(&url).json(&body).send().await?).await?;
        Ok(response.json().await?)
    }
}
