use crate::error::ClientError;
use crate::types::Report;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const REPORTS_LIMIT: usize = 20;

/// Blocking HTTP wrapper around the analysis service. One attempt per call,
/// no retries; callers decide what to do with failures.
#[derive(Debug)]
pub struct ServiceClient {
    base_url: String,
    http: Client,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Validation(
                "service URL must not be empty".to_string(),
            ));
        }
        let http = Client::builder().build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a repository URL for analysis and returns the report text.
    /// If the payload has no string `result` field the whole payload is
    /// pretty-printed instead.
    pub fn analyze(&self, url: &str) -> Result<String, ClientError> {
        debug!(%url, "submitting analysis request");
        let response = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .json(&json!({ "url": url }))
            .send()?;

        let data: Value = Self::check(response)?.json()?;
        let text = match data.get("result").and_then(Value::as_str) {
            Some(result) => result.to_string(),
            None => serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string()),
        };
        Ok(text)
    }

    pub fn list_reports(&self) -> Result<Vec<Report>, ClientError> {
        let response = self
            .http
            .get(format!(
                "{}/reports?limit={REPORTS_LIMIT}",
                self.base_url
            ))
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    pub fn get_report(&self, id: i64) -> Result<Report, ClientError> {
        let response = self
            .http
            .get(format!("{}/report/{id}", self.base_url))
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }
        Ok(Self::check(response)?.json()?)
    }

    pub fn delete_report(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/report/{id}", self.base_url))
            .send()?;
        Self::check(response)?;
        Ok(())
    }

    /// Liveness probe; returns the service's reported status string.
    pub fn health(&self) -> Result<String, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()?;
        let data: Value = Self::check(response)?.json()?;
        Ok(data
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string())
    }

    fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        let body = if body.trim().is_empty() {
            "request failed".to_string()
        } else {
            body
        };
        Err(ClientError::Http {
            status: status.as_u16(),
            body,
        })
    }
}
