//! HTTP client for the Judge0 sandbox
//!
//! The client is stateless between calls and carries all of its
//! configuration from construction time. Each `execute` call blocks until
//! the sandbox reports a terminal status (`wait=true`) or the configured
//! wall-clock deadline expires, in which case it resolves to an
//! `ExecutionUnavailable` error rather than hanging grading.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::Judge0Config,
    constants::HEALTH_CHECK_TIMEOUT_SECS,
    error::{AppError, AppResult},
};

use super::types::{ExecutionResult, Judge0Response, Judge0Submission};

/// Seam between the grading engine and the sandbox transport
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    /// Run one source/stdin pair to a terminal status or the deadline
    async fn execute(
        &self,
        source_code: &str,
        language_id: i32,
        stdin: &str,
    ) -> AppResult<ExecutionResult>;
}

/// Judge0 HTTP client
#[derive(Debug, Clone)]
pub struct Judge0Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Judge0Client {
    /// Create a client from explicit configuration
    pub fn new(config: &Judge0Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.execution_deadline)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Check if the sandbox is reachable
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/about", self.base_url);
        match self
            .http
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl CodeExecutor for Judge0Client {
    async fn execute(
        &self,
        source_code: &str,
        language_id: i32,
        stdin: &str,
    ) -> AppResult<ExecutionResult> {
        let url = format!(
            "{}/submissions?base64_encoded=false&wait=true",
            self.base_url
        );

        let body = Judge0Submission {
            source_code: source_code.to_string(),
            language_id,
            stdin: stdin.to_string(),
        };

        let mut request = self.http.post(&url).json(&body);
        if !self.api_key.is_empty() {
            request = request.header("X-RapidAPI-Key", &self.api_key);
        }

        // Transport failures and the wall-clock deadline both surface here
        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExecutionUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::ExecutionUnavailable(format!(
                "sandbox returned {}: {}",
                status, detail
            )));
        }

        let parsed: Judge0Response = response
            .json()
            .await
            .map_err(|e| AppError::ExecutionUnavailable(format!("malformed response: {}", e)))?;

        let result = ExecutionResult::from(parsed);
        tracing::debug!(
            status = ?result.status,
            time = ?result.time,
            memory = ?result.memory,
            "sandbox execution finished"
        );

        Ok(result)
    }
}
