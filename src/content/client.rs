//! HTTP client for the content API

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    config::ContentConfig,
    error::{AppError, AppResult},
    models::ExerciseWithTests,
};

/// Source of exercises and their test cases
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseSource: Send + Sync {
    /// Fetch an exercise together with its full (visible and hidden) test
    /// case set
    async fn exercise_with_tests(&self, exercise_id: Uuid) -> AppResult<ExerciseWithTests>;
}

/// Content API HTTP client
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client from explicit configuration
    pub fn new(config: &ContentConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ExerciseSource for ContentClient {
    async fn exercise_with_tests(&self, exercise_id: Uuid) -> AppResult<ExerciseWithTests> {
        let url = format!("{}/exercises/{}", self.base_url, exercise_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ContentApi(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "Exercise {} not found",
                exercise_id
            )));
        }

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ContentApi(format!(
                "content API returned {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ContentApi(format!("malformed exercise payload: {}", e)))
    }
}
