//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config, content::ContentClient, grading::GradingEngine, judge0::Judge0Client,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Judge0 sandbox client
    pub judge0: Judge0Client,

    /// Content API client
    pub content: ContentClient,

    /// Grading engine (fans executions out to the sandbox)
    pub engine: GradingEngine,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, judge0: Judge0Client, content: ContentClient, config: Config) -> Self {
        let engine = GradingEngine::new(Arc::new(judge0.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                db,
                judge0,
                content,
                engine,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the Judge0 client
    pub fn judge0(&self) -> &Judge0Client {
        &self.inner.judge0
    }

    /// Get a reference to the content API client
    pub fn content(&self) -> &ContentClient {
        &self.inner.content
    }

    /// Get a reference to the grading engine
    pub fn engine(&self) -> &GradingEngine {
        &self.inner.engine
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
