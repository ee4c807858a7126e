//! WizardCore Grader - Submission grading service
//!
//! This library provides the grading backend for the WizardCore
//! coding-education platform: learner code is executed against exercise
//! test cases on an external Judge0 sandbox and converted into a scored,
//! persisted submission.
//!
//! # Features
//!
//! - Concurrent per-test-case execution on a remote Judge0 instance
//! - Trimmed exact-match output comparison
//! - Partial-credit scoring with visible/hidden test case tagging
//! - Draft autosave and append-only submission history
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Grading**: Comparator and grading engine
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod content;
pub mod db;
pub mod error;
pub mod grading;
pub mod handlers;
pub mod judge0;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
