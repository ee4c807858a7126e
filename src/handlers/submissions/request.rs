//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Graded submit request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    /// Learner submitting the attempt (supplied by the platform gateway)
    pub user_id: Uuid,

    /// Exercise being attempted
    pub exercise_id: Uuid,

    /// Judge0 language identifier
    pub language_id: i32,

    /// Source code
    #[validate(length(min = 1, max = 1048576))] // 1MB max
    pub source_code: String,
}

/// Ungraded "try it" run request
#[derive(Debug, Deserialize, Validate)]
pub struct RunRequest {
    /// Judge0 language identifier
    pub language_id: i32,

    /// Source code
    #[validate(length(min = 1, max = 1048576))] // 1MB max
    pub source_code: String,

    /// Stdin fed to the program; defaults to empty
    #[validate(length(max = 65536))] // 64KB max
    pub stdin: Option<String>,
}

/// Latest-submission query parameters
#[derive(Debug, Deserialize)]
pub struct LatestSubmissionQuery {
    pub user_id: Uuid,
    pub exercise_id: Uuid,
}
