//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model. Rows are append-only: a resubmit creates a new
/// row and never mutates earlier attempts.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub language_id: i32,
    pub status: String,
    pub test_cases_passed: i32,
    pub test_cases_total: i32,
    pub points_earned: i32,
    pub is_correct: bool,
    /// How many test cases failed on sandbox infrastructure rather than on
    /// the learner's code. Nonzero values flag the attempt for investigation.
    pub execution_errors: i32,
    pub created_at: DateTime<Utc>,
}

/// Overall submission status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    /// No test case could be executed at all (sandbox outage)
    ExecutionFailed,
}

impl SubmissionStatus {
    /// Get status as string (must match the DB CHECK constraint)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::ExecutionFailed => "execution_failed",
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accepted" => Some(Self::Accepted),
            "wrong_answer" => Some(Self::WrongAnswer),
            "execution_failed" => Some(Self::ExecutionFailed),
            _ => None,
        }
    }

    /// Check if this status means the solution was fully correct
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            SubmissionStatus::Accepted,
            SubmissionStatus::WrongAnswer,
            SubmissionStatus::ExecutionFailed,
        ] {
            assert_eq!(SubmissionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SubmissionStatus::parse("pending"), None);
    }

    #[test]
    fn test_is_accepted() {
        assert!(SubmissionStatus::Accepted.is_accepted());
        assert!(!SubmissionStatus::WrongAnswer.is_accepted());
        assert!(!SubmissionStatus::ExecutionFailed.is_accepted());
    }
}
