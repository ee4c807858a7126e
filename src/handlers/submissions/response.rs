//! Submission response DTOs
//!
//! The grading core tags every per-test result with its hidden flag; the
//! DTO mapping here is the presentation seam that redacts hidden detail
//! before anything reaches a learner.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    grading::{TestResult, TestVerdict},
    judge0::{ExecutionResult, ExecutionStatus},
    models::Submission,
};

/// Graded submission summary
#[derive(Debug, Serialize)]
pub struct SubmissionSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub language_id: i32,
    pub status: String,
    pub test_cases_passed: i32,
    pub test_cases_total: i32,
    pub points_earned: i32,
    pub is_correct: bool,
    pub execution_errors: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionSummary {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            exercise_id: s.exercise_id,
            language_id: s.language_id,
            status: s.status,
            test_cases_passed: s.test_cases_passed,
            test_cases_total: s.test_cases_total,
            points_earned: s.points_earned,
            is_correct: s.is_correct,
            execution_errors: s.execution_errors,
            created_at: s.created_at,
        }
    }
}

/// Per-test result as exposed to the learner-facing caller
#[derive(Debug, Serialize)]
pub struct TestCaseResultResponse {
    pub test_case_id: Uuid,
    pub hidden: bool,
    pub passed: bool,
    /// "passed" | "failed" | "errored"
    pub verdict: &'static str,
    /// Cleared for hidden test cases
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub expected_output: Option<String>,
    pub error: Option<String>,
    pub time: Option<f64>,
    pub memory: Option<i64>,
}

impl TestCaseResultResponse {
    /// Map a core result, redacting output and error detail for hidden
    /// test cases. The pass/fail boolean and the tag itself stay visible.
    pub fn from_result(result: &TestResult) -> Self {
        let (verdict, error) = match &result.verdict {
            TestVerdict::Passed => ("passed", None),
            TestVerdict::Failed { .. } => ("failed", None),
            TestVerdict::Errored { detail } => ("errored", Some(detail.clone())),
        };

        if result.hidden {
            return Self {
                test_case_id: result.test_case_id,
                hidden: true,
                passed: result.verdict.is_passed(),
                verdict,
                stdout: None,
                stderr: None,
                compile_output: None,
                expected_output: None,
                error: None,
                time: result.time,
                memory: result.memory,
            };
        }

        Self {
            test_case_id: result.test_case_id,
            hidden: false,
            passed: result.verdict.is_passed(),
            verdict,
            stdout: result.stdout.clone(),
            stderr: result.stderr.clone(),
            compile_output: result.compile_output.clone(),
            expected_output: Some(result.expected_output.clone()),
            error,
            time: result.time,
            memory: result.memory,
        }
    }
}

/// Graded submit response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub submission: SubmissionSummary,
    pub test_results: Vec<TestCaseResultResponse>,
}

/// Ungraded run response
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub status: ExecutionStatus,
    pub status_description: String,
    pub time: Option<f64>,
    pub memory: Option<i64>,
}

impl From<ExecutionResult> for RunResponse {
    fn from(r: ExecutionResult) -> Self {
        Self {
            stdout: r.stdout,
            stderr: r.stderr,
            compile_output: r.compile_output,
            status: r.status,
            status_description: r.status_description,
            time: r.time,
            memory: r.memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(hidden: bool, verdict: TestVerdict) -> TestResult {
        TestResult {
            test_case_id: Uuid::new_v4(),
            hidden,
            verdict,
            stdout: Some("actual".to_string()),
            stderr: Some("warning".to_string()),
            compile_output: None,
            expected_output: "expected".to_string(),
            time: Some(0.01),
            memory: Some(1024),
        }
    }

    #[test]
    fn test_hidden_failure_is_redacted_but_tagged() {
        let r = result(
            true,
            TestVerdict::Failed {
                status: ExecutionStatus::WrongAnswer,
            },
        );
        let dto = TestCaseResultResponse::from_result(&r);

        assert!(dto.hidden);
        assert!(!dto.passed);
        assert_eq!(dto.verdict, "failed");
        assert!(dto.stdout.is_none());
        assert!(dto.stderr.is_none());
        assert!(dto.expected_output.is_none());
        assert!(dto.error.is_none());
    }

    #[test]
    fn test_hidden_errored_detail_is_redacted() {
        let r = result(
            true,
            TestVerdict::Errored {
                detail: "connection refused".to_string(),
            },
        );
        let dto = TestCaseResultResponse::from_result(&r);
        assert_eq!(dto.verdict, "errored");
        assert!(dto.error.is_none());
    }

    #[test]
    fn test_visible_result_keeps_detail() {
        let r = result(false, TestVerdict::Passed);
        let dto = TestCaseResultResponse::from_result(&r);

        assert!(!dto.hidden);
        assert!(dto.passed);
        assert_eq!(dto.stdout.as_deref(), Some("actual"));
        assert_eq!(dto.expected_output.as_deref(), Some("expected"));
    }
}
