//! Judge0 wire types and execution results

use serde::{Deserialize, Serialize};

use crate::constants::judge0_status;

/// Request body for a Judge0 submission
#[derive(Debug, Clone, Serialize)]
pub struct Judge0Submission {
    pub source_code: String,
    pub language_id: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdin: String,
}

/// Status object embedded in a Judge0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Judge0Status {
    pub id: i32,
    pub description: String,
}

/// Raw Judge0 submission response
#[derive(Debug, Clone, Deserialize)]
pub struct Judge0Response {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    pub status: Judge0Status,
    /// Elapsed time in seconds, serialized by Judge0 as a decimal string
    pub time: Option<String>,
    /// Peak memory in kilobytes
    pub memory: Option<i64>,
}

/// Outcome classification for one execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    InQueue,
    Processing,
    Accepted,
    WrongAnswer,
    /// The sandbox killed the program for exceeding its time limit. This is
    /// a normal terminal outcome, not an infrastructure error.
    TimeLimitExceeded,
    CompilationError,
    RuntimeError,
    InternalError,
}

impl ExecutionStatus {
    /// Map a Judge0 status id to an execution status
    pub fn from_status_id(id: i32) -> Self {
        match id {
            judge0_status::IN_QUEUE => Self::InQueue,
            judge0_status::PROCESSING => Self::Processing,
            judge0_status::ACCEPTED => Self::Accepted,
            judge0_status::WRONG_ANSWER => Self::WrongAnswer,
            judge0_status::TIME_LIMIT_EXCEEDED => Self::TimeLimitExceeded,
            judge0_status::COMPILATION_ERROR => Self::CompilationError,
            id if (judge0_status::RUNTIME_ERROR_FIRST..=judge0_status::RUNTIME_ERROR_LAST)
                .contains(&id) =>
            {
                Self::RuntimeError
            }
            _ => Self::InternalError,
        }
    }

    /// Check if this status is terminal (execution finished)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InQueue | Self::Processing)
    }

    /// Check if the failure came from the judge itself, not the learner's code
    pub fn is_infrastructure_error(&self) -> bool {
        matches!(self, Self::InternalError)
    }
}

/// Result of executing one source/stdin pair on the sandbox.
///
/// Ephemeral: produced per test case, consumed by the comparator and the
/// grading aggregate, never persisted individually.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    pub status: ExecutionStatus,
    pub status_description: String,
    /// Elapsed time in seconds
    pub time: Option<f64>,
    /// Peak memory in kilobytes
    pub memory: Option<i64>,
}

impl From<Judge0Response> for ExecutionResult {
    fn from(resp: Judge0Response) -> Self {
        Self {
            stdout: resp.stdout,
            stderr: resp.stderr,
            compile_output: resp.compile_output,
            message: resp.message,
            status: ExecutionStatus::from_status_id(resp.status.id),
            status_description: resp.status.description,
            time: resp.time.as_deref().and_then(|t| t.parse().ok()),
            memory: resp.memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_id_mapping() {
        assert_eq!(ExecutionStatus::from_status_id(3), ExecutionStatus::Accepted);
        assert_eq!(ExecutionStatus::from_status_id(4), ExecutionStatus::WrongAnswer);
        assert_eq!(
            ExecutionStatus::from_status_id(5),
            ExecutionStatus::TimeLimitExceeded
        );
        assert_eq!(
            ExecutionStatus::from_status_id(6),
            ExecutionStatus::CompilationError
        );
        for id in 7..=12 {
            assert_eq!(ExecutionStatus::from_status_id(id), ExecutionStatus::RuntimeError);
        }
        assert_eq!(
            ExecutionStatus::from_status_id(13),
            ExecutionStatus::InternalError
        );
        assert_eq!(
            ExecutionStatus::from_status_id(14),
            ExecutionStatus::InternalError
        );
    }

    #[test]
    fn test_response_conversion() {
        let raw = r#"{
            "stdout": "5\n",
            "stderr": null,
            "compile_output": null,
            "message": null,
            "status": {"id": 3, "description": "Accepted"},
            "time": "0.002",
            "memory": 3072
        }"#;

        let resp: Judge0Response = serde_json::from_str(raw).unwrap();
        let result = ExecutionResult::from(resp);

        assert_eq!(result.status, ExecutionStatus::Accepted);
        assert_eq!(result.stdout.as_deref(), Some("5\n"));
        assert_eq!(result.time, Some(0.002));
        assert_eq!(result.memory, Some(3072));
        assert!(result.status.is_terminal());
        assert!(!result.status.is_infrastructure_error());
    }

    #[test]
    fn test_empty_stdin_skipped_in_request() {
        let sub = Judge0Submission {
            source_code: "print(5)".to_string(),
            language_id: 71,
            stdin: String::new(),
        };
        let json = serde_json::to_value(&sub).unwrap();
        assert!(json.get("stdin").is_none());
    }
}
