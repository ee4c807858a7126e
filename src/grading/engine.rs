//! Grading engine - runs a submission against an exercise's test cases
//!
//! One sandbox execution is fanned out per test case; executions are
//! independent and run concurrently, and results are re-associated with
//! their source test case by position so the aggregate preserves the
//! author-defined order. A single test case failing on infrastructure never
//! aborts grading of the rest; precondition failures (no test cases,
//! unsupported language) abort before anything executes.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    judge0::{CodeExecutor, ExecutionResult, ExecutionStatus},
    models::{TestCase, is_supported_language},
};

use super::comparator::outputs_match;

/// Verdict for a single test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestVerdict {
    /// Output matched the expected output
    Passed,
    /// The code ran (or failed to compile) and did not produce the expected
    /// output
    Failed { status: ExecutionStatus },
    /// The sandbox could not execute this test case at all
    Errored { detail: String },
}

impl TestVerdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored { .. })
    }
}

/// Graded result for one test case, tagged with the hidden flag of its
/// source test case so the presentation layer can redact detail. The engine
/// itself never redacts.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub test_case_id: Uuid,
    pub hidden: bool,
    pub verdict: TestVerdict,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub expected_output: String,
    /// Elapsed time in seconds
    pub time: Option<f64>,
    /// Peak memory in kilobytes
    pub memory: Option<i64>,
}

/// Aggregate result of grading one submission
#[derive(Debug, Clone, Serialize)]
pub struct GradingOutcome {
    /// Per-test results, in the same order as the input test cases
    pub per_test: Vec<TestResult>,
    pub passed_count: i32,
    pub total_count: i32,
    pub points_earned: i32,
    pub all_passed: bool,
    /// Test cases that failed on sandbox infrastructure rather than on the
    /// learner's code
    pub errored_count: i32,
}

impl GradingOutcome {
    /// Whether no test case could be executed at all
    pub fn is_ungradable(&self) -> bool {
        self.errored_count == self.total_count
    }
}

/// Grading engine
pub struct GradingEngine {
    executor: Arc<dyn CodeExecutor>,
}

impl GradingEngine {
    /// Create a new grading engine
    pub fn new(executor: Arc<dyn CodeExecutor>) -> Self {
        Self { executor }
    }

    /// Grade a submission against an exercise's full test case set.
    ///
    /// `test_cases` must already be in author-defined order;
    /// `exercise_points` is the exercise's whole-submission point value.
    pub async fn grade(
        &self,
        source_code: &str,
        language_id: i32,
        exercise_points: i32,
        test_cases: &[TestCase],
    ) -> AppResult<GradingOutcome> {
        if test_cases.is_empty() {
            return Err(AppError::NoTestCases);
        }
        if !is_supported_language(language_id) {
            return Err(AppError::InvalidLanguage(language_id));
        }

        // Independent executions; join_all yields results in input order
        // regardless of completion order.
        let executions = futures::future::join_all(test_cases.iter().map(|tc| {
            self.executor
                .execute(source_code, language_id, tc.input.as_deref().unwrap_or(""))
        }))
        .await;

        let per_test: Vec<TestResult> = test_cases
            .iter()
            .zip(executions)
            .map(|(tc, execution)| Self::judge_test_case(tc, execution))
            .collect();

        let total_count = per_test.len() as i32;
        let passed_count = per_test.iter().filter(|r| r.verdict.is_passed()).count() as i32;
        let errored_count = per_test.iter().filter(|r| r.verdict.is_errored()).count() as i32;

        let points_earned =
            ((passed_count as f64 / total_count as f64) * exercise_points as f64).round() as i32;

        let outcome = GradingOutcome {
            per_test,
            passed_count,
            total_count,
            points_earned,
            all_passed: passed_count == total_count,
            errored_count,
        };

        if outcome.is_ungradable() {
            tracing::warn!(
                total = total_count,
                "every test case failed on sandbox infrastructure; submission is ungradable"
            );
        }

        Ok(outcome)
    }

    /// Run code once against arbitrary stdin, without grading.
    ///
    /// Used for the "try it" path: no test cases are consulted and nothing
    /// is persisted.
    pub async fn run_once(
        &self,
        source_code: &str,
        language_id: i32,
        stdin: &str,
    ) -> AppResult<ExecutionResult> {
        if !is_supported_language(language_id) {
            return Err(AppError::InvalidLanguage(language_id));
        }
        self.executor.execute(source_code, language_id, stdin).await
    }

    /// Convert one execution outcome into a per-test result
    fn judge_test_case(tc: &TestCase, execution: AppResult<ExecutionResult>) -> TestResult {
        match execution {
            Ok(result) if result.status.is_infrastructure_error() => {
                let detail = result
                    .message
                    .clone()
                    .unwrap_or_else(|| result.status_description.clone());
                tracing::warn!(test_case = %tc.id, %detail, "sandbox reported internal error");
                TestResult {
                    test_case_id: tc.id,
                    hidden: tc.is_hidden,
                    verdict: TestVerdict::Errored { detail },
                    stdout: result.stdout,
                    stderr: result.stderr,
                    compile_output: result.compile_output,
                    expected_output: tc.expected_output.clone(),
                    time: result.time,
                    memory: result.memory,
                }
            }
            Ok(result) => {
                // Judge0 is not given the expected output, so a clean run
                // always comes back Accepted; the comparator decides the
                // actual pass/fail.
                let passed = result.status == ExecutionStatus::Accepted
                    && outputs_match(result.stdout.as_deref(), &tc.expected_output);

                let verdict = if passed {
                    TestVerdict::Passed
                } else {
                    TestVerdict::Failed {
                        status: result.status,
                    }
                };

                TestResult {
                    test_case_id: tc.id,
                    hidden: tc.is_hidden,
                    verdict,
                    stdout: result.stdout,
                    stderr: result.stderr,
                    compile_output: result.compile_output,
                    expected_output: tc.expected_output.clone(),
                    time: result.time,
                    memory: result.memory,
                }
            }
            Err(e) => {
                tracing::warn!(test_case = %tc.id, error = %e, "execution failed, continuing with remaining test cases");
                TestResult {
                    test_case_id: tc.id,
                    hidden: tc.is_hidden,
                    verdict: TestVerdict::Errored {
                        detail: e.to_string(),
                    },
                    stdout: None,
                    stderr: None,
                    compile_output: None,
                    expected_output: tc.expected_output.clone(),
                    time: None,
                    memory: None,
                }
            }
        }
    }
}
