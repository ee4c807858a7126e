//! Submission lifecycle service
//!
//! Governs a learner's attempt at an exercise: draft autosave, ungraded
//! runs, graded submits, and what the editor should load on return. There
//! is no locked state; learners may resubmit indefinitely and every submit
//! appends a new submission row.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    content::ExerciseSource,
    db::repositories::{DraftRepository, SubmissionRepository},
    error::AppResult,
    grading::{GradingEngine, GradingOutcome},
    judge0::ExecutionResult,
    models::{Draft, Submission, SubmissionStatus},
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Autosave the learner's in-progress code.
    ///
    /// Idempotent upsert keyed by (user, exercise); the environment calls
    /// this periodically while the learner edits. No grading happens here,
    /// and a storage failure must be treated by the caller as a non-fatal
    /// warning so editing is never blocked.
    pub async fn save_draft(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
        source_code: &str,
        language_id: i32,
    ) -> AppResult<Draft> {
        let draft =
            DraftRepository::upsert(pool, user_id, exercise_id, source_code, language_id).await?;

        tracing::debug!(%user_id, %exercise_id, "draft saved");
        Ok(draft)
    }

    /// Run code once against arbitrary stdin without grading.
    ///
    /// Touches neither drafts nor submissions.
    pub async fn run_code(
        engine: &GradingEngine,
        source_code: &str,
        language_id: i32,
        stdin: &str,
    ) -> AppResult<ExecutionResult> {
        engine.run_once(source_code, language_id, stdin).await
    }

    /// Grade a submission against the exercise's full test case set and
    /// persist the result.
    ///
    /// `NoTestCases` and `InvalidLanguage` propagate unchanged; per-test
    /// infrastructure failures are absorbed into the outcome. A failed
    /// submission write after successful grading is an error — the learner
    /// must not believe they submitted when nothing was stored.
    pub async fn submit(
        pool: &PgPool,
        content: &dyn ExerciseSource,
        engine: &GradingEngine,
        user_id: &Uuid,
        exercise_id: &Uuid,
        source_code: &str,
        language_id: i32,
    ) -> AppResult<(Submission, GradingOutcome)> {
        let bundle = content.exercise_with_tests(*exercise_id).await?;
        let test_cases = bundle.ordered_test_cases();

        let outcome = engine
            .grade(
                source_code,
                language_id,
                bundle.exercise.points,
                &test_cases,
            )
            .await?;

        let status = Self::status_for(&outcome);

        let submission = SubmissionRepository::create(
            pool,
            user_id,
            exercise_id,
            source_code,
            language_id,
            status.as_str(),
            outcome.passed_count,
            outcome.total_count,
            outcome.points_earned,
            outcome.all_passed,
            outcome.errored_count,
        )
        .await?;

        tracing::info!(
            %user_id,
            %exercise_id,
            status = %status,
            passed = outcome.passed_count,
            total = outcome.total_count,
            points = outcome.points_earned,
            "submission graded"
        );

        Ok((submission, outcome))
    }

    /// Get the most recent graded submission for a (user, exercise) pair
    pub async fn get_latest(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        SubmissionRepository::find_latest(pool, user_id, exercise_id).await
    }

    /// Get the current draft for a (user, exercise) pair
    pub async fn get_draft(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
    ) -> AppResult<Option<Draft>> {
        DraftRepository::find(pool, user_id, exercise_id).await
    }

    /// What the editor should load when the learner returns to an exercise:
    /// the more recently written of the latest draft and latest submission,
    /// falling back to the exercise's starter code.
    pub async fn resume_source(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
        starter_code: Option<&str>,
    ) -> AppResult<String> {
        let draft = DraftRepository::find(pool, user_id, exercise_id).await?;
        let submission = SubmissionRepository::find_latest(pool, user_id, exercise_id).await?;

        Ok(Self::pick_resume_source(
            draft.as_ref(),
            submission.as_ref(),
            starter_code,
        ))
    }

    /// Derive the overall submission status from a grading outcome
    fn status_for(outcome: &GradingOutcome) -> SubmissionStatus {
        if outcome.is_ungradable() {
            SubmissionStatus::ExecutionFailed
        } else if outcome.all_passed {
            SubmissionStatus::Accepted
        } else {
            SubmissionStatus::WrongAnswer
        }
    }

    /// Precedence: most recently written of draft and submission wins; a
    /// timestamp tie goes to the draft since it is the learner's latest
    /// editing intent.
    fn pick_resume_source(
        draft: Option<&Draft>,
        submission: Option<&Submission>,
        starter_code: Option<&str>,
    ) -> String {
        match (draft, submission) {
            (Some(d), Some(s)) => {
                if d.updated_at >= s.created_at {
                    d.source_code.clone()
                } else {
                    s.source_code.clone()
                }
            }
            (Some(d), None) => d.source_code.clone(),
            (None, Some(s)) => s.source_code.clone(),
            (None, None) => starter_code.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::grading::GradingOutcome;

    fn outcome(passed: i32, total: i32, errored: i32) -> GradingOutcome {
        GradingOutcome {
            per_test: vec![],
            passed_count: passed,
            total_count: total,
            points_earned: 0,
            all_passed: passed == total,
            errored_count: errored,
        }
    }

    fn draft_at(code: &str, age_secs: i64) -> Draft {
        Draft {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            source_code: code.to_string(),
            language_id: 71,
            updated_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    fn submission_at(code: &str, age_secs: i64) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            source_code: code.to_string(),
            language_id: 71,
            status: "accepted".to_string(),
            test_cases_passed: 1,
            test_cases_total: 1,
            points_earned: 100,
            is_correct: true,
            execution_errors: 0,
            created_at: Utc::now() - Duration::seconds(age_secs),
        }
    }

    #[test]
    fn test_status_derivation() {
        assert_eq!(
            SubmissionService::status_for(&outcome(3, 3, 0)),
            SubmissionStatus::Accepted
        );
        assert_eq!(
            SubmissionService::status_for(&outcome(2, 3, 0)),
            SubmissionStatus::WrongAnswer
        );
        assert_eq!(
            SubmissionService::status_for(&outcome(0, 3, 3)),
            SubmissionStatus::ExecutionFailed
        );
        // Some tests errored but others actually ran: graded, not an outage
        assert_eq!(
            SubmissionService::status_for(&outcome(1, 3, 2)),
            SubmissionStatus::WrongAnswer
        );
    }

    #[test]
    fn test_resume_prefers_more_recent() {
        let newer_draft = draft_at("draft code", 10);
        let older_submission = submission_at("submitted code", 100);
        assert_eq!(
            SubmissionService::pick_resume_source(
                Some(&newer_draft),
                Some(&older_submission),
                None
            ),
            "draft code"
        );

        let older_draft = draft_at("draft code", 100);
        let newer_submission = submission_at("submitted code", 10);
        assert_eq!(
            SubmissionService::pick_resume_source(
                Some(&older_draft),
                Some(&newer_submission),
                None
            ),
            "submitted code"
        );
    }

    #[test]
    fn test_resume_falls_back_to_starter() {
        assert_eq!(
            SubmissionService::pick_resume_source(None, None, Some("print('start')")),
            "print('start')"
        );
        assert_eq!(SubmissionService::pick_resume_source(None, None, None), "");
    }

    #[test]
    fn test_resume_single_source() {
        let draft = draft_at("only draft", 5);
        assert_eq!(
            SubmissionService::pick_resume_source(Some(&draft), None, Some("starter")),
            "only draft"
        );

        let submission = submission_at("only submission", 5);
        assert_eq!(
            SubmissionService::pick_resume_source(None, Some(&submission), Some("starter")),
            "only submission"
        );
    }
}
