//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new graded submission. Submissions are append-only; a
    /// resubmit inserts a new row and never touches prior attempts.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
        source_code: &str,
        language_id: i32,
        status: &str,
        test_cases_passed: i32,
        test_cases_total: i32,
        points_earned: i32,
        is_correct: bool,
        execution_errors: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (
                user_id, exercise_id, source_code, language_id, status,
                test_cases_passed, test_cases_total, points_earned,
                is_correct, execution_errors
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(exercise_id)
        .bind(source_code)
        .bind(language_id)
        .bind(status)
        .bind(test_cases_passed)
        .bind(test_cases_total)
        .bind(points_earned)
        .bind(is_correct)
        .bind(execution_errors)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Get the most recent submission for a (user, exercise) pair
    pub async fn find_latest(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = $1 AND exercise_id = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(exercise_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Count submissions for a (user, exercise) pair
    pub async fn count_for_exercise(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM submissions WHERE user_id = $1 AND exercise_id = $2"#,
        )
        .bind(user_id)
        .bind(exercise_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
