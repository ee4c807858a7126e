//! Draft repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Draft};

/// Repository for autosaved code drafts
pub struct DraftRepository;

impl DraftRepository {
    /// Upsert the draft for a (user, exercise) pair. Idempotent; concurrent
    /// autosaves resolve last-write-wins.
    pub async fn upsert(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
        source_code: &str,
        language_id: i32,
    ) -> AppResult<Draft> {
        let draft = sqlx::query_as::<_, Draft>(
            r#"
            INSERT INTO code_drafts (user_id, exercise_id, source_code, language_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, exercise_id) DO UPDATE SET
                source_code = EXCLUDED.source_code,
                language_id = EXCLUDED.language_id,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(exercise_id)
        .bind(source_code)
        .bind(language_id)
        .fetch_one(pool)
        .await?;

        Ok(draft)
    }

    /// Find the draft for a (user, exercise) pair
    pub async fn find(
        pool: &PgPool,
        user_id: &Uuid,
        exercise_id: &Uuid,
    ) -> AppResult<Option<Draft>> {
        let draft = sqlx::query_as::<_, Draft>(
            r#"SELECT * FROM code_drafts WHERE user_id = $1 AND exercise_id = $2"#,
        )
        .bind(user_id)
        .bind(exercise_id)
        .fetch_optional(pool)
        .await?;

        Ok(draft)
    }

    /// Delete the draft for a (user, exercise) pair
    pub async fn delete(pool: &PgPool, user_id: &Uuid, exercise_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM code_drafts WHERE user_id = $1 AND exercise_id = $2"#)
            .bind(user_id)
            .bind(exercise_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
