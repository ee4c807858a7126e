//! Draft response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Draft;

/// Draft response
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub language_id: i32,
    pub source_code: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Draft> for DraftResponse {
    fn from(d: Draft) -> Self {
        Self {
            user_id: d.user_id,
            exercise_id: d.exercise_id,
            language_id: d.language_id,
            source_code: d.source_code,
            updated_at: d.updated_at,
        }
    }
}

/// What the editor should load when the learner returns to an exercise
#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub exercise_id: Uuid,
    pub source_code: String,
}
