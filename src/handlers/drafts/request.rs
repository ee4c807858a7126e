//! Draft request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Autosave upsert request
#[derive(Debug, Deserialize, Validate)]
pub struct SaveDraftRequest {
    pub user_id: Uuid,
    pub exercise_id: Uuid,

    /// Judge0 language identifier
    pub language_id: i32,

    /// In-progress source code; an empty editor is a valid draft
    #[validate(length(max = 1048576))] // 1MB max
    pub source_code: String,
}

/// Draft lookup query parameters
#[derive(Debug, Deserialize)]
pub struct DraftQuery {
    pub user_id: Uuid,
    pub exercise_id: Uuid,
}
