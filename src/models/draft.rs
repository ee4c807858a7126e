//! Draft model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Autosaved in-progress code for an exercise. At most one live draft exists
/// per (user, exercise); each autosave overwrites it in place. A draft is
/// never graded.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Draft {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub source_code: String,
    pub language_id: i32,
    pub updated_at: DateTime<Utc>,
}
