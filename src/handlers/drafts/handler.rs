//! Draft handler implementations

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::{
    content::ExerciseSource,
    error::{AppError, AppResult},
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{DraftQuery, SaveDraftRequest},
    response::{DraftResponse, ResumeResponse},
};

/// Autosave the learner's in-progress code (idempotent upsert)
pub async fn save_draft(
    State(state): State<AppState>,
    Json(payload): Json<SaveDraftRequest>,
) -> AppResult<Json<DraftResponse>> {
    payload.validate()?;

    let draft = SubmissionService::save_draft(
        state.db(),
        &payload.user_id,
        &payload.exercise_id,
        &payload.source_code,
        payload.language_id,
    )
    .await?;

    Ok(Json(DraftResponse::from(draft)))
}

/// Get the current draft for a (user, exercise) pair
pub async fn get_draft(
    State(state): State<AppState>,
    Query(query): Query<DraftQuery>,
) -> AppResult<Json<DraftResponse>> {
    let draft = SubmissionService::get_draft(state.db(), &query.user_id, &query.exercise_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No draft for exercise {}", query.exercise_id))
        })?;

    Ok(Json(DraftResponse::from(draft)))
}

/// What the editor should load when the learner returns to an exercise:
/// the freshest of draft, latest submission, and starter code
pub async fn resume(
    State(state): State<AppState>,
    Query(query): Query<DraftQuery>,
) -> AppResult<Json<ResumeResponse>> {
    let bundle = state.content().exercise_with_tests(query.exercise_id).await?;

    let source_code = SubmissionService::resume_source(
        state.db(),
        &query.user_id,
        &query.exercise_id,
        bundle.exercise.starter_code.as_deref(),
    )
    .await?;

    Ok(Json(ResumeResponse {
        exercise_id: query.exercise_id,
        source_code,
    }))
}
