//! Submission handler implementations

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{LatestSubmissionQuery, RunRequest, SubmitRequest},
    response::{RunResponse, SubmissionSummary, SubmitResponse, TestCaseResultResponse},
};

/// Grade a submission against the exercise's full test case set and persist
/// the result
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    payload.validate()?;

    let (submission, outcome) = SubmissionService::submit(
        state.db(),
        state.content(),
        state.engine(),
        &payload.user_id,
        &payload.exercise_id,
        &payload.source_code,
        payload.language_id,
    )
    .await?;

    let test_results = outcome
        .per_test
        .iter()
        .map(TestCaseResultResponse::from_result)
        .collect();

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            submission: SubmissionSummary::from(submission),
            test_results,
        }),
    ))
}

/// Run code once against arbitrary stdin, without grading or persistence
pub async fn run_code(
    State(state): State<AppState>,
    Json(payload): Json<RunRequest>,
) -> AppResult<Json<RunResponse>> {
    payload.validate()?;

    let result = SubmissionService::run_code(
        state.engine(),
        &payload.source_code,
        payload.language_id,
        payload.stdin.as_deref().unwrap_or(""),
    )
    .await?;

    Ok(Json(RunResponse::from(result)))
}

/// Get the most recent graded submission for a (user, exercise) pair
pub async fn get_latest(
    State(state): State<AppState>,
    Query(query): Query<LatestSubmissionQuery>,
) -> AppResult<Json<SubmissionSummary>> {
    let submission =
        SubmissionService::get_latest(state.db(), &query.user_id, &query.exercise_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No submission for exercise {}",
                    query.exercise_id
                ))
            })?;

    Ok(Json(SubmissionSummary::from(submission)))
}
