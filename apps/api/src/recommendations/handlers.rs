//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::unifier::ProfileInput;
use crate::models::career::DetailedCareerPath;
use crate::recommendations::pipeline::{detail_for, generate_career_paths, RecommendationResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionPathsResponse {
    pub session_id: Uuid,
    pub paths: Vec<DetailedCareerPath>,
}

/// POST /api/v1/recommendations
///
/// Full pipeline: unify profile → recommend → detail fan-out. Creates a
/// session whose cache backs the per-path endpoints below. An empty `paths`
/// array is the "no matches" outcome, returned as 200.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let response = generate_career_paths(state.engine.as_ref(), &state.sessions, input).await?;
    Ok(Json(response))
}

/// GET /api/v1/recommendations/:session_id
///
/// Returns the session's detailed paths in candidate order.
pub async fn handle_get_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionPathsResponse>, AppError> {
    let paths = state
        .sessions
        .ordered_paths(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    Ok(Json(SessionPathsResponse { session_id, paths }))
}

/// GET /api/v1/recommendations/:session_id/paths/:job_title
///
/// Cache-first single-candidate detail; re-selecting a viewed path never
/// re-issues external calls.
pub async fn handle_get_detail(
    State(state): State<AppState>,
    Path((session_id, job_title)): Path<(Uuid, String)>,
) -> Result<Json<DetailedCareerPath>, AppError> {
    let detail = detail_for(
        state.engine.as_ref(),
        &state.sessions,
        session_id,
        &job_title,
    )
    .await?;
    Ok(Json(detail))
}

/// DELETE /api/v1/recommendations/:session_id
///
/// Discards the session and its detail cache (the "form reset" affordance).
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {session_id} not found")))
    }
}
