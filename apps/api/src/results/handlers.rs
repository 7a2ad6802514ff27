use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::disc::profiles::{build_report, DiscReport};
use crate::disc::DiscScore;
use crate::errors::AppError;
use crate::models::result::TestResult;
use crate::results::service::{build_dashboard, score_result, submit_answers, CandidateDashboard};
use crate::state::AppState;

fn default_submit() -> bool {
    true
}

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub answers: BTreeMap<String, String>,
    #[serde(default = "default_submit")]
    pub submit: bool,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub score: DiscScore,
}

async fn load_result(state: &AppState, id: Uuid) -> Result<TestResult, AppError> {
    state
        .store
        .get_result(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Result {id} not found")))
}

/// POST /api/v1/assessments/:id/results
pub async fn handle_submit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(assessment_id): Path<Uuid>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TestResult>), AppError> {
    let Json(req) = payload?;
    let result = submit_answers(
        state.store.as_ref(),
        user.user_id,
        assessment_id,
        req.answers,
        req.submit,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// POST /api/v1/results/:id/score
pub async fn handle_score(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ScoreResponse>, AppError> {
    let result = load_result(&state, id).await?;
    user.require_owner_or_admin(result.candidate_id)?;

    let scored = score_result(state.store.as_ref(), result).await?;
    let score = scored
        .score
        .ok_or_else(|| anyhow::anyhow!("Result {id} has no score after scoring"))?;
    Ok(Json(ScoreResponse {
        success: true,
        score,
    }))
}

/// GET /api/v1/results/:id
pub async fn handle_get_result(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TestResult>, AppError> {
    let result = load_result(&state, id).await?;
    user.require_owner_or_admin(result.candidate_id)?;
    Ok(Json(result))
}

/// GET /api/v1/results/:id/report
pub async fn handle_get_report(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DiscReport>, AppError> {
    let result = load_result(&state, id).await?;
    user.require_owner_or_admin(result.candidate_id)?;

    let score = result
        .score
        .ok_or_else(|| AppError::Conflict(format!("Result {id} has not been scored yet")))?;
    let assessment_name = state
        .store
        .get_assessment(result.assessment_id)
        .await?
        .map(|a| a.name)
        .unwrap_or_default();

    Ok(Json(build_report(
        result.id,
        assessment_name,
        result.completed_at,
        score,
    )))
}

/// GET /api/v1/me/results
pub async fn handle_my_results(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<TestResult>>, AppError> {
    Ok(Json(
        state.store.list_results_for_candidate(user.user_id).await?,
    ))
}

/// GET /api/v1/me/dashboard
pub async fn handle_my_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<CandidateDashboard>, AppError> {
    let profile = state
        .store
        .get_profile(user.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    let assessments = state.store.list_assessments().await?;
    let results = state.store.list_results_for_candidate(user.user_id).await?;
    Ok(Json(build_dashboard(&profile, &assessments, &results)))
}
