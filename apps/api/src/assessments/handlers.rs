use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::disc::questions::{catalog, Question};
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::state::AppState;

/// GET /api/v1/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Assessment>>, AppError> {
    Ok(Json(state.store.list_assessments().await?))
}

/// GET /api/v1/assessments/:id
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Assessment>, AppError> {
    let assessment = state
        .store
        .get_assessment(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))?;
    Ok(Json(assessment))
}

/// GET /api/v1/assessments/:id/questions
pub async fn handle_get_questions(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<&'static [Question]>, AppError> {
    state
        .store
        .get_assessment(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))?;
    Ok(Json(catalog()))
}
