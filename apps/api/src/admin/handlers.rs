use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::admin::service::{
    candidate_detail, dashboard, list_candidates, AdminDashboard, CandidateDetail,
    CandidateSummary,
};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CandidateSearch {
    pub search: Option<String>,
}

/// GET /api/v1/admin/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<AdminDashboard>, AppError> {
    user.require_admin()?;
    Ok(Json(dashboard(state.store.as_ref(), user.user_id).await?))
}

/// GET /api/v1/admin/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<CandidateSearch>,
) -> Result<Json<Vec<CandidateSummary>>, AppError> {
    user.require_admin()?;
    let candidates =
        list_candidates(state.store.as_ref(), user.user_id, params.search.as_deref()).await?;
    Ok(Json(candidates))
}

/// GET /api/v1/admin/candidates/:id
pub async fn handle_candidate_detail(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateDetail>, AppError> {
    user.require_admin()?;
    Ok(Json(
        candidate_detail(state.store.as_ref(), user.user_id, id).await?,
    ))
}
