use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::profile::service::{load_profile, save_profile, MyProfile, ProfileUpdate};
use crate::state::AppState;

/// GET /api/v1/me/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MyProfile>, AppError> {
    Ok(Json(load_profile(state.store.as_ref(), user.user_id).await?))
}

/// PUT /api/v1/me/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<MyProfile>, AppError> {
    let Json(update) = payload?;
    Ok(Json(
        save_profile(state.store.as_ref(), user.user_id, update).await?,
    ))
}
