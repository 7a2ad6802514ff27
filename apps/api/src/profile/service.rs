use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{blank_to_none, CandidateDetails, CandidateProfile, Profile};
use crate::store::RecruitmentStore;

#[derive(Debug, Clone, Serialize)]
pub struct MyProfile {
    pub profile: Profile,
    /// `None` until the user has taken a test or saved their details.
    pub candidate: Option<CandidateProfile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub details: CandidateDetails,
}

pub async fn load_profile(
    store: &dyn RecruitmentStore,
    user_id: Uuid,
) -> Result<MyProfile, AppError> {
    let profile = store
        .get_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {user_id} not found")))?;
    let candidate = store.get_candidate(user_id).await?;
    Ok(MyProfile { profile, candidate })
}

/// Writes the name to `profiles`, then inserts or updates the `candidates`
/// row. Only ever touches the rows keyed by `user_id`.
pub async fn save_profile(
    store: &dyn RecruitmentStore,
    user_id: Uuid,
    update: ProfileUpdate,
) -> Result<MyProfile, AppError> {
    let full_name = blank_to_none(update.full_name);
    if !store
        .update_profile_name(user_id, full_name.as_deref())
        .await?
    {
        return Err(AppError::NotFound(format!("Profile {user_id} not found")));
    }

    store
        .upsert_candidate_details(user_id, &update.details.normalized())
        .await?;
    info!("Profile updated for user {user_id}");

    load_profile(store, user_id).await
}
