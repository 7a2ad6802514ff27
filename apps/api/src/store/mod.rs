//! Persistence seam. `AppState` holds an `Arc<dyn RecruitmentStore>`;
//! production uses `PgStore`, handler tests use the in-memory store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::disc::DiscScore;
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::models::result::{NewResult, TestResult};
use crate::models::user::{CandidateDetails, CandidateProfile, Company, Profile};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// Lookups return `Ok(None)` for missing rows; `Err` is reserved for store failures.
#[async_trait]
pub trait RecruitmentStore: Send + Sync {
    async fn list_assessments(&self) -> Result<Vec<Assessment>, AppError>;

    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, AppError>;

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError>;

    /// Returns `false` when the profile row does not exist.
    async fn update_profile_name(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
    ) -> Result<bool, AppError>;

    async fn get_candidate(&self, user_id: Uuid) -> Result<Option<CandidateProfile>, AppError>;

    /// Creates the candidate row for `user_id` if it does not exist yet.
    async fn ensure_candidate(&self, user_id: Uuid) -> Result<(), AppError>;

    /// Inserts the candidate row with these details, or overwrites the details
    /// of the existing row. `company_id` is never touched.
    async fn upsert_candidate_details(
        &self,
        user_id: Uuid,
        details: &CandidateDetails,
    ) -> Result<CandidateProfile, AppError>;

    async fn insert_result(&self, new: NewResult) -> Result<TestResult, AppError>;

    async fn get_result(&self, id: Uuid) -> Result<Option<TestResult>, AppError>;

    async fn list_results_for_candidate(
        &self,
        candidate_id: Uuid,
    ) -> Result<Vec<TestResult>, AppError>;

    /// Writes score and completion time together. Returns `false` when no row matched.
    async fn save_score(
        &self,
        result_id: Uuid,
        score: &DiscScore,
        completed_at: DateTime<Utc>,
    ) -> Result<bool, AppError>;

    async fn company_for_admin(&self, admin_id: Uuid) -> Result<Option<Company>, AppError>;

    async fn list_company_candidates(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<CandidateProfile>, AppError>;

    async fn get_company_candidate(
        &self,
        company_id: Uuid,
        candidate_id: Uuid,
    ) -> Result<Option<CandidateProfile>, AppError>;

    /// Completed and pending result counts across the company's candidates.
    async fn company_result_counts(&self, company_id: Uuid) -> Result<ResultCounts, AppError>;

    async fn count_invitations(&self, company_id: Uuid) -> Result<i64, AppError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct ResultCounts {
    pub completed: i64,
    pub pending: i64,
}
