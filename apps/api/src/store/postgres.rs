use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::disc::DiscScore;
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::models::result::{NewResult, ResultRow, TestResult};
use crate::models::user::{CandidateDetails, CandidateProfile, Company, Profile};
use crate::store::{RecruitmentStore, ResultCounts};

const CANDIDATE_COLUMNS: &str = r#"
    c.id, c.company_id, p.full_name, c.phone, c.address,
    c.linkedin_profile, c.birth_date, c.created_at
"#;

/// PostgreSQL-backed store over the `assessments`, `profiles`, `companies`,
/// `candidates`, `results` and `invitations` tables.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecruitmentStore for PgStore {
    async fn list_assessments(&self) -> Result<Vec<Assessment>, AppError> {
        Ok(sqlx::query_as::<_, Assessment>(
            "SELECT id, name, description, instructions, created_at, updated_at \
             FROM assessments ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, AppError> {
        Ok(sqlx::query_as::<_, Assessment>(
            "SELECT id, name, description, instructions, created_at, updated_at \
             FROM assessments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(sqlx::query_as::<_, Profile>(
            "SELECT id, full_name, role, avatar_url, created_at, updated_at \
             FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update_profile_name(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
    ) -> Result<bool, AppError> {
        let updated =
            sqlx::query("UPDATE profiles SET full_name = $1, updated_at = now() WHERE id = $2")
                .bind(full_name)
                .bind(user_id)
                .execute(&self.pool)
                .await?
                .rows_affected();
        Ok(updated > 0)
    }

    async fn get_candidate(&self, user_id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        let sql = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates c \
             LEFT JOIN profiles p ON p.id = c.id \
             WHERE c.id = $1"
        );
        Ok(sqlx::query_as::<_, CandidateProfile>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn ensure_candidate(&self, user_id: Uuid) -> Result<(), AppError> {
        let inserted =
            sqlx::query("INSERT INTO candidates (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
                .bind(user_id)
                .execute(&self.pool)
                .await?
                .rows_affected();
        if inserted > 0 {
            info!("Created candidate record for user {user_id}");
        }
        Ok(())
    }

    async fn upsert_candidate_details(
        &self,
        user_id: Uuid,
        details: &CandidateDetails,
    ) -> Result<CandidateProfile, AppError> {
        sqlx::query(
            r#"
            INSERT INTO candidates (id, phone, address, linkedin_profile, birth_date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                linkedin_profile = EXCLUDED.linkedin_profile,
                birth_date = EXCLUDED.birth_date,
                updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(&details.phone)
        .bind(&details.address)
        .bind(&details.linkedin_profile)
        .bind(details.birth_date)
        .execute(&self.pool)
        .await?;

        debug!("Saved candidate details for user {user_id}");
        self.get_candidate(user_id).await?.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("Candidate {user_id} missing after upsert"))
        })
    }

    async fn insert_result(&self, new: NewResult) -> Result<TestResult, AppError> {
        let row = sqlx::query_as::<_, ResultRow>(
            r#"
            INSERT INTO results (candidate_id, assessment_id, answers)
            VALUES ($1, $2, $3)
            RETURNING id, candidate_id, assessment_id, answers, score,
                      completed_at, created_at, updated_at
            "#,
        )
        .bind(new.candidate_id)
        .bind(new.assessment_id)
        .bind(&new.answers)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted result {} for candidate {}", row.id, row.candidate_id);
        Ok(row.into())
    }

    async fn get_result(&self, id: Uuid) -> Result<Option<TestResult>, AppError> {
        let row = sqlx::query_as::<_, ResultRow>(
            "SELECT id, candidate_id, assessment_id, answers, score, \
                    completed_at, created_at, updated_at \
             FROM results WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(TestResult::from))
    }

    async fn list_results_for_candidate(
        &self,
        candidate_id: Uuid,
    ) -> Result<Vec<TestResult>, AppError> {
        let rows = sqlx::query_as::<_, ResultRow>(
            r#"
            SELECT id, candidate_id, assessment_id, answers, score,
                   completed_at, created_at, updated_at
            FROM results
            WHERE candidate_id = $1
            ORDER BY completed_at DESC NULLS LAST, created_at DESC
            "#,
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(TestResult::from).collect())
    }

    async fn save_score(
        &self,
        result_id: Uuid,
        score: &DiscScore,
        completed_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let updated = sqlx::query(
            "UPDATE results SET score = $1, completed_at = $2, updated_at = now() WHERE id = $3",
        )
        .bind(sqlx::types::Json(score))
        .bind(completed_at)
        .bind(result_id)
        .execute(&self.pool)
        .await?
        .rows_affected();
        Ok(updated > 0)
    }

    async fn company_for_admin(&self, admin_id: Uuid) -> Result<Option<Company>, AppError> {
        Ok(sqlx::query_as::<_, Company>(
            "SELECT id, name, cnpj, admin_user_id FROM companies WHERE admin_user_id = $1 LIMIT 1",
        )
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_company_candidates(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<CandidateProfile>, AppError> {
        let sql = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates c \
             JOIN profiles p ON p.id = c.id \
             WHERE c.company_id = $1 ORDER BY p.full_name ASC NULLS LAST"
        );
        Ok(sqlx::query_as::<_, CandidateProfile>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_company_candidate(
        &self,
        company_id: Uuid,
        candidate_id: Uuid,
    ) -> Result<Option<CandidateProfile>, AppError> {
        let sql = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates c \
             JOIN profiles p ON p.id = c.id \
             WHERE c.id = $1 AND c.company_id = $2"
        );
        Ok(sqlx::query_as::<_, CandidateProfile>(&sql)
            .bind(candidate_id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn company_result_counts(&self, company_id: Uuid) -> Result<ResultCounts, AppError> {
        Ok(sqlx::query_as::<_, ResultCounts>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE r.completed_at IS NOT NULL) AS completed,
                COUNT(*) FILTER (WHERE r.completed_at IS NULL) AS pending
            FROM results r
            JOIN candidates c ON c.id = r.candidate_id
            WHERE c.company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn count_invitations(&self, company_id: Uuid) -> Result<i64, AppError> {
        Ok(
            sqlx::query_scalar("SELECT COUNT(*) FROM invitations WHERE company_id = $1")
                .bind(company_id)
                .fetch_one(&self.pool)
                .await?,
        )
    }
}
