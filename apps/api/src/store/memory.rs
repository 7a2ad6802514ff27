use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::disc::DiscScore;
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::models::result::{NewResult, ResultRow, TestResult};
use crate::models::user::{CandidateDetails, CandidateProfile, Company, Profile};
use crate::store::{RecruitmentStore, ResultCounts};

#[derive(Default)]
struct Tables {
    assessments: Vec<Assessment>,
    profiles: HashMap<Uuid, Profile>,
    companies: Vec<Company>,
    candidates: HashMap<Uuid, CandidateProfile>,
    results: Vec<TestResult>,
    invitations: HashMap<Uuid, i64>,
}

/// In-memory store for handler tests.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub async fn add_assessment(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.write().await.assessments.push(Assessment {
            id,
            name: name.to_string(),
            description: Some(format!("{name} description")),
            instructions: Some("Pick the option that fits you best.".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        id
    }

    pub async fn add_profile(&self, full_name: &str, role: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.write().await.profiles.insert(
            id,
            Profile {
                id,
                full_name: Some(full_name.to_string()),
                role: role.to_string(),
                avatar_url: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        );
        id
    }

    pub async fn add_company(&self, name: &str, admin_user_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.tables.write().await.companies.push(Company {
            id,
            name: name.to_string(),
            cnpj: None,
            admin_user_id,
        });
        id
    }

    pub async fn attach_candidate(&self, candidate_id: Uuid, company_id: Uuid) {
        let _ = self.ensure_candidate(candidate_id).await;
        if let Some(c) = self.tables.write().await.candidates.get_mut(&candidate_id) {
            c.company_id = Some(company_id);
        }
    }

    pub async fn set_invitations(&self, company_id: Uuid, count: i64) {
        self.tables.write().await.invitations.insert(company_id, count);
    }

    /// Stores a raw row, decoded the same way rows read from Postgres are.
    pub async fn insert_row(&self, row: ResultRow) -> Uuid {
        let result = TestResult::from(row);
        let id = result.id;
        self.tables.write().await.results.push(result);
        id
    }

    pub async fn set_answers(&self, result_id: Uuid, answers: Option<serde_json::Value>) {
        let mut tables = self.tables.write().await;
        if let Some(r) = tables.results.iter_mut().find(|r| r.id == result_id) {
            r.answers = answers;
        }
    }
}

#[async_trait]
impl RecruitmentStore for MemoryStore {
    async fn list_assessments(&self) -> Result<Vec<Assessment>, AppError> {
        let mut all = self.tables.read().await.assessments.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn get_assessment(&self, id: Uuid) -> Result<Option<Assessment>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.assessments.iter().find(|a| a.id == id).cloned())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(self.tables.read().await.profiles.get(&user_id).cloned())
    }

    async fn update_profile_name(
        &self,
        user_id: Uuid,
        full_name: Option<&str>,
    ) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        let Some(profile) = tables.profiles.get_mut(&user_id) else {
            return Ok(false);
        };
        profile.full_name = full_name.map(str::to_string);
        profile.updated_at = Utc::now();
        if let Some(c) = tables.candidates.get_mut(&user_id) {
            c.full_name = full_name.map(str::to_string);
        }
        Ok(true)
    }

    async fn get_candidate(&self, user_id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        Ok(self.tables.read().await.candidates.get(&user_id).cloned())
    }

    async fn upsert_candidate_details(
        &self,
        user_id: Uuid,
        details: &CandidateDetails,
    ) -> Result<CandidateProfile, AppError> {
        self.ensure_candidate(user_id).await?;
        let mut tables = self.tables.write().await;
        let candidate = tables
            .candidates
            .get_mut(&user_id)
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Candidate {user_id} missing")))?;
        candidate.phone = details.phone.clone();
        candidate.address = details.address.clone();
        candidate.linkedin_profile = details.linkedin_profile.clone();
        candidate.birth_date = details.birth_date;
        Ok(candidate.clone())
    }

    async fn ensure_candidate(&self, user_id: Uuid) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let full_name = tables.profiles.get(&user_id).and_then(|p| p.full_name.clone());
        tables
            .candidates
            .entry(user_id)
            .or_insert_with(|| CandidateProfile {
                id: user_id,
                company_id: None,
                full_name,
                phone: None,
                address: None,
                linkedin_profile: None,
                birth_date: None,
                created_at: Utc::now(),
            });
        Ok(())
    }

    async fn insert_result(&self, new: NewResult) -> Result<TestResult, AppError> {
        let result = TestResult {
            id: Uuid::new_v4(),
            candidate_id: new.candidate_id,
            assessment_id: new.assessment_id,
            answers: Some(new.answers),
            score: None,
            completed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.tables.write().await.results.push(result.clone());
        Ok(result)
    }

    async fn get_result(&self, id: Uuid) -> Result<Option<TestResult>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.results.iter().find(|r| r.id == id).cloned())
    }

    async fn list_results_for_candidate(
        &self,
        candidate_id: Uuid,
    ) -> Result<Vec<TestResult>, AppError> {
        let tables = self.tables.read().await;
        let mut results: Vec<_> = tables
            .results
            .iter()
            .filter(|r| r.candidate_id == candidate_id)
            .cloned()
            .collect();
        results.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(results)
    }

    async fn save_score(
        &self,
        result_id: Uuid,
        score: &DiscScore,
        completed_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        match tables.results.iter_mut().find(|r| r.id == result_id) {
            Some(r) => {
                r.score = Some(*score);
                r.completed_at = Some(completed_at);
                r.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn company_for_admin(&self, admin_id: Uuid) -> Result<Option<Company>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .companies
            .iter()
            .find(|c| c.admin_user_id == admin_id)
            .cloned())
    }

    async fn list_company_candidates(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<CandidateProfile>, AppError> {
        let tables = self.tables.read().await;
        let mut candidates: Vec<_> = tables
            .candidates
            .values()
            .filter(|c| c.company_id == Some(company_id))
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(candidates)
    }

    async fn get_company_candidate(
        &self,
        company_id: Uuid,
        candidate_id: Uuid,
    ) -> Result<Option<CandidateProfile>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .candidates
            .get(&candidate_id)
            .filter(|c| c.company_id == Some(company_id))
            .cloned())
    }

    async fn company_result_counts(&self, company_id: Uuid) -> Result<ResultCounts, AppError> {
        let tables = self.tables.read().await;
        let mut counts = ResultCounts::default();
        for r in &tables.results {
            let in_company = tables
                .candidates
                .get(&r.candidate_id)
                .is_some_and(|c| c.company_id == Some(company_id));
            if !in_company {
                continue;
            }
            if r.completed_at.is_some() {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
        }
        Ok(counts)
    }

    async fn count_invitations(&self, company_id: Uuid) -> Result<i64, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .invitations
            .get(&company_id)
            .copied()
            .unwrap_or(0))
    }
}
