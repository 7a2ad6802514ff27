use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::disc::DiscScore;
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::models::result::{candidate_status, ResultStatus, TestResult};
use crate::models::user::{CandidateProfile, Company};
use crate::store::RecruitmentStore;

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub company: Company,
    pub total_candidates: usize,
    pub completed_tests: i64,
    pub pending_tests: i64,
    pub invitations: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    #[serde(flatten)]
    pub candidate: CandidateProfile,
    pub test_status: ResultStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletedResultView {
    pub result_id: Uuid,
    pub assessment_id: Uuid,
    pub assessment_name: String,
    pub assessment_description: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub score: Option<DiscScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateDetail {
    pub candidate: CandidateProfile,
    pub results: Vec<CompletedResultView>,
}

pub async fn admin_company(
    store: &dyn RecruitmentStore,
    admin_id: Uuid,
) -> Result<Company, AppError> {
    store
        .company_for_admin(admin_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No company registered for this admin".to_string()))
}

pub async fn dashboard(
    store: &dyn RecruitmentStore,
    admin_id: Uuid,
) -> Result<AdminDashboard, AppError> {
    let company = admin_company(store, admin_id).await?;
    let total_candidates = store.list_company_candidates(company.id).await?.len();
    let counts = store.company_result_counts(company.id).await?;
    let invitations = store.count_invitations(company.id).await?;

    Ok(AdminDashboard {
        company,
        total_candidates,
        completed_tests: counts.completed,
        pending_tests: counts.pending,
        invitations,
    })
}

pub async fn list_candidates(
    store: &dyn RecruitmentStore,
    admin_id: Uuid,
    search: Option<&str>,
) -> Result<Vec<CandidateSummary>, AppError> {
    let company = admin_company(store, admin_id).await?;
    let candidates = filter_by_name(store.list_company_candidates(company.id).await?, search);

    let mut summaries = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let results = store.list_results_for_candidate(candidate.id).await?;
        summaries.push(CandidateSummary {
            test_status: candidate_status(&results),
            candidate,
        });
    }
    Ok(summaries)
}

pub async fn candidate_detail(
    store: &dyn RecruitmentStore,
    admin_id: Uuid,
    candidate_id: Uuid,
) -> Result<CandidateDetail, AppError> {
    let company = admin_company(store, admin_id).await?;
    let candidate = store
        .get_company_candidate(company.id, candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

    let assessments: HashMap<Uuid, Assessment> = store
        .list_assessments()
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();
    let results = store.list_results_for_candidate(candidate_id).await?;

    Ok(CandidateDetail {
        candidate,
        results: completed_views(results, &assessments),
    })
}

/// Case-insensitive substring match on full name. Blank search keeps everyone.
fn filter_by_name(
    candidates: Vec<CandidateProfile>,
    search: Option<&str>,
) -> Vec<CandidateProfile> {
    let needle = match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_lowercase(),
        None => return candidates,
    };
    candidates
        .into_iter()
        .filter(|c| {
            c.full_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Completed results only, newest first.
fn completed_views(
    results: Vec<TestResult>,
    assessments: &HashMap<Uuid, Assessment>,
) -> Vec<CompletedResultView> {
    let mut completed: Vec<_> = results
        .into_iter()
        .filter(|r| r.completed_at.is_some())
        .collect();
    completed.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

    completed
        .into_iter()
        .map(|r| {
            let assessment = assessments.get(&r.assessment_id);
            CompletedResultView {
                result_id: r.id,
                assessment_id: r.assessment_id,
                assessment_name: assessment.map(|a| a.name.clone()).unwrap_or_default(),
                assessment_description: assessment.and_then(|a| a.description.clone()),
                completed_at: r.completed_at,
                score: r.score,
            }
        })
        .collect()
}
