use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::disc::calculate_disc_score;
use crate::disc::scoring::answers_from_json;
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::models::result::{NewResult, ResultStatus, TestResult};
use crate::models::user::Profile;
use crate::store::RecruitmentStore;

/// Stores a candidate's answers for an assessment. With `submit` the result
/// is scored and completed right away; otherwise it stays in progress.
pub async fn submit_answers(
    store: &dyn RecruitmentStore,
    candidate_id: Uuid,
    assessment_id: Uuid,
    answers: BTreeMap<String, String>,
    submit: bool,
) -> Result<TestResult, AppError> {
    store
        .get_assessment(assessment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assessment {assessment_id} not found")))?;

    store.ensure_candidate(candidate_id).await?;

    let answers = serde_json::to_value(&answers).map_err(anyhow::Error::from)?;
    let result = store
        .insert_result(NewResult {
            candidate_id,
            assessment_id,
            answers,
        })
        .await?;
    info!(
        "Stored result {} for candidate {candidate_id} on assessment {assessment_id}",
        result.id
    );

    if submit {
        score_result(store, result).await
    } else {
        Ok(result)
    }
}

/// Scores a stored result and persists score and completion time together.
/// Re-scoring an already completed result overwrites both.
pub async fn score_result(
    store: &dyn RecruitmentStore,
    mut result: TestResult,
) -> Result<TestResult, AppError> {
    let answers = result.answers.as_ref().ok_or_else(|| {
        AppError::UnprocessableEntity("No answers found for this result".to_string())
    })?;

    let score = calculate_disc_score(&answers_from_json(answers));
    debug!(
        "Result {}: D={} I={} S={} C={} (sum {})",
        result.id,
        score.d,
        score.i,
        score.s,
        score.c,
        score.total()
    );
    let completed_at = Utc::now();

    if !store.save_score(result.id, &score, completed_at).await? {
        return Err(AppError::NotFound(format!("Result {} not found", result.id)));
    }

    info!(
        "DISC score calculated for result {}: dominant {} ({}%)",
        result.id, score.dominant_profile, score.percentage
    );

    result.score = Some(score);
    result.completed_at = Some(completed_at);
    result.updated_at = completed_at;
    Ok(result)
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentProgress {
    pub assessment_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: ResultStatus,
    pub result_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateDashboard {
    pub full_name: Option<String>,
    pub assessments: Vec<AssessmentProgress>,
    pub completed_tests: usize,
    pub total_tests: usize,
}

/// Per-assessment status for one candidate. A completed attempt wins over an
/// in-progress one for the same assessment.
pub fn build_dashboard(
    profile: &Profile,
    assessments: &[Assessment],
    results: &[TestResult],
) -> CandidateDashboard {
    let progress: Vec<AssessmentProgress> = assessments
        .iter()
        .map(|a| {
            let attempts: Vec<_> = results.iter().filter(|r| r.assessment_id == a.id).collect();
            let chosen = attempts
                .iter()
                .find(|r| r.completed_at.is_some())
                .or_else(|| attempts.first());
            AssessmentProgress {
                assessment_id: a.id,
                name: a.name.clone(),
                description: a.description.clone(),
                status: chosen.map_or(ResultStatus::NotStarted, |r| r.status()),
                result_id: chosen.map(|r| r.id),
            }
        })
        .collect();

    CandidateDashboard {
        full_name: profile.full_name.clone(),
        completed_tests: results.iter().filter(|r| r.completed_at.is_some()).count(),
        total_tests: assessments.len(),
        assessments: progress,
    }
}
