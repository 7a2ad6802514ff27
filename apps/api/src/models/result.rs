use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::disc::DiscScore;

/// Raw `results` row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct ResultRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub assessment_id: Uuid,
    pub answers: Option<Value>,
    pub score: Option<Value>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One candidate's attempt at one assessment.
///
/// `score` is either absent or a complete normalized distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub assessment_id: Uuid,
    pub answers: Option<Value>,
    pub score: Option<DiscScore>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TestResult {
    pub fn status(&self) -> ResultStatus {
        if self.completed_at.is_some() {
            ResultStatus::Completed
        } else {
            ResultStatus::InProgress
        }
    }
}

impl From<ResultRow> for TestResult {
    fn from(row: ResultRow) -> Self {
        let score = row.score.and_then(|v| match serde_json::from_value::<DiscScore>(v) {
            Ok(s) => Some(s),
            Err(e) => {
                warn!("Result {} carries a non-DISC score, treating as unscored: {e}", row.id);
                None
            }
        });
        TestResult {
            id: row.id,
            candidate_id: row.candidate_id,
            assessment_id: row.assessment_id,
            answers: row.answers,
            score,
            completed_at: row.completed_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewResult {
    pub candidate_id: Uuid,
    pub assessment_id: Uuid,
    pub answers: Value,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Overall status of a candidate across all of their results.
pub fn candidate_status(results: &[TestResult]) -> ResultStatus {
    if results.is_empty() {
        return ResultStatus::NotStarted;
    }
    if results.iter().any(|r| r.completed_at.is_none()) {
        ResultStatus::InProgress
    } else {
        ResultStatus::Completed
    }
}
