use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Admin,
}

impl Role {
    /// Unknown role strings fall back to the least privileged role.
    pub fn from_db(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Candidate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub role: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn role(&self) -> Role {
        Role::from_db(&self.role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub cnpj: Option<String>,
    pub admin_user_id: Uuid,
}

/// A candidate row joined with the owning profile's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub company_id: Option<Uuid>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin_profile: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Contact fields a candidate edits on their own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDetails {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin_profile: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl CandidateDetails {
    /// Trims text fields; blank strings are stored as NULL.
    pub fn normalized(self) -> Self {
        CandidateDetails {
            phone: blank_to_none(self.phone),
            address: blank_to_none(self.address),
            linkedin_profile: blank_to_none(self.linkedin_profile),
            birth_date: self.birth_date,
        }
    }
}

pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
