use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Pipeline stage of a candidate. Serialized with the display labels the
/// dashboard uses, so filter payloads carry the same strings as the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    New,
    Screening,
    Interviewing,
    Assessment,
    Offered,
    Hired,
    Rejected,
    #[serde(rename = "On Hold")]
    OnHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[serde(rename = "Mid Level")]
    MidLevel,
    Senior,
    Manager,
    Director,
    Executive,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub location: String,
    pub status: CandidateStatus,
    pub applied_date: NaiveDate,
    pub experience_level: ExperienceLevel,
    pub skills: Vec<String>,
    #[validate(range(min = 0, max = 5))]
    pub rating: i32,
    #[validate(range(min = 0, max = 100))]
    pub ats_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<ProcessStep>>,
    /// Set when the candidate row was created as a registration side effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessStep {
    pub name: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
