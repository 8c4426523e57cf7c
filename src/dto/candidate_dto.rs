use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::filters::candidate::{CandidateFilter, CandidateSort};
use crate::models::candidate::Candidate;
use crate::models::communication::CommunicationType;

/// Every field defaults, so an empty body runs the pipeline with no search
/// text, default filters and the default sort.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateSearchPayload {
    pub query: String,
    pub filters: CandidateFilter,
    pub sort: CandidateSort,
}

#[derive(Debug, Serialize)]
pub struct CandidateSearchResponse {
    pub total: usize,
    pub results: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotePayload {
    #[validate(length(min = 1, message = "Note content cannot be empty"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNotePayload {
    #[validate(length(min = 1, message = "Note content cannot be empty"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommunicationPayload {
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    #[validate(length(min = 1, message = "Subject cannot be empty"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
    #[serde(default)]
    pub duration: Option<String>,
}
