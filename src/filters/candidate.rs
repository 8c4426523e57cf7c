use serde::{Deserialize, Serialize};

use crate::filters::ci_cmp;
use crate::filters::range::ScoreRange;
use crate::models::candidate::{Candidate, CandidateStatus, ExperienceLevel};

/// Immutable filter state for the candidate list. An empty selection in any
/// dimension means that dimension does not filter; the dimensions that are
/// active are conjoined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateFilter {
    pub status: Vec<CandidateStatus>,
    pub department: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceLevel>,
    pub ats_score_range: ScoreRange,
}

impl CandidateFilter {
    pub fn is_default(&self) -> bool {
        self.status.is_empty()
            && self.department.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.ats_score_range.is_default()
    }

    pub fn matches(&self, candidate: &Candidate) -> bool {
        (self.status.is_empty() || self.status.contains(&candidate.status))
            && (self.department.is_empty() || self.department.contains(&candidate.department))
            && (self.skills.is_empty()
                || candidate.skills.iter().any(|skill| self.skills.contains(skill)))
            && (self.experience.is_empty()
                || self.experience.contains(&candidate.experience_level))
            && self.ats_score_range.contains(candidate.ats_score)
    }
}

/// Sort options exactly as the dashboard's dropdown labels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CandidateSort {
    #[default]
    #[serde(rename = "Newest first")]
    NewestFirst,
    #[serde(rename = "Oldest first")]
    OldestFirst,
    #[serde(rename = "Name A-Z")]
    NameAsc,
    #[serde(rename = "Name Z-A")]
    NameDesc,
    #[serde(rename = "Rating (High to Low)")]
    RatingDesc,
    #[serde(rename = "ATS Score (High to Low)")]
    AtsScoreDesc,
}

/// Case-insensitive substring search over name, position, email and skills.
pub fn search_matches(candidate: &Candidate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    candidate.name.to_lowercase().contains(&query)
        || candidate.position.to_lowercase().contains(&query)
        || candidate.email.to_lowercase().contains(&query)
        || candidate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&query))
}

/// Produces a fresh derived collection; the base collection is never mutated.
/// Sorting is stable, so records that compare equal keep their store order.
pub fn apply(
    candidates: &[Candidate],
    filter: &CandidateFilter,
    query: &str,
    sort: CandidateSort,
) -> Vec<Candidate> {
    let filter = CandidateFilter {
        ats_score_range: filter.ats_score_range.sanitized(),
        ..filter.clone()
    };

    let mut results: Vec<Candidate> = candidates
        .iter()
        .filter(|c| search_matches(c, query) && filter.matches(c))
        .cloned()
        .collect();

    match sort {
        CandidateSort::NewestFirst => {
            results.sort_by(|a, b| b.applied_date.cmp(&a.applied_date))
        }
        CandidateSort::OldestFirst => {
            results.sort_by(|a, b| a.applied_date.cmp(&b.applied_date))
        }
        CandidateSort::NameAsc => results.sort_by(|a, b| ci_cmp(&a.name, &b.name)),
        CandidateSort::NameDesc => results.sort_by(|a, b| ci_cmp(&b.name, &a.name)),
        CandidateSort::RatingDesc => results.sort_by(|a, b| b.rating.cmp(&a.rating)),
        CandidateSort::AtsScoreDesc => results.sort_by(|a, b| b.ats_score.cmp(&a.ats_score)),
    }

    results
}
