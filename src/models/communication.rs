use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationType {
    Email,
    Call,
    Message,
    Video,
}

/// Append-only log entry. `sent_by` is a user id, or the literal "external"
/// for inbound messages from the candidate side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: i64,
    pub candidate_id: i64,
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    pub subject: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub sent_by: String,
    pub sent_by_name: String,
    /// Only meaningful for calls, e.g. "25 minutes".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}
