use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_candidates: i64,
    pub active_positions: i64,
    pub hired: i64,
    pub time_to_hire: i64,
    pub candidates_change: String,
    pub positions_change: String,
    pub time_to_hire_change: String,
    pub hired_change: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub month: String,
    pub applications: i64,
    pub interviews: i64,
    pub offers: i64,
    pub hires: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelStage {
    pub name: String,
    pub count: i64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMetric {
    pub id: i64,
    pub name: String,
    pub open_positions: i64,
    pub active_candidates: i64,
    pub interviews: i64,
    pub time_to_hire: i64,
    pub fill_rate: i64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub candidate_id: i64,
    pub name: String,
    pub file_type: String,
    pub file_size: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: String,
}
