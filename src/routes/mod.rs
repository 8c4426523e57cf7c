pub mod auth;
pub mod candidates;
pub mod dashboard;
pub mod health;
pub mod suppliers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Route not found"})),
    )
}
