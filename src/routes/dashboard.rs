use axum::{extract::State, response::{IntoResponse, Json}};

use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.stats_service.dashboard_stats()))
}

#[axum::debug_handler]
pub async fn get_timeline(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.stats_service.timeline()))
}

#[axum::debug_handler]
pub async fn get_funnel(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.stats_service.funnel()))
}

#[axum::debug_handler]
pub async fn get_activities(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.stats_service.activities()))
}

#[axum::debug_handler]
pub async fn get_department_metrics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.stats_service.department_metrics()))
}
