use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        CandidateSearchPayload, CandidateSearchResponse, CreateCommunicationPayload,
        CreateNotePayload, UpdateNotePayload,
    },
    error::Result,
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.candidate_service.list()))
}

#[axum::debug_handler]
pub async fn search_candidates(
    State(state): State<AppState>,
    Json(payload): Json<CandidateSearchPayload>,
) -> Result<impl IntoResponse> {
    let results = state
        .candidate_service
        .search(&payload.filters, &payload.query, payload.sort);
    Ok(Json(CandidateSearchResponse {
        total: results.len(),
        results,
    }))
}

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(id)?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn list_notes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.candidate_service.notes(id)?))
}

#[axum::debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateNotePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let author = state.auth_service.current_user(&claims)?;
    let note = state.candidate_service.add_note(id, &payload.content, &author)?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[axum::debug_handler]
pub async fn update_note(
    State(state): State<AppState>,
    Path((_id, note_id)): Path<(i64, i64)>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateNotePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let editor = state.auth_service.current_user(&claims)?;
    let note = state
        .candidate_service
        .update_note(note_id, &payload.content, &editor)?;
    Ok(Json(note))
}

#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    Path((_id, note_id)): Path<(i64, i64)>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let editor = state.auth_service.current_user(&claims)?;
    state.candidate_service.delete_note(note_id, &editor)?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_communications(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.candidate_service.communications(id)?))
}

#[axum::debug_handler]
pub async fn create_communication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateCommunicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let sender = state.auth_service.current_user(&claims)?;
    let communication = state.candidate_service.add_communication(
        id,
        payload.kind,
        &payload.subject,
        &payload.content,
        payload.duration,
        &sender,
    )?;
    Ok((StatusCode::CREATED, Json(communication)))
}

#[axum::debug_handler]
pub async fn list_documents(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.candidate_service.documents(id)?))
}
