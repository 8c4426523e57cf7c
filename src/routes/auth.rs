use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use axum::extract::State;
use validator::Validate;

use crate::{
    dto::auth_dto::{AuthResponse, LoginPayload, RegisterPayload},
    error::Result,
    middleware::auth::Claims,
    models::user::SessionUser,
    AppState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let (user, token) = state.auth_service.sign_in(&payload.email, &payload.password)?;
    Ok(Json(AuthResponse { user, token }))
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let (user, token) = state.auth_service.sign_up(payload)?;
    Ok((StatusCode::CREATED, Json(AuthResponse { user, token })))
}

#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.auth_service.sign_out()?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.current_user(&claims)?;
    Ok(Json(SessionUser::from(&user)))
}
