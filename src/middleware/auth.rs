use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

/// Verifies the bearer token and inserts the decoded [`Claims`] into request
/// extensions for the handlers behind it.
pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    match decode_claims(req.headers()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(response) => response,
    }
}

fn decode_claims(headers: &HeaderMap) -> Result<Claims, Response> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("missing_authorization"))?;
    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("bad_authorization"))?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("unsupported_scheme"))?;

    let config = crate::config::get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| unauthorized("invalid_token"))
}

fn unauthorized(reason: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": reason }))).into_response()
}
