use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::SessionUser;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: SessionUser,
    pub token: String,
}
