use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use rand::rngs::OsRng;
use uuid::Uuid;

use crate::config::get_config;
use crate::dto::auth_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::models::user::{SessionUser, User};
use crate::store::EntityStore;

/// File the active session is persisted to under `SESSION_DIR`, so a restart
/// picks up where the operator left off.
const SESSION_FILE: &str = "rms_user.json";

pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?
        .to_string();
    Ok(password_hash)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hashed)
        .map_err(|e| Error::Internal(format!("Stored password hash is invalid: {}", e)))?;
    let ok = Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(ok)
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<EntityStore>,
    session_path: PathBuf,
}

impl AuthService {
    pub fn new(store: Arc<EntityStore>) -> Self {
        let config = get_config();
        Self {
            store,
            session_path: PathBuf::from(&config.session_dir).join(SESSION_FILE),
        }
    }

    /// Both an unknown email and a wrong password produce the same message so
    /// the response does not reveal which accounts exist.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<(SessionUser, String)> {
        let user = self
            .store
            .user_by_email(email)
            .ok_or_else(|| Error::Unauthorized("Invalid email or password".into()))?;
        if !verify_password(password, &user.password_hash)? {
            return Err(Error::Unauthorized("Invalid email or password".into()));
        }
        let session = SessionUser::from(&user);
        self.persist_session(&session)?;
        let token = self.issue_token(&user)?;
        Ok((session, token))
    }

    /// Registration also creates a candidate row tied to the new account, the
    /// same way an applicant entering through the careers page would appear.
    pub fn sign_up(&self, payload: RegisterPayload) -> Result<(SessionUser, String)> {
        let user = User {
            id: Uuid::new_v4(),
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone,
            role: "User".to_string(),
            department: "General".to_string(),
            avatar: String::new(),
            password_hash: hash_password(&payload.password)?,
        };
        let user = self.store.insert_user(user)?;
        self.store.create_applicant(&user)?;

        let session = SessionUser::from(&user);
        self.persist_session(&session)?;
        let token = self.issue_token(&user)?;
        Ok((session, token))
    }

    pub fn sign_out(&self) -> Result<()> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)?;
        }
        Ok(())
    }

    /// Reads the persisted session back, if any. A corrupt file is treated as
    /// no session rather than a startup failure.
    pub fn restore_session(&self) -> Option<SessionUser> {
        let raw = fs::read_to_string(&self.session_path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn current_user(&self, claims: &Claims) -> Result<User> {
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| Error::Unauthorized("Invalid token subject".into()))?;
        self.store
            .user_by_id(id)
            .ok_or_else(|| Error::Unauthorized("Unknown user".into()))
    }

    fn issue_token(&self, user: &User) -> Result<String> {
        let config = get_config();
        let exp = Utc::now() + Duration::hours(config.token_ttl_hours);
        let claims = Claims {
            sub: user.id.to_string(),
            exp: exp.timestamp() as usize,
            role: Some(user.role.clone()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .map_err(|e| Error::Internal(format!("Failed to issue token: {}", e)))
    }

    fn persist_session(&self, session: &SessionUser) -> Result<()> {
        if let Some(dir) = self.session_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.session_path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("admin123").unwrap();
        assert!(verify_password("admin123", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("password123").unwrap();
        let b = hash_password("password123").unwrap();
        assert_ne!(a, b);
    }
}
