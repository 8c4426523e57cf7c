use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub department: String,
    pub avatar: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// The normalized record persisted to the session file and returned to
/// clients after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub avatar: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
            avatar: user.avatar.clone(),
        }
    }
}
