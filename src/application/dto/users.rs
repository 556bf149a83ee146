use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::serde_time;

/// Public view of a user record. The password hash is never exposed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub age: Option<u16>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            first_name: user.profile.first_name.to_string(),
            last_name: user.profile.last_name.to_string(),
            email: user.email.to_string(),
            username: user.username.to_string(),
            role: user.role,
            age: user.profile.age,
            gender: user.profile.gender,
            contact_number: user.profile.contact_number,
            address: user.profile.address,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}
