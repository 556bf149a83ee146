// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    Email, PasswordHash, PersonName, Role, UserId, Username,
};
use chrono::{DateTime, Utc};

/// Personal details carried by a user record. Only the names are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub age: Option<u16>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub profile: UserProfile,
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub profile: UserProfile,
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        profile: UserProfile,
        email: Email,
        username: Username,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            profile,
            email,
            username,
            password_hash,
            role,
            is_active: true,
            created_at,
        }
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            profile: self.profile,
            email: self.email,
            username: self.username,
            password_hash: self.password_hash,
            role: self.role,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}
