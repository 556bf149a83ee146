// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, PersonName, Role, User, UserId, UserProfile, UserRepository,
    Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, first_name, last_name, age, gender, contact_number, address, \
     email, username, password_hash, role, is_active, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    age: Option<i32>,
    gender: Option<String>,
    contact_number: Option<String>,
    address: Option<String>,
    email: String,
    username: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let age = row
            .age
            .map(u16::try_from)
            .transpose()
            .map_err(|_| DomainError::Persistence("stored age out of range".into()))?;

        Ok(Self {
            id: UserId::from_uuid(row.id),
            profile: UserProfile {
                first_name: PersonName::new(row.first_name)?,
                last_name: PersonName::new(row.last_name)?,
                age,
                gender: row.gender,
                contact_number: row.contact_number,
                address: row.address,
            },
            email: Email::new(row.email)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            profile,
            email,
            username,
            password_hash,
            role,
            is_active,
            created_at,
        } = new_user;

        let sql = format!(
            "INSERT INTO users (first_name, last_name, age, gender, contact_number, address,
                                email, username, password_hash, role, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(profile.first_name.as_str())
            .bind(profile.last_name.as_str())
            .bind(profile.age.map(i32::from))
            .bind(profile.gender)
            .bind(profile.contact_number)
            .bind(profile.address)
            .bind(email.as_str())
            .bind(username.as_str())
            .bind(password_hash.as_str())
            .bind(role.as_str())
            .bind(is_active)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}
