// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use kiji_core::domain::errors::{DomainError, DomainResult};
use kiji_core::domain::user::{Email, NewUser, User, UserId, UserRepository, Username};
use std::sync::Mutex;
use uuid::Uuid;

/// メールアドレスとユーザー名の一意制約を持つインメモリユーザーリポジトリ
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email == new_user.email || u.username == new_user.username)
        {
            return Err(DomainError::Conflict("user already exists".into()));
        }
        let user = new_user.into_user(UserId::from_uuid(Uuid::new_v4()));
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == *username).cloned())
    }
}
