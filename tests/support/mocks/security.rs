// tests/support/mocks/security.rs
use async_trait::async_trait;
use kiji_core::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// 平文に接頭辞を付けるだけのハッシャー
#[derive(Default, Clone)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }
}

/// 常に失敗するハッシャー
#[derive(Default, Clone)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }
}
