// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Produces a self-describing hash string (PHC format) for storage.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}
