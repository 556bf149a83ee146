use crate::domain::article::entity::{Article, ArticleUpdate, Comment, LikeState, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleName, ReaderId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Mutations on the article store.
///
/// Every method addressing an existing article fails with
/// `DomainError::NotFound` when `id` does not resolve. Engagement mutations
/// must be atomic per article: two concurrent calls on the same id may not
/// lose each other's effect.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn toggle_active(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn toggle_like(
        &self,
        id: ArticleId,
        reader: &ReaderId,
        now: DateTime<Utc>,
    ) -> DomainResult<LikeState>;
    /// Append `comment` and return the full list after the append.
    async fn append_comment(
        &self,
        id: ArticleId,
        comment: Comment,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Comment>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Lookup by name regardless of the active flag.
    async fn find_by_name(&self, name: &ArticleName) -> DomainResult<Option<Article>>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
}
