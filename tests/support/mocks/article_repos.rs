// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kiji_core::domain::article::{
    Article, ArticleId, ArticleName, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, Comment, LikeState, NewArticle, ReaderId,
};
use kiji_core::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;
use uuid::Uuid;

/// 読み書き両方のリポジトリを兼ねるインメモリ記事ストア。
/// 挿入順を保持し、名前の一意制約を PostgreSQL 実装と同じく検証エラーで返す。
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
}

fn not_found() -> DomainError {
    DomainError::NotFound("Article not found".into())
}

fn duplicate_name(name: &ArticleName) -> DomainError {
    DomainError::Validation(format!("article name '{name}' already exists"))
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 格納済みの記事をそのまま返す（テストでの検証用）
    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    fn with_article<T>(
        &self,
        id: ArticleId,
        f: impl FnOnce(&mut Article) -> T,
    ) -> DomainResult<T> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(not_found)?;
        Ok(f(article))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|existing| existing.name == article.name) {
            return Err(duplicate_name(&article.name));
        }
        let stored = article.into_article(ArticleId::from_uuid(Uuid::new_v4()));
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(name) = &update.name {
            if articles
                .iter()
                .any(|existing| existing.name == *name && existing.id != update.id)
            {
                return Err(duplicate_name(name));
            }
        }
        let article = articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(not_found)?;
        article.apply(update);
        Ok(article.clone())
    }

    async fn toggle_active(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article> {
        self.with_article(id, |article| {
            article.toggle_active(now);
            article.clone()
        })
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|article| article.id != id);
        if articles.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn toggle_like(
        &self,
        id: ArticleId,
        reader: &ReaderId,
        now: DateTime<Utc>,
    ) -> DomainResult<LikeState> {
        self.with_article(id, |article| article.toggle_like(reader.clone(), now))
    }

    async fn append_comment(
        &self,
        id: ArticleId,
        comment: Comment,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Comment>> {
        self.with_article(id, |article| {
            article.add_comment(comment, now);
            article.engagement.comments().to_vec()
        })
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|article| article.id == id).cloned())
    }

    async fn find_by_name(&self, name: &ArticleName) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|article| article.name == *name).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.lock().unwrap().clone())
    }
}
