// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleName, ArticleReadRepository, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, Comment, Engagement, LikeState, NewArticle, ReaderId,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "id, name, title, content, image_url, user_id, username, \
     liked_by, comments_list, is_active, created_at, updated_at";

fn article_not_found() -> DomainError {
    DomainError::NotFound("Article not found".into())
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Shape of one element of the `comments_list` JSONB array.
#[derive(Debug, Serialize, Deserialize)]
struct CommentRecord {
    user_id: String,
    username: String,
    comment: String,
    created_at: DateTime<Utc>,
}

impl From<Comment> for CommentRecord {
    fn from(comment: Comment) -> Self {
        Self {
            user_id: comment.user_id.into_inner(),
            username: comment.username,
            comment: comment.comment,
            created_at: comment.created_at,
        }
    }
}

impl TryFrom<CommentRecord> for Comment {
    type Error = DomainError;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        Self::new(
            ReaderId::new(record.user_id)?,
            record.username,
            record.comment,
            record.created_at,
        )
    }
}

fn comments_from_records(records: Vec<CommentRecord>) -> DomainResult<Vec<Comment>> {
    records.into_iter().map(Comment::try_from).collect()
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    name: String,
    title: String,
    content: Vec<String>,
    image_url: Option<String>,
    user_id: Option<String>,
    username: Option<String>,
    liked_by: Vec<String>,
    comments_list: Json<Vec<CommentRecord>>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let liked_by = row
            .liked_by
            .into_iter()
            .map(ReaderId::new)
            .collect::<DomainResult<Vec<_>>>()?;
        let comments = comments_from_records(row.comments_list.0)?;

        Ok(Self {
            id: ArticleId::from_uuid(row.id),
            name: ArticleName::new(row.name)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            image_url: row.image_url,
            user_id: row.user_id,
            username: row.username,
            engagement: Engagement::from_parts(liked_by, comments),
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            name,
            title,
            content,
            image_url,
            user_id,
            username,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (name, title, content, image_url, user_id, username, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(name.into_inner())
            .bind(title.into_inner())
            .bind(content.into_inner())
            .bind(image_url)
            .bind(user_id)
            .bind(username)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            name,
            title,
            content,
            image_url,
            user_id,
            username,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(image_url) = image_url {
            builder.push(", image_url = ");
            builder.push_bind(image_url);
        }

        if let Some(user_id) = user_id {
            builder.push(", user_id = ");
            builder.push_bind(user_id);
        }

        if let Some(username) = username {
            builder.push(", username = ");
            builder.push_bind(username);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(article_not_found)?;

        Article::try_from(row)
    }

    async fn toggle_active(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article> {
        let sql = format!(
            "UPDATE articles SET is_active = NOT is_active, updated_at = $2
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(Uuid::from(id))
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(article_not_found)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(article_not_found());
        }
        Ok(())
    }

    // Membership test and flip happen inside one UPDATE, so the row lock
    // serialises concurrent toggles on the same article.
    async fn toggle_like(
        &self,
        id: ArticleId,
        reader: &ReaderId,
        now: DateTime<Utc>,
    ) -> DomainResult<LikeState> {
        let (likes, is_liked) = sqlx::query_as::<_, (i64, bool)>(
            "UPDATE articles
             SET liked_by = CASE
                     WHEN $2::TEXT = ANY(liked_by) THEN array_remove(liked_by, $2::TEXT)
                     ELSE array_append(liked_by, $2::TEXT)
                 END,
                 updated_at = $3
             WHERE id = $1
             RETURNING cardinality(liked_by)::BIGINT, ($2::TEXT = ANY(liked_by))",
        )
        .bind(Uuid::from(id))
        .bind(reader.as_str())
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(article_not_found)?;

        let likes = usize::try_from(likes)
            .map_err(|_| DomainError::Persistence(format!("invalid like count {likes}")))?;
        Ok(LikeState { likes, is_liked })
    }

    async fn append_comment(
        &self,
        id: ArticleId,
        comment: Comment,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Comment>> {
        let record = CommentRecord::from(comment);
        let Json(records) = sqlx::query_scalar::<_, Json<Vec<CommentRecord>>>(
            "UPDATE articles
             SET comments_list = comments_list || jsonb_build_array($2::JSONB),
                 updated_at = $3
             WHERE id = $1
             RETURNING comments_list",
        )
        .bind(Uuid::from(id))
        .bind(Json(record))
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(article_not_found)?;

        comments_from_records(records)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_name(&self, name: &ArticleName) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE name = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
