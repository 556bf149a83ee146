use crate::domain::article::{Article, Comment, LikeState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub content: Vec<String>,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    /// Always the length of `likedBy`.
    pub likes: usize,
    pub liked_by: Vec<String>,
    /// Always the length of `commentsList`.
    pub comments: usize,
    pub comments_list: Vec<CommentDto>,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let likes = article.engagement.likes();
        let comments = article.engagement.comment_count();
        Self {
            id: article.id.into(),
            name: article.name.into_inner(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            image_url: article.image_url,
            user_id: article.user_id,
            username: article.username,
            likes,
            liked_by: article
                .engagement
                .liked_by()
                .iter()
                .map(|reader| reader.as_str().to_owned())
                .collect(),
            comments,
            comments_list: article
                .engagement
                .comments()
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
            is_active: article.is_active,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub user_id: String,
    pub username: String,
    pub comment: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            user_id: comment.user_id.into_inner(),
            username: comment.username,
            comment: comment.comment,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentsDto {
    pub comments: usize,
    pub comments_list: Vec<CommentDto>,
}

impl From<Vec<Comment>> for CommentsDto {
    fn from(comments: Vec<Comment>) -> Self {
        Self {
            comments: comments.len(),
            comments_list: comments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeStateDto {
    pub likes: usize,
    pub is_liked: bool,
}

impl From<LikeState> for LikeStateDto {
    fn from(state: LikeState) -> Self {
        Self {
            likes: state.likes,
            is_liked: state.is_liked,
        }
    }
}
