// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleName, ArticleTitle, ReaderId,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// A comment embedded in an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub user_id: ReaderId,
    pub username: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        user_id: ReaderId,
        username: impl Into<String>,
        comment: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let username = username.into();
        let comment = comment.into();
        if username.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if comment.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self {
            user_id,
            username,
            comment,
            created_at,
        })
    }
}

/// Outcome of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub likes: usize,
    pub is_liked: bool,
}

/// Likes and comments of an article.
///
/// The counters exposed to clients are always derived from the collections;
/// there is no separate counter that could drift from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engagement {
    liked_by: Vec<ReaderId>,
    comments: Vec<Comment>,
}

impl Engagement {
    /// Rebuild engagement from stored collections. Duplicate likers collapse
    /// into their first occurrence.
    pub fn from_parts(liked_by: Vec<ReaderId>, comments: Vec<Comment>) -> Self {
        let mut engagement = Self {
            liked_by: Vec::with_capacity(liked_by.len()),
            comments,
        };
        for reader in liked_by {
            if !engagement.is_liked_by(&reader) {
                engagement.liked_by.push(reader);
            }
        }
        engagement
    }

    pub fn likes(&self) -> usize {
        self.liked_by.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn liked_by(&self) -> &[ReaderId] {
        &self.liked_by
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_liked_by(&self, reader: &ReaderId) -> bool {
        self.liked_by.contains(reader)
    }

    pub fn toggle_like(&mut self, reader: ReaderId) -> LikeState {
        let is_liked = match self.liked_by.iter().position(|r| r == &reader) {
            Some(index) => {
                self.liked_by.remove(index);
                false
            }
            None => {
                self.liked_by.push(reader);
                true
            }
        };
        LikeState {
            likes: self.likes(),
            is_liked,
        }
    }

    pub fn add_comment(&mut self, comment: Comment) -> usize {
        self.comments.push(comment);
        self.comment_count()
    }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub name: ArticleName,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub engagement: Engagement,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn toggle_active(&mut self, now: DateTime<Utc>) {
        self.is_active = !self.is_active;
        self.updated_at = now;
    }

    pub fn toggle_like(&mut self, reader: ReaderId, now: DateTime<Utc>) -> LikeState {
        let state = self.engagement.toggle_like(reader);
        self.updated_at = now;
        state
    }

    pub fn add_comment(&mut self, comment: Comment, now: DateTime<Utc>) -> usize {
        let count = self.engagement.add_comment(comment);
        self.updated_at = now;
        count
    }

    /// Apply the supplied fields of `update`, leaving engagement untouched.
    pub fn apply(&mut self, update: ArticleUpdate) {
        let ArticleUpdate {
            id: _,
            name,
            title,
            content,
            image_url,
            user_id,
            username,
            updated_at,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(user_id) = user_id {
            self.user_id = user_id;
        }
        if let Some(username) = username {
            self.username = username;
        }
        self.updated_at = updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub name: ArticleName,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    /// Materialise the article a store would persist for this request.
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            name: self.name,
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            user_id: self.user_id,
            username: self.username,
            engagement: Engagement::default(),
            is_active: true,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Partial replacement of the editable article fields.
///
/// The optional fields are doubly optional: `Some(None)` clears the stored
/// value.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub name: Option<ArticleName>,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub image_url: Option<Option<String>>,
    pub user_id: Option<Option<String>>,
    pub username: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            title: None,
            content: None,
            image_url: None,
            user_id: None,
            username: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: ArticleName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = Some(username);
        self
    }
}
