// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{ArticleId, ArticleName, ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    /// Fail when another article already uses `name`. The store's unique
    /// constraint remains the final arbiter under concurrent writes.
    pub(super) async fn ensure_name_available(
        &self,
        name: &ArticleName,
        ignore_id: Option<ArticleId>,
    ) -> ApplicationResult<()> {
        match self.read_repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != ignore_id => Err(
                ApplicationError::validation(format!("article name '{name}' already exists")),
            ),
            _ => Ok(()),
        }
    }
}
