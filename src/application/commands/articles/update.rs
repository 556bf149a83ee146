use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleName, ArticleTitle, ArticleUpdate},
};

/// Editable fields only. Engagement data has no representation here, so an
/// update can never desynchronise the derived counters.
pub struct UpdateArticleCommand {
    pub id: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<Vec<String>>,
    pub image_url: Option<Option<String>>,
    pub user_id: Option<Option<String>>,
    pub username: Option<Option<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            name,
            title,
            content,
            image_url,
            user_id,
            username,
        } = command;

        let id: ArticleId = id.parse()?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("Article not found"));
        }

        let mut update = ArticleUpdate::new(id, self.clock.now());

        if let Some(name) = name {
            let name = ArticleName::new(name)?;
            self.ensure_name_available(&name, Some(id)).await?;
            update = update.with_name(name);
        }
        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(image_url) = image_url {
            update = update.with_image_url(image_url);
        }
        if let Some(user_id) = user_id {
            update = update.with_user_id(user_id);
        }
        if let Some(username) = username {
            update = update.with_username(username);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
