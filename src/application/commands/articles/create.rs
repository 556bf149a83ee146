// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleName, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub name: String,
    pub title: String,
    pub content: Vec<String>,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let name = ArticleName::new(command.name)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;

        self.ensure_name_available(&name, None).await?;

        let new_article = NewArticle {
            name,
            title,
            content,
            image_url: command.image_url,
            user_id: command.user_id,
            username: command.username,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, name = %created.name, "article created");
        Ok(created.into())
    }
}
