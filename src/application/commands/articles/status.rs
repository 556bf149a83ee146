use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ToggleArticleStatusCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn toggle_article_status(
        &self,
        command: ToggleArticleStatusCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id: ArticleId = command.id.parse()?;
        let article = self.write_repo.toggle_active(id, self.clock.now()).await?;
        tracing::info!(article_id = %id, is_active = article.is_active, "article status toggled");
        Ok(article.into())
    }
}
