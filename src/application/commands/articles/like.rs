use super::ArticleCommandService;
use crate::{
    application::{dto::LikeStateDto, error::ApplicationResult},
    domain::article::{ArticleId, ReaderId},
};

pub struct ToggleLikeCommand {
    pub article_id: String,
    pub user_id: String,
}

impl ArticleCommandService {
    /// Like the article for `user_id`, or remove the like if it is already
    /// there. Only the engagement data is written.
    pub async fn toggle_like(&self, command: ToggleLikeCommand) -> ApplicationResult<LikeStateDto> {
        let id: ArticleId = command.article_id.parse()?;
        let reader = ReaderId::new(command.user_id)?;

        let state = self
            .write_repo
            .toggle_like(id, &reader, self.clock.now())
            .await?;
        tracing::debug!(
            article_id = %id,
            user_id = %reader,
            likes = state.likes,
            is_liked = state.is_liked,
            "like toggled"
        );
        Ok(state.into())
    }
}
