use super::ArticleCommandService;
use crate::{
    application::{dto::CommentsDto, error::ApplicationResult},
    domain::article::{ArticleId, Comment, ReaderId},
};

pub struct AddCommentCommand {
    pub article_id: String,
    pub user_id: String,
    pub username: String,
    pub comment: String,
}

impl ArticleCommandService {
    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentsDto> {
        let id: ArticleId = command.article_id.parse()?;
        let now = self.clock.now();
        let comment = Comment::new(
            ReaderId::new(command.user_id)?,
            command.username,
            command.comment,
            now,
        )?;

        let comments = self.write_repo.append_comment(id, comment, now).await?;
        tracing::debug!(article_id = %id, comments = comments.len(), "comment added");
        Ok(comments.into())
    }
}
