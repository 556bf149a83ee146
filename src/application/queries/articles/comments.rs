use super::ArticleQueryService;
use crate::{
    application::{
        dto::CommentsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetCommentsQuery {
    pub article_id: String,
}

impl ArticleQueryService {
    pub async fn get_comments(&self, query: GetCommentsQuery) -> ApplicationResult<CommentsDto> {
        let id: ArticleId = query.article_id.parse()?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        Ok(article.engagement.comments().to_vec().into())
    }
}
