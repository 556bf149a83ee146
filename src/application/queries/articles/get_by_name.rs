use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleName,
};

pub struct GetArticleByNameQuery {
    pub name: String,
}

impl ArticleQueryService {
    /// Inactive articles are invisible to name lookup and report not found.
    pub async fn get_article_by_name(
        &self,
        query: GetArticleByNameQuery,
    ) -> ApplicationResult<ArticleDto> {
        let name = ArticleName::new(query.name)?;
        let article = self
            .read_repo
            .find_by_name(&name)
            .await?
            .filter(|article| article.is_active)
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        Ok(article.into())
    }
}
