mod comments;
mod get_by_name;
mod list;
mod service;

pub use comments::GetCommentsQuery;
pub use get_by_name::GetArticleByNameQuery;
pub use service::ArticleQueryService;
