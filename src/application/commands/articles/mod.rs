// src/application/commands/articles/mod.rs
mod comment;
mod create;
mod delete;
mod like;
mod service;
mod status;
mod update;

pub use comment::AddCommentCommand;
pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use like::ToggleLikeCommand;
pub use service::ArticleCommandService;
pub use status::ToggleArticleStatusCommand;
pub use update::UpdateArticleCommand;
