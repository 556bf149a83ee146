// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AddCommentCommand, CreateArticleCommand, DeleteArticleCommand, ToggleArticleStatusCommand,
        ToggleLikeCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, CommentsDto, LikeStateDto},
    queries::articles::{GetArticleByNameQuery, GetCommentsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Payload of `POST /articles`. Engagement fields are not accepted.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateArticleRequest {
    pub name: String,
    pub title: String,
    pub content: Vec<String>,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
}

/// Payload of `PUT /articles/{id}`. Absent fields are left untouched while
/// `null` on `imageUrl`, `userId` or `username` clears it. Any other key, including
/// `likes`, `likedBy`, `comments` and `commentsList`, is rejected.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateArticleRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub content: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub user_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub username: Option<Option<String>>,
}

// Distinguishes an explicit `null` from an absent key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub user_id: String,
    pub username: String,
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "Every article, active or not.", body = ArticleListResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleListResponse>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

#[utoipa::path(
    get,
    path = "/articles/{name}",
    params(("name" = String, Path, description = "Unique article name")),
    responses(
        (status = 200, description = "The active article with this name.", body = ArticleResponse),
        (status = 404, description = "No active article has this name.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_name(
    Extension(state): Extension<HttpState>,
    Path(name): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article_by_name(GetArticleByNameQuery { name })
        .await
        .into_http()?;

    Ok(Json(ArticleResponse { article }))
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Missing field or duplicate name.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        name: payload.name,
        title: payload.title,
        content: payload.content,
        image_url: payload.image_url,
        user_id: payload.user_id,
        username: payload.username,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article after the update.", body = ArticleDto),
        (status = 400, description = "Invalid field value or rejected field.", body = ErrorResponse),
        (status = 404, description = "Unknown article id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        name: payload.name,
        title: payload.title,
        content: payload.content,
        image_url: payload.image_url,
        user_id: payload.user_id,
        username: payload.username,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/articles/{id}/toggle",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with `isActive` flipped.", body = ArticleDto),
        (status = 404, description = "Unknown article id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn toggle_article_status(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .toggle_article_status(ToggleArticleStatusCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = MessageResponse),
        (status = 404, description = "Unknown article id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "Article deleted successfully".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/articles/{id}/like",
    params(("id" = String, Path, description = "Article id")),
    request_body = ToggleLikeRequest,
    responses(
        (status = 200, description = "Like state after the toggle.", body = LikeStateDto),
        (status = 404, description = "Unknown article id.", body = ErrorResponse)
    ),
    tag = "Engagement"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ToggleLikeRequest>,
) -> HttpResult<Json<LikeStateDto>> {
    let command = ToggleLikeCommand {
        article_id: id,
        user_id: payload.user_id,
    };

    state
        .services
        .article_commands
        .toggle_like(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles/{id}/comment",
    params(("id" = String, Path, description = "Article id")),
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "All comments after the append.", body = CommentsDto),
        (status = 404, description = "Unknown article id.", body = ErrorResponse)
    ),
    tag = "Engagement"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AddCommentRequest>,
) -> HttpResult<Json<CommentsDto>> {
    let command = AddCommentCommand {
        article_id: id,
        user_id: payload.user_id,
        username: payload.username,
        comment: payload.comment,
    };

    state
        .services
        .article_commands
        .add_comment(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}/comments",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments in insertion order.", body = CommentsDto),
        (status = 404, description = "Unknown article id.", body = ErrorResponse)
    ),
    tag = "Engagement"
)]
pub async fn get_comments(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<CommentsDto>> {
    state
        .services
        .article_queries
        .get_comments(GetCommentsQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}
