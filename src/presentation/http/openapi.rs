// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_name,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::toggle_article_status,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::toggle_like,
        crate::presentation::http::controllers::articles::add_comment,
        crate::presentation::http::controllers::articles::get_comments,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::ToggleLikeRequest,
            crate::presentation::http::controllers::articles::AddCommentRequest,
            crate::presentation::http::controllers::articles::ArticleListResponse,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::presentation::http::controllers::articles::MessageResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentsDto,
            crate::application::dto::LikeStateDto
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "Engagement", description = "Likes and comments on articles"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Kiji API",
        description = "Articles backend with likes and comments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URL` (comma separated), falling back
/// to the local listen address.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut urls: Vec<String> = Vec::new();
        if let Ok(value) = env::var("PUBLIC_API_URL") {
            for segment in value.split(',').map(str::trim) {
                let url = segment.trim_end_matches('/');
                if !url.is_empty() && !urls.iter().any(|known| known == url) {
                    urls.push(url.to_string());
                }
            }
        }
        if urls.is_empty() {
            urls.push(DEFAULT_SERVER_URL.to_string());
        }

        openapi.servers = Some(urls.into_iter().map(Server::new).collect());
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the generated document to `OPENAPI_SNAPSHOT_PATH` and returns the
/// path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
