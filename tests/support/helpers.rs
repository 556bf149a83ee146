// tests/support/helpers.rs
use super::mocks::{InMemoryArticleStore, SteppingClock};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use kiji_core::application::{ports::time::Clock, services::ApplicationServices};
use kiji_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kiji_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// インメモリストアと 1 秒ずつ進む時計でサービスを組み立てる
pub fn build_test_state(store: Arc<InMemoryArticleStore>) -> HttpState {
    let write: Arc<dyn ArticleWriteRepository> = store.clone();
    let read: Arc<dyn ArticleReadRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());

    HttpState {
        services: Arc::new(ApplicationServices::new(write, read, clock)),
    }
}

/// テスト用ルーターとその背後のストアを返す
pub fn make_test_router() -> (Router, Arc<InMemoryArticleStore>) {
    let store = Arc::new(InMemoryArticleStore::new());
    let router = build_router(build_test_state(Arc::clone(&store)), &[]);
    (router, store)
}

/// JSON ボディ付きリクエストを送り、ステータスとデコード済みボディを返す
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, json)
}

/// 記事を作成し、そのレスポンスボディを返す
pub async fn create_article(app: &Router, name: &str) -> Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/articles",
        Some(serde_json::json!({ "name": name, "title": "T", "content": ["p1"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

/// レスポンスボディから記事 ID を取り出す
pub fn article_id(article: &Value) -> String {
    article["id"].as_str().expect("article id").to_string()
}

/// ErrorResponse 形式であること、期待するステータスと error 文字列であることを検証する
pub fn assert_error_body(
    status: StatusCode,
    body: &Value,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(status, expected_status, "unexpected body: {body}");
    let error = body.get("error").and_then(Value::as_str).unwrap_or("");
    let message = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(error, expected_error, "unexpected error field: {error}");
    assert!(!message.is_empty(), "expected non-empty message field in ErrorResponse");
}
