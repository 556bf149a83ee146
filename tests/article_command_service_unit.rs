use std::sync::Arc;

mod support;

use kiji_core::application::commands::articles::{
    AddCommentCommand, ArticleCommandService, CreateArticleCommand, DeleteArticleCommand,
    ToggleArticleStatusCommand, ToggleLikeCommand, UpdateArticleCommand,
};
use kiji_core::application::error::ApplicationError;
use kiji_core::application::queries::articles::{ArticleQueryService, GetArticleByNameQuery};
use kiji_core::domain::errors::DomainError;
use support::{FixedClock, InMemoryArticleStore};

fn services(store: &Arc<InMemoryArticleStore>) -> (ArticleCommandService, ArticleQueryService) {
    let commands = ArticleCommandService::new(store.clone(), store.clone(), Arc::new(FixedClock));
    let queries = ArticleQueryService::new(store.clone());
    (commands, queries)
}

fn create(name: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        name: name.into(),
        title: "T".into(),
        content: vec!["p1".into()],
        image_url: None,
        user_id: Some("author".into()),
        username: Some("alice".into()),
    }
}

fn update(id: &str) -> UpdateArticleCommand {
    UpdateArticleCommand {
        id: id.into(),
        name: None,
        title: None,
        content: None,
        image_url: None,
        user_id: None,
        username: None,
    }
}

/// 作成した記事はストアに保存され、カウンターは 0
#[tokio::test]
async fn create_persists_article_with_empty_engagement() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);

    let dto = commands.create_article(create("a1")).await.unwrap();

    assert_eq!(dto.likes, 0);
    assert_eq!(dto.comments, 0);
    assert!(dto.is_active);
    assert_eq!(store.len(), 1);
}

/// 空白だけの名前は保存前に拒否される
#[tokio::test]
async fn blank_name_is_validation_error() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);

    let err = commands.create_article(create("  ")).await.unwrap_err();

    assert!(
        matches!(err, ApplicationError::Domain(DomainError::Validation(_))),
        "{err:?}"
    );
    assert_eq!(store.len(), 0);
}

/// 重複名は検証エラーで、メッセージに名前を含む
#[tokio::test]
async fn duplicate_name_is_validation_error() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);
    commands.create_article(create("a1")).await.unwrap();

    let err = commands.create_article(create("a1")).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
    assert!(err.to_string().contains("a1"));
}

/// 空の更新は updatedAt 以外を変えない
#[tokio::test]
async fn empty_update_keeps_fields() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);
    let created = commands.create_article(create("a1")).await.unwrap();

    let updated = commands
        .update_article(update(&created.id.to_string()))
        .await
        .unwrap();

    assert_eq!(updated.name, "a1");
    assert_eq!(updated.title, "T");
    assert_eq!(updated.username.as_deref(), Some("alice"));
}

/// 空の本文への更新は拒否される
#[tokio::test]
async fn update_to_empty_content_is_rejected() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);
    let created = commands.create_article(create("a1")).await.unwrap();

    let mut cmd = update(&created.id.to_string());
    cmd.content = Some(vec![]);
    let err = commands.update_article(cmd).await.unwrap_err();

    assert!(
        matches!(err, ApplicationError::Domain(DomainError::Validation(_))),
        "{err:?}"
    );
    assert_eq!(store.snapshot()[0].content.blocks(), ["p1".to_string()]);
}

/// 存在しない ID の更新は、フィールド検証より先に NotFound になる
#[tokio::test]
async fn update_of_unknown_id_is_not_found_before_validation() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);
    commands.create_article(create("a1")).await.unwrap();
    let unknown = uuid::Uuid::new_v4().to_string();

    let mut taken_name = update(&unknown);
    taken_name.name = Some("a1".into());
    let err = commands.update_article(taken_name).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");

    let mut empty_content = update(&unknown);
    empty_content.content = Some(vec![]);
    let err = commands.update_article(empty_content).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
}

/// null 相当の指定で著者情報を消去でき、未指定なら保持される
#[tokio::test]
async fn update_can_clear_author_fields() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);
    let created = commands.create_article(create("a1")).await.unwrap();

    let mut cmd = update(&created.id.to_string());
    cmd.username = Some(None);
    let updated = commands.update_article(cmd).await.unwrap();
    assert!(updated.username.is_none());
    assert_eq!(updated.user_id.as_deref(), Some("author"));

    let mut cmd = update(&created.id.to_string());
    cmd.user_id = Some(None);
    let updated = commands.update_article(cmd).await.unwrap();
    assert!(updated.user_id.is_none());
}

/// 不正な ID 文字列はストアに触れる前に検証エラー
#[tokio::test]
async fn malformed_id_is_validation_error() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);

    let err = commands
        .delete_article(DeleteArticleCommand { id: "42".into() })
        .await
        .unwrap_err();

    assert!(
        matches!(err, ApplicationError::Domain(DomainError::Validation(_))),
        "{err:?}"
    );
}

/// 無効化した記事は名前検索では NotFound、ID 経由のコメント取得は可能
#[tokio::test]
async fn inactive_article_is_hidden_from_name_lookup_only() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, queries) = services(&store);
    let created = commands.create_article(create("a1")).await.unwrap();
    let id = created.id.to_string();

    commands
        .toggle_article_status(ToggleArticleStatusCommand { id: id.clone() })
        .await
        .unwrap();

    let err = queries
        .get_article_by_name(GetArticleByNameQuery { name: "a1".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");

    let listed = queries.list_articles().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!listed[0].is_active);

    let comments = queries
        .get_comments(kiji_core::application::queries::articles::GetCommentsQuery {
            article_id: id,
        })
        .await
        .unwrap();
    assert_eq!(comments.comments, 0);
}

/// いいねとコメントの結果はストアの状態と一致する
#[tokio::test]
async fn engagement_results_match_stored_collections() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);
    let created = commands.create_article(create("a1")).await.unwrap();
    let id = created.id.to_string();

    let state = commands
        .toggle_like(ToggleLikeCommand {
            article_id: id.clone(),
            user_id: "u1".into(),
        })
        .await
        .unwrap();
    assert_eq!((state.likes, state.is_liked), (1, true));

    for text in ["first", "second", "third"] {
        commands
            .add_comment(AddCommentCommand {
                article_id: id.clone(),
                user_id: "u2".into(),
                username: "bob".into(),
                comment: text.into(),
            })
            .await
            .unwrap();
    }

    let stored = &store.snapshot()[0];
    assert_eq!(stored.engagement.likes(), 1);
    assert_eq!(stored.engagement.comment_count(), 3);
    let texts: Vec<&str> = stored
        .engagement
        .comments()
        .iter()
        .map(|c| c.comment.as_str())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

/// 空のユーザー ID ではいいねできない
#[tokio::test]
async fn blank_reader_cannot_like() {
    let store = Arc::new(InMemoryArticleStore::new());
    let (commands, _) = services(&store);
    let created = commands.create_article(create("a1")).await.unwrap();

    let err = commands
        .toggle_like(ToggleLikeCommand {
            article_id: created.id.to_string(),
            user_id: " ".into(),
        })
        .await
        .unwrap_err();

    assert!(
        matches!(err, ApplicationError::Domain(DomainError::Validation(_))),
        "{err:?}"
    );
}
