use std::sync::Arc;

mod support;

use kiji_core::application::commands::users::{CreateUserCommand, UserCommandService};
use kiji_core::application::error::ApplicationError;
use kiji_core::domain::user::Role;
use support::{DummyPasswordHasher, FailingPasswordHasher, FixedClock, InMemoryUserRepo, fixed_now};

fn command(email: &str, username: &str, password: &str) -> CreateUserCommand {
    CreateUserCommand {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: email.into(),
        username: username.into(),
        password: password.into(),
        role: Role::Admin,
        age: Some(25),
        gender: Some("Male".into()),
        contact_number: Some("09123456789".into()),
        address: Some("123 Main St".into()),
    }
}

fn service(repo: &Arc<InMemoryUserRepo>) -> UserCommandService {
    UserCommandService::new(
        repo.clone(),
        Arc::new(DummyPasswordHasher),
        Arc::new(FixedClock),
    )
}

/// パスワードはハッシュ化されて保存され、DTO には含まれない
#[tokio::test]
async fn create_user_stores_hash_and_returns_profile() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let dto = service(&repo)
        .create_user(command("John@Example.com", "johndoe", "Sup3r-secret!"))
        .await
        .expect("user should be created");

    assert_eq!(dto.email, "john@example.com");
    assert_eq!(dto.username, "johndoe");
    assert_eq!(dto.role, Role::Admin);
    assert_eq!(dto.age, Some(25));
    assert!(dto.is_active);
    assert_eq!(dto.created_at, fixed_now());

    let stored = repo.users();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].password_hash.as_str(), "hashed:Sup3r-secret!");

    let json = serde_json::to_value(&dto).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());
}

/// 同じメールアドレスの二重登録は Conflict
#[tokio::test]
async fn duplicate_email_is_conflict() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let svc = service(&repo);
    svc.create_user(command("john@example.com", "johndoe", "Sup3r-secret!"))
        .await
        .unwrap();

    let err = svc
        .create_user(command("john@example.com", "janedoe", "Sup3r-secret!"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");
    assert_eq!(repo.users().len(), 1);
}

/// 同じユーザー名の二重登録も Conflict
#[tokio::test]
async fn duplicate_username_is_conflict() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let svc = service(&repo);
    svc.create_user(command("john@example.com", "johndoe", "Sup3r-secret!"))
        .await
        .unwrap();

    let err = svc
        .create_user(command("other@example.com", "johndoe", "Sup3r-secret!"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");
}

/// 弱いパスワードは保存前に拒否される
#[tokio::test]
async fn weak_password_is_rejected_before_insert() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let err = service(&repo)
        .create_user(command("john@example.com", "johndoe", "password123"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
    assert!(repo.users().is_empty());
}

/// 不正なメールアドレスはドメイン検証エラー
#[tokio::test]
async fn invalid_email_is_rejected() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let err = service(&repo)
        .create_user(command("not-an-email", "johndoe", "Sup3r-secret!"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(_)), "{err:?}");
}

/// ハッシュ化に失敗した場合は何も保存しない
#[tokio::test]
async fn hasher_failure_leaves_store_untouched() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let svc = UserCommandService::new(
        repo.clone(),
        Arc::new(FailingPasswordHasher),
        Arc::new(FixedClock),
    );

    let err = svc
        .create_user(command("john@example.com", "johndoe", "Sup3r-secret!"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Infrastructure(_)), "{err:?}");
    assert!(repo.users().is_empty());
}
