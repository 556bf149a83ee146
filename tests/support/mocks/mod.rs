// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;
pub mod time;
pub mod user_repo;

// 時刻関連
pub use time::{FixedClock, SteppingClock, fixed_now};

// セキュリティ関連
pub use security::{DummyPasswordHasher, FailingPasswordHasher};

// 記事ストア
pub use article_repos::InMemoryArticleStore;

// ユーザーリポジトリ
pub use user_repo::InMemoryUserRepo;
