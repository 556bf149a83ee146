use crate::domain::errors::DomainError;

const CNT_ARTICLE_NAME: &str = "articles_name_key";
const CNT_ARTICLE_CONTENT: &str = "articles_content_not_empty_chk";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_NAME => {
                        DomainError::Validation("article name already exists".into())
                    }
                    CNT_ARTICLE_CONTENT => {
                        DomainError::Validation("content cannot be empty".into())
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DomainError::Persistence(format!("storage unavailable: {err}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
