// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// JSON body extractor whose rejections use the crate's error envelope.
///
/// Syntax errors, missing or unknown fields and a wrong content type all
/// surface as `400 Bad Request` with a `message` field instead of axum's
/// plain-text rejections.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::from_error(ApplicationError::validation(
                rejection.body_text(),
            ))),
        }
    }
}
