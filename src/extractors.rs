//! Extractors that fold axum's own rejections into [`ApiError`], so every
//! failed request answers with the same `{msg}` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query};
use axum::http::{request::Parts, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::validation::parse_id;

/// The single numeric id in a route such as `/api/articles/:article_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

#[axum::async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "unreadable path parameter");
                ApiError::MalformedInput
            })?;
        parse_id(&raw).map(PathId)
    }
}

pub struct ValidQuery<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ValidQuery(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable query string");
                Err(ApiError::MalformedInput)
            }
        }
    }
}

pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<S, B, T> FromRequest<S, B> for ValidJson<T>
where
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable json body");
                Err(ApiError::MalformedInput)
            }
        }
    }
}
