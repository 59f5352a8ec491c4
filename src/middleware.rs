use std::time::Duration;

use axum::{
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::ApiError;

/// Bounds every request by the configured deadline.
pub async fn request_deadline<B>(
    State(deadline): State<Duration>,
    request: Request<B>,
    next: Next<B>,
) -> Response {
    let path = request.uri().path().to_owned();
    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(%path, ?deadline, "request deadline exceeded");
            ApiError::Timeout.into_response()
        }
    }
}
