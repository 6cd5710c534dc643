use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, ErrorVerbosityProvider, MethodNotAllowedError};

/// Middleware to map axum's `MethodNotAllowed` response to our [`ApiError`].
///
/// The `Allow` header computed by the router is carried over.
pub async fn method_not_allowed<S: ErrorVerbosityProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Response {
    let res = next.run(req).await;

    if res.status() != StatusCode::METHOD_NOT_ALLOWED {
        return res;
    }

    let allow = res.headers().get(header::ALLOW).cloned();
    tracing::debug!(?allow, "Method not allowed");

    let mut res =
        ApiError::from(MethodNotAllowedError::new(state.error_verbosity())).into_response();

    if let Some(allow) = allow {
        res.headers_mut().insert(header::ALLOW, allow);
    }

    res
}
