use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;

use crate::error::{ApiError, ErrorVerbosityProvider, InternalServerError};

/// Middlware to trace the response status and body.
///
/// This is an expensive middleware, since it buffers the entire response body.
/// Bodies that are not valid UTF-8 are only traced by their length.
pub async fn trace_response_body<S: ErrorVerbosityProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let res = next.run(req).await;

    let (parts, body) = res.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|err| InternalServerError::from_generic_error(state.error_verbosity(), err))?
        .to_bytes();

    match std::str::from_utf8(&bytes) {
        Ok(body) if !body.is_empty() => {
            tracing::trace!(status = %parts.status, %body, "Response body");
        }
        Ok(_) => tracing::trace!(status = %parts.status, "Empty response body"),
        Err(_) => tracing::trace!(status = %parts.status, len = bytes.len(), "Binary response body"),
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
