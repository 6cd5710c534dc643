use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Json as AxumJson, Request},
    http::{header, HeaderMap},
};
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::{ApiError, BodyError, ErrorVerbosityProvider, InternalServerError};

/// A Wrapper around [`axum::extract::Json`] that rejects with an [`ApiError`].
///
/// Every rejection of the inner extractor (missing content type, syntax error,
/// shape mismatch) becomes a [`BodyError`] with [`axum::http::StatusCode::BAD_REQUEST`],
/// so handlers only ever see a well formed `T`.
pub struct ApiJson<T>(pub T);

impl<T: JsonSchema> ApiJson<T> {
    fn rejection<S: ErrorVerbosityProvider>(rejection: JsonRejection, state: &S) -> ApiError {
        let verbosity = state.error_verbosity();

        if !verbosity.should_generate_error_reason() {
            return BodyError::new(verbosity, String::new(), String::new()).into();
        }

        match serde_yaml::to_string(&schema_for!(T)) {
            Ok(body_expected_schema) => {
                BodyError::new(verbosity, rejection.body_text(), body_expected_schema).into()
            }
            Err(err) => InternalServerError::from_generic_error(verbosity, err).into(),
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "json_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(json)) => {
                tracing::trace!(?json, "Extracted");

                Ok(ApiJson(json))
            }
            Err(rejection) => {
                tracing::warn!(
                    status = %rejection.status(),
                    reason = %rejection.body_text(),
                    "Rejection"
                );

                Err(Self::rejection(rejection, state))
            }
        }
    }
}

/// Like [`ApiJson`], but a request whose content type is not JSON yields `T::default()`.
///
/// A body announced as JSON still has to parse.
pub struct ApiJsonOrDefault<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJsonOrDefault<T>
where
    T: DeserializeOwned + JsonSchema + Debug + Default + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            tracing::debug!(
                content_type = ?req.headers().get(header::CONTENT_TYPE),
                "Not JSON, using defaults"
            );

            return Ok(ApiJsonOrDefault(T::default()));
        }

        let ApiJson(json) = ApiJson::<T>::from_request(req, state).await?;

        Ok(ApiJsonOrDefault(json))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence.ends_with("+json")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(content_type) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        headers
    }

    #[test]
    fn json_content_types_are_recognized() {
        assert!(has_json_content_type(&headers(Some("application/json"))));
        assert!(has_json_content_type(&headers(Some(
            "Application/JSON; charset=utf-8"
        ))));
        assert!(has_json_content_type(&headers(Some("application/merge-patch+json"))));
    }

    #[test]
    fn other_content_types_are_not_json() {
        assert!(!has_json_content_type(&headers(None)));
        assert!(!has_json_content_type(&headers(Some("text/plain"))));
        assert!(!has_json_content_type(&headers(Some(
            "application/x-www-form-urlencoded"
        ))));
    }
}
