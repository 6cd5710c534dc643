use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{extractor::json::ApiJsonOrDefault, route::RECEIVED_MESSAGE};

use super::PreferenceSubmission;

pub struct PreferenceReceived;

impl IntoResponse for PreferenceReceived {
    fn into_response(self) -> Response {
        (StatusCode::OK, RECEIVED_MESSAGE).into_response()
    }
}

pub async fn submit_preference(
    ApiJsonOrDefault(preference): ApiJsonOrDefault<PreferenceSubmission>,
) -> PreferenceReceived {
    let PreferenceSubmission {
        user_id,
        styles,
        patterns,
        purposes,
        colors,
    } = preference;

    tracing::info!("Received Data");
    tracing::info!(?user_id, "User ID");
    tracing::info!(?styles, "Styles");
    tracing::info!(?patterns, "Patterns");
    tracing::info!(?purposes, "Purposes");
    tracing::info!(?colors, "Colors");

    PreferenceReceived
}
