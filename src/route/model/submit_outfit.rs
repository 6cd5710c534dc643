use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    extractor::{json::ApiJson, with_raw::WithRaw},
    route::RECEIVED_MESSAGE,
    state::ApiState,
};

use super::{GarmentDescriptor, OutfitSubmission};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedOutfit {
    pub user_id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outfit_name: Option<Value>,
    pub top: GarmentDescriptor,
    pub bottom: GarmentDescriptor,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitReceived {
    pub message: &'static str,
    pub received_data: ReceivedOutfit,
}

impl From<OutfitSubmission> for OutfitReceived {
    fn from(outfit: OutfitSubmission) -> Self {
        OutfitReceived {
            message: RECEIVED_MESSAGE,
            received_data: ReceivedOutfit {
                user_id: outfit.user_id,
                outfit_name: outfit.outfit_name,
                top: outfit.top,
                bottom: outfit.bottom,
            },
        }
    }
}

impl IntoResponse for OutfitReceived {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

fn log_garment(label: &'static str, garment: &GarmentDescriptor) {
    tracing::info!(image_url = ?garment.image_url, "{label} Image URL");
    tracing::debug!(style = ?garment.style, size = ?garment.size, "{label} Style and Size");
}

fn log_outfit(raw: &Value, outfit: &OutfitSubmission) {
    tracing::info!("=== Received Outfit Data ===");
    tracing::info!(user_id = %outfit.user_id, "User ID");
    tracing::info!(outfit_name = ?outfit.outfit_name, "Outfit Name");
    log_garment("Top", &outfit.top);
    log_garment("Bottom", &outfit.bottom);

    match serde_json::to_string_pretty(raw) {
        Ok(body) => tracing::info!("Complete Request Body:\n{body}"),
        Err(err) => tracing::warn!(%err, "Request body could not be printed"),
    }

    tracing::info!("============================");
}

/// Logs the outfit, schedules the upload for its user and echoes it back.
///
/// The response is sent right away; the upload runs later on its own.
pub async fn submit_outfit(
    State(state): State<ApiState>,
    ApiJson(WithRaw { raw, typed: outfit }): ApiJson<WithRaw<OutfitSubmission>>,
) -> OutfitReceived {
    log_outfit(&raw, &outfit);

    state.uploads().schedule(outfit.user_id_argument());
    tracing::debug!(delay = ?state.uploads().delay(), "Upload scheduled");

    OutfitReceived::from(outfit)
}
