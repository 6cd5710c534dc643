use axum::Router;

use crate::state::ApiState;

pub mod model;
pub mod preference;

/// Confirmation sent by both intake routes.
pub const RECEIVED_MESSAGE: &str = "Data received successfully";

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .merge(preference::app::app())
        .merge(model::app::app())
}
