use axum::{routing::post, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route(
        "/preference",
        post(super::submit_preference::submit_preference),
    )
}
