use axum::{routing::post, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route("/model", post(super::submit_outfit::submit_outfit))
}
