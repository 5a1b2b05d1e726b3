//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport::http};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/tools", get(http::list_tools))
        .route("/v1/tools/:tool", post(http::call_tool))
        .route("/v1/call", post(http::call_envelope))
        .route("/static/:plugin/:version/:file", get(http::static_asset))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
