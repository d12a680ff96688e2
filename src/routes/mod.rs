pub mod ingest;

use axum::middleware::from_fn_with_state;
use axum::routing::post;
use axum::Router;

use crate::middleware::api_key::require_api_key;
use crate::state::SharedState;

pub fn ingest_routes(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/submit-form", post(ingest::submit_form))
        .route_layer(from_fn_with_state(state, require_api_key))
}
