use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::SharedState;

/// Shared-secret gate for the ingest route.
///
/// Fail-closed: a missing `x-api-key` header, a mismatched value, or an
/// empty configured key all reject with 401 before the handler runs.
pub async fn require_api_key(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Response {
    let expected = state.config.api_key.as_bytes();

    let provided = req
        .headers()
        .get("x-api-key")
        .map(|v| v.as_bytes());

    match provided {
        Some(key) if !expected.is_empty() && bool::from(key.ct_eq(expected)) => {
            next.run(req).await
        }
        _ => AppError::Unauthorized.into_response(),
    }
}
