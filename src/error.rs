use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                axum::Json(json!({ "error": "Acesso não autorizado." })),
            )
                .into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                generic_failure()
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                generic_failure()
            }
        }
    }
}

// Datastore detail is logged above, never sent to the caller.
fn generic_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "success": false,
            "message": "Erro interno ao salvar os dados.",
        })),
    )
        .into_response()
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
