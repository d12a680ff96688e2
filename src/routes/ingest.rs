use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// Inbound submission body. All keys are optional; absent keys are stored
/// as null rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitForm {
    #[serde(default)]
    pub player_id: serde_json::Value,
    #[serde(default)]
    pub form_name: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

pub async fn submit_form(
    State(state): State<SharedState>,
    Json(body): Json<SubmitForm>,
) -> Result<impl IntoResponse, AppError> {
    let submission = db::submissions::create(
        &state.pool,
        &body.player_id,
        body.form_name.as_deref(),
        &body.data,
    )
    .await?;

    tracing::info!("Stored submission {}", submission.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Dados salvos com sucesso!" })),
    ))
}
