use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored form submission. `submitted_at` is assigned by the database at
/// insert time and is never taken from the caller.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub player_identifier: serde_json::Value,
    pub form_name: Option<String>,
    pub payload: serde_json::Value,
    pub submitted_at: DateTime<Utc>,
}
