use sqlx::PgPool;

use crate::models::Submission;

pub async fn create(
    pool: &PgPool,
    player_identifier: &serde_json::Value,
    form_name: Option<&str>,
    payload: &serde_json::Value,
) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (player_identifier, form_name, payload)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(player_identifier)
    .bind(form_name)
    .bind(payload)
    .fetch_one(pool)
    .await
}
