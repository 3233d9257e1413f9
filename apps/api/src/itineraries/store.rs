use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::itinerary::{ItineraryMetaRow, ItineraryRow};

/// Metadata only, most recently updated first.
pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<ItineraryMetaRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, title, created_at, updated_at, last_exported_at \
         FROM itineraries WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<ItineraryRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM itineraries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// `form_data` is stored verbatim so a later fetch returns exactly what was
/// submitted.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    form_data: &Value,
) -> Result<ItineraryRow, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO itineraries (id, user_id, title, form_data) \
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title)
    .bind(form_data)
    .fetch_one(pool)
    .await
}

/// Partial merge: only the provided fields change; `updated_at` always bumps.
pub async fn update(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    title: Option<&str>,
    form_data: Option<&Value>,
) -> Result<Option<ItineraryRow>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE itineraries \
         SET title = COALESCE($3, title), \
             form_data = COALESCE($4, form_data), \
             updated_at = now() \
         WHERE id = $1 AND user_id = $2 \
         RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(form_data)
    .fetch_optional(pool)
    .await
}

/// Returns false when the row did not exist (or is not the caller's).
pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM itineraries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Timestamp touch after a successful PDF export.
pub async fn touch_exported(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<ItineraryRow>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE itineraries SET last_exported_at = now() \
         WHERE id = $1 AND user_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
