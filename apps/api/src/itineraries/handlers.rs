use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::itineraries::store;
use crate::models::itinerary::{ItineraryFormData, ItineraryMetaRow, ItineraryRow};
use crate::state::AppState;

const DEFAULT_TITLE: &str = "Untitled Itinerary";

#[derive(Debug, Deserialize)]
pub struct CreateItineraryRequest {
    pub title: Option<String>,
    pub form_data: Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItineraryRequest {
    pub title: Option<String>,
    pub form_data: Option<Value>,
}

/// GET /api/itineraries
pub async fn handle_list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<ItineraryMetaRow>>, AppError> {
    Ok(Json(store::list(&state.db, user_id).await?))
}

/// POST /api/itineraries
pub async fn handle_create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CreateItineraryRequest>,
) -> Result<(StatusCode, Json<ItineraryRow>), AppError> {
    validate_form_shape(&req.form_data)?;

    let title = resolve_title(req.title.as_deref(), &req.form_data);
    let row = store::create(&state.db, user_id, &title, &req.form_data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/itineraries/:id
pub async fn handle_get(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryRow>, AppError> {
    let row = store::get(&state.db, user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Itinerary {id} not found")))?;
    Ok(Json(row))
}

/// PUT /api/itineraries/:id — partial merge of title and/or form_data.
pub async fn handle_update(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateItineraryRequest>,
) -> Result<Json<ItineraryRow>, AppError> {
    if req.title.is_none() && req.form_data.is_none() {
        return Err(AppError::Validation(
            "Provide 'title' and/or 'form_data' to update".to_string(),
        ));
    }
    if let Some(form_data) = &req.form_data {
        validate_form_shape(form_data)?;
    }

    let row = store::update(
        &state.db,
        user_id,
        id,
        req.title.as_deref(),
        req.form_data.as_ref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Itinerary {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/itineraries/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !store::delete(&state.db, user_id, id).await? {
        return Err(AppError::NotFound(format!("Itinerary {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/itineraries/:id/export
pub async fn handle_mark_exported(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryRow>, AppError> {
    let row = store::touch_exported(&state.db, user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Itinerary {id} not found")))?;
    Ok(Json(row))
}

/// The raw JSON is stored verbatim (deep-equal round trip), but it must at
/// least deserialize as an itinerary document. Unknown extra keys pass and
/// are preserved.
fn validate_form_shape(form_data: &Value) -> Result<(), AppError> {
    serde_json::from_value::<ItineraryFormData>(form_data.clone())
        .map(|_| ())
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid form_data: {e}")))
}

fn resolve_title(explicit: Option<&str>, form_data: &Value) -> String {
    if let Some(title) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }
    form_data
        .get("title")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_title_prefers_explicit() {
        let form = json!({"title": "From Form"});
        assert_eq!(resolve_title(Some("Explicit"), &form), "Explicit");
    }

    #[test]
    fn test_resolve_title_falls_back_to_form_then_default() {
        let form = json!({"title": "From Form"});
        assert_eq!(resolve_title(None, &form), "From Form");
        assert_eq!(resolve_title(Some("  "), &json!({})), DEFAULT_TITLE);
    }

    #[test]
    fn test_validate_form_shape_accepts_extra_keys() {
        let form = json!({"destination": "Paris", "someClientOnlyKey": true});
        assert!(validate_form_shape(&form).is_ok());
    }

    #[test]
    fn test_validate_form_shape_rejects_wrong_types() {
        let form = json!({"hotels": "not an array"});
        assert!(validate_form_shape(&form).is_err());
    }

    #[test]
    fn test_saved_document_round_trips_deep_equal() {
        use chrono::Utc;

        let submitted = json!({
            "title": "Leh & Nubra",
            "destination": "Leh",
            "hotels": [{"name": "Grand Dragon", "city": "Leh", "nights": 2, "rating": 4.4}],
            "someClientOnlyKey": {"nested": [1, 2, 3]},
        });

        // The create path validates the shape, then hands this exact Value
        // to the store; nothing re-serializes it through the typed form.
        validate_form_shape(&submitted).unwrap();

        let row = ItineraryRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: resolve_title(None, &submitted),
            form_data: submitted.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_exported_at: None,
        };
        let fetched = serde_json::to_value(&row).unwrap();
        // Extra keys and nested structure come back byte-for-byte.
        assert_eq!(fetched["form_data"], submitted);
        assert_eq!(fetched["title"], "Leh & Nubra");
    }
}
