use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

/// Action-tagged request body, matching the client contract.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TripAdvisorRequest {
    #[serde(rename_all = "camelCase")]
    Search {
        hotel_name: String,
        #[serde(default)]
        destination: String,
    },
    #[serde(rename_all = "camelCase")]
    FetchDestinationHotels {
        destination: String,
        hotel_names: Vec<String>,
    },
}

/// Business-level envelope: failures here are `{success: false, error}` with
/// HTTP 200. Transport failures never surface at all — enrichment falls back
/// to synthesized data instead.
#[derive(Debug, Serialize)]
pub struct TripAdvisorResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TripAdvisorResponse {
    fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// POST /api/tripadvisor
pub async fn handle_tripadvisor(
    State(state): State<AppState>,
    Json(req): Json<TripAdvisorRequest>,
) -> Result<Json<TripAdvisorResponse>, AppError> {
    match req {
        TripAdvisorRequest::Search {
            hotel_name,
            destination,
        } => {
            if hotel_name.trim().is_empty() {
                return Ok(Json(TripAdvisorResponse::fail("hotelName is required")));
            }
            let hotel = state
                .hotels
                .enrich_hotel(hotel_name.trim(), destination.trim())
                .await;
            let data = serde_json::to_value(hotel).map_err(|e| AppError::Internal(e.into()))?;
            Ok(Json(TripAdvisorResponse::ok(data)))
        }
        TripAdvisorRequest::FetchDestinationHotels {
            destination,
            hotel_names,
        } => {
            if destination.trim().is_empty() {
                return Ok(Json(TripAdvisorResponse::fail("destination is required")));
            }
            if hotel_names.is_empty() {
                return Ok(Json(TripAdvisorResponse::fail("hotelNames is required")));
            }
            let hotels = state
                .hotels
                .fetch_destination_hotels(destination.trim(), &hotel_names)
                .await;
            let data = serde_json::to_value(hotels).map_err(|e| AppError::Internal(e.into()))?;
            Ok(Json(TripAdvisorResponse::ok(data)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_search_action() {
        let req: TripAdvisorRequest = serde_json::from_str(
            r#"{"action": "search", "hotelName": "Marina Bay Sands", "destination": "Singapore"}"#,
        )
        .unwrap();
        assert!(matches!(req, TripAdvisorRequest::Search { .. }));
    }

    #[test]
    fn test_request_parses_batch_action() {
        let req: TripAdvisorRequest = serde_json::from_str(
            r#"{"action": "fetch_destination_hotels", "destination": "Leh", "hotelNames": ["A", "B"]}"#,
        )
        .unwrap();
        match req {
            TripAdvisorRequest::FetchDestinationHotels { hotel_names, .. } => {
                assert_eq!(hotel_names.len(), 2);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_failure_envelope_shape() {
        let json = serde_json::to_value(TripAdvisorResponse::fail("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("data").is_none());
    }
}
