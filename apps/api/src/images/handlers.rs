use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

const MAX_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ImagesParams {
    pub q: String,
    pub count: Option<usize>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ImagesResponse {
    #[serde(rename_all = "camelCase")]
    Single { image_url: String },
    Multiple { images: Vec<String> },
}

/// GET /api/images?q=...&count=...&type=single|multiple
pub async fn handle_get_images(
    State(state): State<AppState>,
    Query(params): Query<ImagesParams>,
) -> Result<Json<ImagesResponse>, AppError> {
    resolve(&state, params).await
}

/// POST /api/images — same parameters as GET, in the JSON body.
pub async fn handle_post_images(
    State(state): State<AppState>,
    Json(params): Json<ImagesParams>,
) -> Result<Json<ImagesResponse>, AppError> {
    resolve(&state, params).await
}

async fn resolve(state: &AppState, params: ImagesParams) -> Result<Json<ImagesResponse>, AppError> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::Validation(
            "Query parameter 'q' is required".to_string(),
        ));
    }

    let kind = params.kind.as_deref().unwrap_or("single");
    match kind {
        "multiple" => {
            let count = params.count.unwrap_or(4).clamp(1, MAX_COUNT);
            let images = state.images.resolve_many(query, count).await;
            Ok(Json(ImagesResponse::Multiple { images }))
        }
        "single" => {
            let image_url = state.images.resolve_one(query).await;
            Ok(Json(ImagesResponse::Single { image_url }))
        }
        other => Err(AppError::Validation(format!(
            "Unknown type '{other}' (expected 'single' or 'multiple')"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_response_uses_image_url_key() {
        let json = serde_json::to_value(ImagesResponse::Single {
            image_url: "https://img.example/x.jpg".to_string(),
        })
        .unwrap();
        assert_eq!(json["imageUrl"], "https://img.example/x.jpg");
    }

    #[test]
    fn test_multiple_response_uses_images_key() {
        let json = serde_json::to_value(ImagesResponse::Multiple {
            images: vec!["a".to_string()],
        })
        .unwrap();
        assert!(json["images"].is_array());
    }
}
