use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::ingest;
use crate::extraction::prompts::{EXTRACT_PROMPT, EXTRACT_SYSTEM};
use crate::extraction::schema::validate_form_data;
use crate::llm_client::LlmError;
use crate::models::itinerary::ItineraryFormData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub data: ItineraryFormData,
}

/// POST /api/extract
///
/// Accepts JSON `{text}` or `{url}`, or multipart with a `pdf` field.
/// All three are normalized to capped plain text and sent through one LLM
/// call; the response is schema-validated before it reaches the client.
pub async fn handle_extract(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<ExtractResponse>, AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let raw_text = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?;
        read_pdf_field(multipart).await?
    } else {
        let Json(body) = Json::<ExtractRequest>::from_request(req, &())
            .await
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;
        match (body.text, body.url) {
            (Some(text), _) if !text.trim().is_empty() => ingest::normalize_text(&text),
            (_, Some(url)) if !url.trim().is_empty() => ingest::fetch_url_text(url.trim()).await?,
            _ => {
                return Err(AppError::Validation(
                    "Provide 'text', 'url', or a multipart 'pdf' upload".to_string(),
                ))
            }
        }
    };

    ingest::check_min_length(&raw_text)?;

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Upstream("Extraction is unavailable: LLM provider is not configured".to_string())
    })?;

    let prompt = EXTRACT_PROMPT.replace("{input_text}", &raw_text);
    let parsed: serde_json::Value = llm
        .call_json(&prompt, EXTRACT_SYSTEM)
        .await
        .map_err(map_llm_error)?;

    let data = validate_form_data(parsed)
        .map_err(|problems| AppError::UnprocessableEntity(problems.join("; ")))?;

    info!(
        "Extraction produced itinerary: destination='{}', {} day entries",
        data.destination,
        data.day_wise_itinerary.len()
    );

    Ok(Json(ExtractResponse { data }))
}

async fn read_pdf_field(mut multipart: Multipart) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart field: {e}")))?
    {
        if field.name() == Some("pdf") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read PDF upload: {e}")))?;
            return ingest::extract_pdf_text(bytes.to_vec()).await;
        }
    }
    Err(AppError::Validation(
        "Multipart request must include a 'pdf' field".to_string(),
    ))
}

/// Provider unavailability becomes 503; output we could not use becomes 422.
pub fn map_llm_error(e: LlmError) -> AppError {
    if e.is_unavailable() {
        return AppError::Upstream("LLM provider is unavailable".to_string());
    }
    match e {
        LlmError::Parse(_) | LlmError::EmptyContent => {
            AppError::UnprocessableEntity(format!("Model returned malformed itinerary JSON: {e}"))
        }
        other => AppError::Llm(other.to_string()),
    }
}
