use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::handlers::map_llm_error;
use crate::models::itinerary::DayEntry;
use crate::state::AppState;
use crate::summary::prompts::{SUMMARY_PROMPT, SUMMARY_SYSTEM};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryRequest {
    pub routing: String,
    pub destination: String,
    pub highlights: String,
    pub day_wise_itinerary: Vec<DayEntry>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /api/generate-summary
///
/// One LLM call over the routing/destination/highlights/day plan. The model
/// writes plain text, so the only failure modes are bad input (400) and
/// provider trouble (503).
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    if req.destination.trim().is_empty() && req.day_wise_itinerary.is_empty() {
        return Err(AppError::Validation(
            "Provide at least a destination or a day-wise itinerary".to_string(),
        ));
    }

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Upstream("Summary is unavailable: LLM provider is not configured".to_string())
    })?;

    let prompt = SUMMARY_PROMPT
        .replace("{destination}", req.destination.trim())
        .replace("{routing}", req.routing.trim())
        .replace("{highlights}", req.highlights.trim())
        .replace("{days}", &format_day_plan(&req.day_wise_itinerary));

    let response = llm
        .call(&prompt, SUMMARY_SYSTEM)
        .await
        .map_err(map_llm_error)?;

    let summary = response
        .text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Llm("summary response was empty".to_string()))?;

    Ok(Json(SummaryResponse { summary }))
}

fn format_day_plan(days: &[DayEntry]) -> String {
    if days.is_empty() {
        return "(not provided)".to_string();
    }
    days.iter()
        .map(|d| format!("Day {}: {} — {}", d.day, d.title, d.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_plan_lists_each_day() {
        let days = vec![
            DayEntry {
                day: 1,
                title: "Arrive".to_string(),
                description: "Check in".to_string(),
                image: String::new(),
            },
            DayEntry {
                day: 2,
                title: "Explore".to_string(),
                description: "Old town".to_string(),
                image: String::new(),
            },
        ];
        let plan = format_day_plan(&days);
        assert!(plan.contains("Day 1: Arrive"));
        assert!(plan.contains("Day 2: Explore"));
    }

    #[test]
    fn test_format_day_plan_empty() {
        assert_eq!(format_day_plan(&[]), "(not provided)");
    }
}
