//! Itinerary summary generation (`POST /api/generate-summary`).

pub mod handlers;
pub mod prompts;
