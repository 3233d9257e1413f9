//! Extraction — turns free text, a URL, or an uploaded PDF into a
//! structured itinerary via one LLM call.
//!
//! Pipeline: normalize input to capped plain text → fixed prompt →
//! `call_json` → schema validation. Parse/validation failures are 422,
//! provider unavailability is 503, unusable input is 400.

pub mod handlers;
pub mod ingest;
pub mod prompts;
pub mod schema;
