//! Schema validation for LLM extraction output.
//!
//! The model is asked for a fixed JSON shape; anything that does not
//! deserialize into `ItineraryFormData`, or violates the structural checks
//! below, is a 422 — the caller never sees a partially-validated document.

use serde_json::Value;

use crate::models::itinerary::ItineraryFormData;

/// Validates raw LLM output against the itinerary schema.
/// Returns the typed document or the list of problems found.
pub fn validate_form_data(raw: Value) -> Result<ItineraryFormData, Vec<String>> {
    let form: ItineraryFormData = serde_json::from_value(raw)
        .map_err(|e| vec![format!("output does not match the itinerary schema: {e}")])?;

    let mut problems = Vec::new();

    for (idx, day) in form.day_wise_itinerary.iter().enumerate() {
        if day.day == 0 {
            problems.push(format!("dayWiseItinerary[{idx}]: day numbers are 1-based"));
        }
        if day.title.trim().is_empty() && day.description.trim().is_empty() {
            problems.push(format!("dayWiseItinerary[{idx}]: entry is empty"));
        }
    }

    for (idx, hotel) in form.hotels.iter().enumerate() {
        if hotel.name.trim().is_empty() {
            problems.push(format!("hotels[{idx}]: hotel name is required"));
        }
        if !(0.0..=5.0).contains(&hotel.rating) {
            problems.push(format!(
                "hotels[{idx}]: rating {} outside 0..=5",
                hotel.rating
            ));
        }
    }

    if problems.is_empty() {
        Ok(form)
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_sparse_but_valid_output() {
        let raw = json!({
            "destination": "Paris",
            "dayWiseItinerary": [{"day": 1, "title": "Arrive in Paris", "description": "Visit the Eiffel Tower."}]
        });
        let form = validate_form_data(raw).unwrap();
        assert_eq!(form.destination, "Paris");
        assert_eq!(form.day_wise_itinerary[0].day, 1);
    }

    #[test]
    fn test_rejects_zero_day_number() {
        let raw = json!({
            "dayWiseItinerary": [{"day": 0, "title": "Arrival"}]
        });
        let problems = validate_form_data(raw).unwrap_err();
        assert!(problems.iter().any(|p| p.contains("1-based")));
    }

    #[test]
    fn test_rejects_wrong_types() {
        let raw = json!({"dayWiseItinerary": "not an array"});
        assert!(validate_form_data(raw).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let raw = json!({
            "hotels": [{"name": "Hotel X", "rating": 9.4}]
        });
        let problems = validate_form_data(raw).unwrap_err();
        assert!(problems.iter().any(|p| p.contains("rating")));
    }

    #[test]
    fn test_rejects_unnamed_hotel() {
        let raw = json!({"hotels": [{"city": "Rome"}]});
        let problems = validate_form_data(raw).unwrap_err();
        assert!(problems.iter().any(|p| p.contains("name")));
    }
}
