use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// The full user-editable itinerary document.
///
/// Every field is defaulted so the extraction LLM may leave anything blank;
/// the prompt contract is "blank, never inferred". Wire names are camelCase
/// to match the client form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryFormData {
    pub title: String,
    pub destination: String,
    pub duration: String,
    pub routing: String,
    pub trip_type: String,
    pub cost: String,
    pub tags: Vec<String>,
    pub main_image: String,
    pub hotels: Vec<Hotel>,
    pub experiences: Vec<Experience>,
    pub day_wise_itinerary: Vec<DayEntry>,
    pub gallery_images: Vec<String>,
    pub practical_info: PracticalInfo,
    pub with_kids: String,
    pub with_family: String,
    pub offbeat: String,
}

/// A hotel entry. `name` is the stable identity key; `api_sourced` records
/// whether the rating/phrases came from the travel-data provider or were
/// synthesized locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    pub name: String,
    pub city: String,
    pub nights: u32,
    pub rating: f64,
    pub image: String,
    pub phrases: Vec<String>,
    pub api_sourced: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayEntry {
    /// 1-based day number.
    pub day: u32,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticalInfo {
    pub visa: String,
    pub currency: String,
    pub tips: Vec<String>,
}

/// A persisted itinerary. `form_data` is stored verbatim as JSONB so a
/// fetch returns exactly what was submitted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItineraryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub form_data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_exported_at: Option<DateTime<Utc>>,
}

/// Listing projection: metadata only, no form payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItineraryMetaRow {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_exported_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_data_deserializes_from_sparse_json() {
        let parsed: ItineraryFormData = serde_json::from_str(
            r#"{"destination": "Paris", "dayWiseItinerary": [{"day": 1, "title": "Arrival"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.destination, "Paris");
        assert_eq!(parsed.day_wise_itinerary.len(), 1);
        assert_eq!(parsed.day_wise_itinerary[0].day, 1);
        assert!(parsed.hotels.is_empty());
        assert!(parsed.title.is_empty());
    }

    #[test]
    fn test_form_data_wire_names_are_camel_case() {
        let form = ItineraryFormData {
            trip_type: "family".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["tripType"], "family");
        assert!(json.get("dayWiseItinerary").is_some());
        assert!(json.get("trip_type").is_none());
    }

    #[test]
    fn test_hotel_provenance_flag_round_trips() {
        let hotel = Hotel {
            name: "Marina Bay Sands".to_string(),
            city: "Singapore".to_string(),
            nights: 2,
            rating: 4.6,
            image: String::new(),
            phrases: vec!["Exceptional guest ratings".to_string()],
            api_sourced: true,
        };
        let json = serde_json::to_value(&hotel).unwrap();
        assert_eq!(json["apiSourced"], true);
        let back: Hotel = serde_json::from_value(json).unwrap();
        assert_eq!(back, hotel);
    }
}
