//! Named reconciliation policies for third-party hotel data.
//!
//! Both are deliberate heuristics with acknowledged false-negative and
//! false-positive risk; keeping them as standalone functions makes the
//! behavior independently testable and replaceable.

use crate::models::itinerary::Hotel;

/// Accepts a location-search result only when the returned name and the
/// query share a substring in either direction (case-insensitive). A result
/// that fails this guard is discarded in favor of synthesized data.
pub fn match_accepts(query: &str, candidate: &str) -> bool {
    let q = query.trim().to_lowercase();
    let c = candidate.trim().to_lowercase();
    if q.is_empty() || c.is_empty() {
        return false;
    }
    q.contains(&c) || c.contains(&q)
}

/// Retains at most one hotel per city: the higher-rated one wins, ties keep
/// the existing entry. Hotels with no resolved city are never deduplicated.
/// Lower-rated losers are silently dropped (observed upstream behavior).
pub fn dedup_hotels_by_city(hotels: Vec<Hotel>) -> Vec<Hotel> {
    let mut kept: Vec<Hotel> = Vec::with_capacity(hotels.len());

    for hotel in hotels {
        let city_key = hotel.city.trim().to_lowercase();
        if city_key.is_empty() {
            kept.push(hotel);
            continue;
        }

        match kept
            .iter()
            .position(|h| h.city.trim().to_lowercase() == city_key)
        {
            Some(i) => {
                if hotel.rating > kept[i].rating {
                    kept[i] = hotel;
                }
            }
            None => kept.push(hotel),
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(name: &str, city: &str, rating: f64) -> Hotel {
        Hotel {
            name: name.to_string(),
            city: city.to_string(),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn test_match_accepts_query_inside_candidate() {
        assert!(match_accepts(
            "Marina Bay Sands",
            "Marina Bay Sands Singapore"
        ));
    }

    #[test]
    fn test_match_accepts_candidate_inside_query() {
        assert!(match_accepts("The Ritz London Hotel", "Ritz London"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(match_accepts("marina bay sands", "MARINA BAY SANDS"));
    }

    #[test]
    fn test_match_rejects_disjoint_names() {
        assert!(!match_accepts("Marina Bay Sands", "Raffles Hotel"));
    }

    #[test]
    fn test_match_rejects_empty() {
        assert!(!match_accepts("", "Raffles Hotel"));
        assert!(!match_accepts("Raffles", ""));
    }

    #[test]
    fn test_dedup_keeps_higher_rated_per_city() {
        let result = dedup_hotels_by_city(vec![
            hotel("A", "Leh", 4.0),
            hotel("B", "Leh", 4.5),
            hotel("C", "Nubra", 3.9),
        ]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "B");
        assert_eq!(result[1].name, "C");
    }

    #[test]
    fn test_dedup_tie_keeps_existing_entry() {
        let result = dedup_hotels_by_city(vec![hotel("A", "Leh", 4.2), hotel("B", "Leh", 4.2)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "A");
    }

    #[test]
    fn test_dedup_city_comparison_is_case_insensitive() {
        let result =
            dedup_hotels_by_city(vec![hotel("A", "leh", 4.0), hotel("B", "Leh ", 4.5)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B");
    }

    #[test]
    fn test_dedup_keeps_hotels_without_city() {
        let result = dedup_hotels_by_city(vec![hotel("A", "", 4.0), hotel("B", "", 4.5)]);
        assert_eq!(result.len(), 2);
    }
}
