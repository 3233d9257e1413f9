//! Review-phrase synthesis and fallback hotel data.
//!
//! Phrases are canned: one keyed by rating tier, a few triggered by
//! destination keywords, a few by hotel-name keywords. The fallback path
//! samples a fixed generic pool and invents a plausible rating instead.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::images::service::random_placeholder_url;
use crate::models::itinerary::Hotel;

pub const MIN_PHRASES: usize = 2;
pub const MAX_PHRASES: usize = 3;

/// Synthesized ratings are uniform in this range.
pub const FALLBACK_RATING_MIN: f64 = 3.5;
pub const FALLBACK_RATING_MAX: f64 = 5.0;

const DESTINATION_PHRASES: &[(&str, &str)] = &[
    ("singapore", "Prime Orchard Road location"),
    ("paris", "Walking distance to the Seine"),
    ("tokyo", "Steps from efficient metro lines"),
    ("bali", "Tranquil tropical setting"),
    ("dubai", "Sweeping skyline views"),
    ("london", "Close to the West End"),
    ("new york", "Heart of Manhattan energy"),
    ("rome", "Historic centre at the doorstep"),
    ("bangkok", "Easy riverside access"),
    ("maldives", "Overwater serenity"),
];

const NAME_PHRASES: &[(&str, &str)] = &[
    ("resort", "Resort amenities"),
    ("boutique", "Intimate boutique character"),
    ("grand", "Grand, stately interiors"),
    ("palace", "Palatial old-world charm"),
    ("beach", "Direct beach access"),
    ("spa", "In-house spa and wellness"),
    ("airport", "Convenient airport transfers"),
    ("heritage", "Heritage architecture"),
];

const GENERIC_PHRASES: &[&str] = &[
    "Friendly, attentive staff",
    "Clean and spacious rooms",
    "Great central location",
    "Generous breakfast spread",
    "Quiet, restful nights",
    "Easy access to the sights",
    "Modern, well-kept facilities",
    "Helpful concierge desk",
];

fn rating_tier_phrase(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "Exceptional guest ratings"
    } else if rating >= 4.0 {
        "Excellent service and comfort"
    } else if rating >= 3.5 {
        "Comfortable, well-reviewed stay"
    } else {
        "Good value for money"
    }
}

/// Builds 2–3 descriptive phrases for an API-sourced hotel: the rating tier
/// first, then any destination/name keyword hits, deduplicated and truncated.
pub fn synthesize_phrases(hotel_name: &str, destination: &str, rating: f64) -> Vec<String> {
    let name_lower = hotel_name.to_lowercase();
    let destination_lower = destination.to_lowercase();

    let mut phrases = vec![rating_tier_phrase(rating).to_string()];

    for (keyword, phrase) in DESTINATION_PHRASES {
        if destination_lower.contains(keyword) {
            phrases.push((*phrase).to_string());
        }
    }
    for (keyword, phrase) in NAME_PHRASES {
        if name_lower.contains(keyword) {
            phrases.push((*phrase).to_string());
        }
    }

    phrases.dedup();
    phrases.truncate(MAX_PHRASES);

    let mut rng = rand::thread_rng();
    while phrases.len() < MIN_PHRASES {
        let pick = GENERIC_PHRASES
            .choose(&mut rng)
            .expect("generic pool is non-empty")
            .to_string();
        if !phrases.contains(&pick) {
            phrases.push(pick);
        }
    }

    phrases
}

/// Plausible synthesized hotel data, used when the provider is unconfigured,
/// unreachable, or returned a name the match policy rejected.
pub fn fallback_hotel(name: &str, destination: &str) -> Hotel {
    let mut rng = rand::thread_rng();
    let rating =
        (rng.gen_range(FALLBACK_RATING_MIN..=FALLBACK_RATING_MAX) * 10.0).round() / 10.0;

    let count = rng.gen_range(MIN_PHRASES..=MAX_PHRASES);
    let phrases = GENERIC_PHRASES
        .choose_multiple(&mut rng, count)
        .map(|p| p.to_string())
        .collect();

    Hotel {
        name: name.to_string(),
        city: destination.trim().to_string(),
        nights: 1,
        rating,
        image: random_placeholder_url(),
        phrases,
        api_sourced: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_tiers() {
        assert_eq!(rating_tier_phrase(4.7), "Exceptional guest ratings");
        assert_eq!(rating_tier_phrase(4.5), "Exceptional guest ratings");
        assert_eq!(rating_tier_phrase(4.2), "Excellent service and comfort");
        assert_eq!(rating_tier_phrase(3.6), "Comfortable, well-reviewed stay");
        assert_eq!(rating_tier_phrase(3.0), "Good value for money");
    }

    #[test]
    fn test_destination_keyword_triggers_phrase() {
        let phrases = synthesize_phrases("City Hotel", "Singapore", 4.6);
        assert!(phrases.contains(&"Prime Orchard Road location".to_string()));
    }

    #[test]
    fn test_name_keyword_triggers_phrase() {
        let phrases = synthesize_phrases("Sunset Beach Resort", "Fiji", 4.0);
        assert!(phrases.contains(&"Resort amenities".to_string()));
    }

    #[test]
    fn test_phrase_count_bounds() {
        // Many keyword hits still truncate to the cap.
        let many = synthesize_phrases("Grand Palace Spa Resort", "Singapore", 4.8);
        assert!(many.len() <= MAX_PHRASES);
        // No keyword hits still pad to the floor.
        let few = synthesize_phrases("Plain Inn", "Nowhere", 4.8);
        assert!(few.len() >= MIN_PHRASES);
    }

    #[test]
    fn test_fallback_hotel_shape() {
        let hotel = fallback_hotel("Hotel Shangri-La", "Leh");
        assert!(!hotel.api_sourced);
        assert!((FALLBACK_RATING_MIN..=FALLBACK_RATING_MAX).contains(&hotel.rating));
        assert!(hotel.phrases.len() >= MIN_PHRASES && hotel.phrases.len() <= MAX_PHRASES);
        assert!(hotel.image.starts_with("https://picsum.photos/seed/"));
        assert_eq!(hotel.city, "Leh");
        assert_eq!(hotel.name, "Hotel Shangri-La");
    }
}
