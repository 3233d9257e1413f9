use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::enrichment::client::{TripAdvisorClient, TripAdvisorError};
use crate::enrichment::phrases::{fallback_hotel, synthesize_phrases};
use crate::enrichment::policy::{dedup_hotels_by_city, match_accepts};
use crate::images::service::random_placeholder_url;
use crate::models::itinerary::Hotel;

/// Best-effort hotel data. Every public method returns a usable `Hotel`;
/// provider problems degrade to synthesized data, never to an error.
#[derive(Clone)]
pub struct HotelDataService {
    client: Option<Arc<TripAdvisorClient>>,
}

impl HotelDataService {
    pub fn new(client: Option<TripAdvisorClient>) -> Self {
        Self {
            client: client.map(Arc::new),
        }
    }

    /// Enriches one hotel by name, with an optional destination hint for the
    /// search query and the city fallback.
    pub async fn enrich_hotel(&self, name: &str, destination: &str) -> Hotel {
        let Some(client) = &self.client else {
            return fallback_hotel(name, destination);
        };

        match self.try_enrich(client, name, destination).await {
            Ok(hotel) => hotel,
            Err(e) => {
                warn!("Hotel enrichment failed for '{name}': {e}");
                fallback_hotel(name, destination)
            }
        }
    }

    async fn try_enrich(
        &self,
        client: &TripAdvisorClient,
        name: &str,
        destination: &str,
    ) -> Result<Hotel, TripAdvisorError> {
        let query = if destination.trim().is_empty() {
            name.to_string()
        } else {
            format!("{name} {destination}")
        };

        let results = client.search_location(&query).await?;
        let Some(location) = results.into_iter().next() else {
            debug!("No location results for '{query}'");
            return Ok(fallback_hotel(name, destination));
        };

        if !match_accepts(name, &location.name) {
            debug!(
                "Match policy rejected '{}' for query '{}'",
                location.name, name
            );
            return Ok(fallback_hotel(name, destination));
        }

        let (details, photo) = tokio::join!(
            client.location_details(&location.location_id),
            client.first_photo_url(&location.location_id)
        );

        let details = details?;
        let Some(rating) = details.rating.as_deref().and_then(|r| r.parse::<f64>().ok()) else {
            debug!("No rating in details for '{}'", location.name);
            return Ok(fallback_hotel(name, destination));
        };

        // A missing photo is not worth discarding real rating data over.
        let image = photo
            .unwrap_or_else(|e| {
                warn!("Photo lookup failed for '{}': {e}", location.name);
                None
            })
            .unwrap_or_else(random_placeholder_url);

        let city = location
            .address_obj
            .and_then(|a| a.city)
            .or_else(|| details.address_obj.and_then(|a| a.city))
            .unwrap_or_else(|| destination.trim().to_string());

        Ok(Hotel {
            name: name.to_string(),
            city,
            nights: 1,
            rating,
            image,
            phrases: synthesize_phrases(name, destination, rating),
            api_sourced: true,
        })
    }

    /// Enriches every name concurrently, then keeps at most one hotel per
    /// city (higher rating wins).
    pub async fn fetch_destination_hotels(
        &self,
        destination: &str,
        hotel_names: &[String],
    ) -> Vec<Hotel> {
        let lookups = hotel_names
            .iter()
            .map(|name| self.enrich_hotel(name, destination));
        let hotels = join_all(lookups).await;
        dedup_hotels_by_city(hotels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_provider_synthesizes() {
        let service = HotelDataService::new(None);
        let hotel = service.enrich_hotel("Hotel Nowhere", "Leh").await;
        assert!(!hotel.api_sourced);
        assert_eq!(hotel.name, "Hotel Nowhere");
        assert!(!hotel.phrases.is_empty());
    }

    #[tokio::test]
    async fn test_batch_fetch_dedups_by_city() {
        let service = HotelDataService::new(None);
        let names = vec!["Hotel A".to_string(), "Hotel B".to_string()];
        // Both fallbacks resolve to the destination city, so only one survives.
        let hotels = service.fetch_destination_hotels("Leh", &names).await;
        assert_eq!(hotels.len(), 1);
    }
}
