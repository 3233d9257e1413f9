//! Thin TripAdvisor content-API client: location search, details, photos.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const TRIPADVISOR_BASE_URL: &str = "https://api.content.tripadvisor.com/api/v1";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum TripAdvisorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {0})")]
    Api(u16),
}

#[derive(Debug, Deserialize)]
pub struct LocationSearchResponse {
    #[serde(default)]
    pub data: Vec<LocationResult>,
}

#[derive(Debug, Deserialize)]
pub struct LocationResult {
    pub location_id: String,
    pub name: String,
    #[serde(default)]
    pub address_obj: Option<AddressObj>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressObj {
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationDetails {
    /// TripAdvisor serializes the rating as a string, e.g. "4.5".
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub address_obj: Option<AddressObj>,
}

#[derive(Debug, Deserialize)]
struct PhotosResponse {
    #[serde(default)]
    data: Vec<PhotoResult>,
}

#[derive(Debug, Deserialize)]
struct PhotoResult {
    #[serde(default)]
    images: Option<PhotoImages>,
}

#[derive(Debug, Deserialize)]
struct PhotoImages {
    #[serde(default)]
    large: Option<PhotoUrl>,
    #[serde(default)]
    original: Option<PhotoUrl>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrl {
    url: String,
}

#[derive(Clone)]
pub struct TripAdvisorClient {
    client: Client,
    api_key: String,
}

impl TripAdvisorClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    pub async fn search_location(
        &self,
        query: &str,
    ) -> Result<Vec<LocationResult>, TripAdvisorError> {
        let response = self
            .client
            .get(format!("{TRIPADVISOR_BASE_URL}/location/search"))
            .query(&[
                ("key", self.api_key.as_str()),
                ("searchQuery", query),
                ("category", "hotels"),
                ("language", "en"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TripAdvisorError::Api(status.as_u16()));
        }

        let parsed: LocationSearchResponse = response.json().await?;
        Ok(parsed.data)
    }

    pub async fn location_details(
        &self,
        location_id: &str,
    ) -> Result<LocationDetails, TripAdvisorError> {
        let response = self
            .client
            .get(format!(
                "{TRIPADVISOR_BASE_URL}/location/{location_id}/details"
            ))
            .query(&[("key", self.api_key.as_str()), ("language", "en")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TripAdvisorError::Api(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Returns the first usable photo URL, if any.
    pub async fn first_photo_url(
        &self,
        location_id: &str,
    ) -> Result<Option<String>, TripAdvisorError> {
        let response = self
            .client
            .get(format!(
                "{TRIPADVISOR_BASE_URL}/location/{location_id}/photos"
            ))
            .query(&[("key", self.api_key.as_str()), ("language", "en")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TripAdvisorError::Api(status.as_u16()));
        }

        let parsed: PhotosResponse = response.json().await?;
        Ok(parsed.data.into_iter().find_map(|p| {
            p.images
                .and_then(|imgs| imgs.large.or(imgs.original).map(|u| u.url))
        }))
    }
}
