//! Photo-search provider seam.
//!
//! `AppState` carries the provider as `Arc<dyn ImageProvider>` inside
//! `ImageService`, so a different search backend can be swapped in without
//! touching the endpoint, the export path, or the cache.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";
const SEARCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ImageProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {0})")]
    Api(u16),
}

#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Returns up to `count` image URLs for the query. An empty vec is a
    /// valid answer; the service layer handles the fallback.
    async fn search(&self, query: &str, count: usize) -> Result<Vec<String>, ImageProviderError>;
}

#[derive(Debug, Deserialize)]
struct UnsplashSearchResponse {
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    urls: UnsplashUrls,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    regular: String,
}

pub struct UnsplashProvider {
    client: Client,
    access_key: String,
}

impl UnsplashProvider {
    pub fn new(access_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(SEARCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            access_key,
        }
    }
}

#[async_trait]
impl ImageProvider for UnsplashProvider {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<String>, ImageProviderError> {
        let per_page = count.to_string();
        let response = self
            .client
            .get(UNSPLASH_SEARCH_URL)
            .header("authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageProviderError::Api(status.as_u16()));
        }

        let parsed: UnsplashSearchResponse = response.json().await?;
        Ok(parsed
            .results
            .into_iter()
            .take(count)
            .map(|p| p.urls.regular)
            .collect())
    }
}
