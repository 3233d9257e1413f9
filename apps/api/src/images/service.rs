use std::sync::Arc;

use rand::Rng;
use tracing::warn;

use crate::cache::BoundedCache;
use crate::images::provider::ImageProvider;

/// Successful provider lookups are cached; fallbacks are not, so a later
/// request can still reach the provider.
const CACHE_CAPACITY: usize = 256;

/// Deterministic placeholder parameterized by a seed. Always a well-formed
/// URL, so callers never need a failure branch for missing images.
pub fn placeholder_url(seed: u32) -> String {
    format!("https://picsum.photos/seed/{seed}/800/600")
}

pub fn random_placeholder_url() -> String {
    placeholder_url(rand::thread_rng().gen_range(1..=10_000))
}

/// Image resolution with caching and a never-fail contract.
#[derive(Clone)]
pub struct ImageService {
    provider: Option<Arc<dyn ImageProvider>>,
    cache: Arc<BoundedCache<Vec<String>>>,
}

impl ImageService {
    pub fn new(provider: Option<Arc<dyn ImageProvider>>) -> Self {
        Self {
            provider,
            cache: Arc::new(BoundedCache::new(CACHE_CAPACITY)),
        }
    }

    /// Resolves a single representative image URL for the keywords.
    pub async fn resolve_one(&self, query: &str) -> String {
        self.resolve_many(query, 1)
            .await
            .into_iter()
            .next()
            .unwrap_or_else(random_placeholder_url)
    }

    /// Resolves up to `count` image URLs. Short provider results are padded
    /// with placeholders so the caller always gets `count` entries.
    pub async fn resolve_many(&self, query: &str, count: usize) -> Vec<String> {
        let count = count.max(1);
        let cache_key = format!("{}::{}", query.trim().to_lowercase(), count);

        if let Some(cached) = self.cache.get(&cache_key) {
            return cached;
        }

        let mut urls = match &self.provider {
            Some(provider) => match provider.search(query, count).await {
                Ok(urls) => urls,
                Err(e) => {
                    warn!("Image search failed for '{query}': {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let from_provider = !urls.is_empty();
        while urls.len() < count {
            urls.push(random_placeholder_url());
        }

        if from_provider {
            self.cache.set(&cache_key, urls.clone());
        }

        urls
    }

    #[cfg(test)]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::provider::ImageProviderError;
    use async_trait::async_trait;

    struct FixedProvider(Vec<String>);

    #[async_trait]
    impl ImageProvider for FixedProvider {
        async fn search(
            &self,
            _query: &str,
            count: usize,
        ) -> Result<Vec<String>, ImageProviderError> {
            Ok(self.0.iter().take(count).cloned().collect())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ImageProvider for FailingProvider {
        async fn search(
            &self,
            _query: &str,
            _count: usize,
        ) -> Result<Vec<String>, ImageProviderError> {
            Err(ImageProviderError::Api(500))
        }
    }

    #[test]
    fn test_placeholder_is_well_formed() {
        let url = placeholder_url(42);
        assert_eq!(url, "https://picsum.photos/seed/42/800/600");
        assert!(random_placeholder_url().starts_with("https://picsum.photos/seed/"));
    }

    #[tokio::test]
    async fn test_no_provider_falls_back_to_placeholder() {
        let service = ImageService::new(None);
        let url = service.resolve_one("paris skyline").await;
        assert!(url.starts_with("https://picsum.photos/seed/"));
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_not_errors() {
        let service = ImageService::new(Some(Arc::new(FailingProvider)));
        let urls = service.resolve_many("tokyo", 3).await;
        assert_eq!(urls.len(), 3);
        assert!(urls.iter().all(|u| u.starts_with("https://picsum.photos/")));
        // Fallbacks are not cached.
        assert_eq!(service.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_provider_results_are_cached() {
        let service = ImageService::new(Some(Arc::new(FixedProvider(vec![
            "https://img.example/1.jpg".to_string(),
        ]))));
        let first = service.resolve_one("bali beach").await;
        assert_eq!(first, "https://img.example/1.jpg");
        assert_eq!(service.cache_len(), 1);
        let second = service.resolve_one("bali beach").await;
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_short_results_are_padded_to_count() {
        let service = ImageService::new(Some(Arc::new(FixedProvider(vec![
            "https://img.example/1.jpg".to_string(),
        ]))));
        let urls = service.resolve_many("rome", 4).await;
        assert_eq!(urls.len(), 4);
        assert_eq!(urls[0], "https://img.example/1.jpg");
        assert!(urls[1].starts_with("https://picsum.photos/"));
    }
}
