use sqlx::PgPool;

use crate::config::Config;
use crate::enrichment::HotelDataService;
use crate::images::ImageService;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Services are constructed once at startup; nothing here is
/// an ambient singleton.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// None when no LLM key is configured; extraction and summary answer 503.
    pub llm: Option<LlmClient>,
    /// Photo search with bounded caching and a placeholder fallback.
    pub images: ImageService,
    /// Hotel enrichment with synthesized fallback data.
    pub hotels: HotelDataService,
}
