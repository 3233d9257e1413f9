mod auth;
mod cache;
mod config;
mod db;
mod enrichment;
mod errors;
mod extraction;
mod images;
mod itineraries;
mod llm_client;
mod models;
mod pdf;
mod routes;
mod state;
mod summary;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::enrichment::client::TripAdvisorClient;
use crate::enrichment::HotelDataService;
use crate::images::provider::{ImageProvider, UnsplashProvider};
use crate::images::ImageService;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Itinera API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client (optional: without it, extraction answers 503)
    let llm = config.openai_api_key.clone().map(LlmClient::new);
    match &llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => warn!("OPENAI_API_KEY not set — extraction and summary will return 503"),
    }

    // Initialize image resolution (placeholders-only without a key)
    let image_provider: Option<Arc<dyn ImageProvider>> = config
        .unsplash_access_key
        .clone()
        .map(|key| Arc::new(UnsplashProvider::new(key)) as Arc<dyn ImageProvider>);
    if image_provider.is_none() {
        info!("Photo search not configured — image lookups fall back to placeholders");
    }
    let images = ImageService::new(image_provider);

    // Initialize hotel enrichment (synthesized data without a key)
    let hotels = HotelDataService::new(
        config
            .tripadvisor_api_key
            .clone()
            .map(TripAdvisorClient::new),
    );
    if config.tripadvisor_api_key.is_none() {
        info!("Travel-data provider not configured — hotel enrichment uses synthesized data");
    }

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        llm,
        images,
        hotels,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
