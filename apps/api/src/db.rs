use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Itinerary CRUD is short transactional work; extraction, enrichment and
/// PDF export hold no connection while they wait on providers or Chrome, so
/// a small pool covers the whole service.
const MAX_CONNECTIONS: u32 = 8;
/// If a connection is not free within this window the request fails fast
/// instead of queueing behind a slow export burst.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connects to the itinerary database and returns the shared pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .context("Failed to connect to the itinerary database")?;

    info!("Itinerary database pool ready (max {MAX_CONNECTIONS} connections)");
    Ok(pool)
}
