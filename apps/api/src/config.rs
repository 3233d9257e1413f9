use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Only the database URL is required. Provider keys are optional: a missing
/// key degrades that provider's feature to its fallback path (synthesized
/// hotel data, placeholder images) instead of failing startup. The one
/// exception is extraction, which returns 503 without an LLM key.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: Option<String>,
    pub tripadvisor_api_key: Option<String>,
    pub unsplash_access_key: Option<String>,
    /// Explicit Chrome/Chromium binary for PDF export. Auto-detected if unset.
    pub chrome_path: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: optional_env("OPENAI_API_KEY"),
            tripadvisor_api_key: optional_env("TRIPADVISOR_API_KEY"),
            unsplash_access_key: optional_env("UNSPLASH_ACCESS_KEY"),
            chrome_path: optional_env("CHROME_PATH"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats unset and empty-string variables the same: both mean "not configured".
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
