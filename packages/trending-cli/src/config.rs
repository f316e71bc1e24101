use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

/// Runtime configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub serpapi_api_key: SecretString,
    pub serpapi_base_url: Option<String>,
    pub page_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            serpapi_api_key: env::var("SERPAPI_API_KEY")
                .context("SERPAPI_API_KEY must be set")?
                .into(),
            serpapi_base_url: env::var("SERPAPI_BASE_URL").ok(),
            page_delay: Duration::from_millis(
                env::var("TRENDING_PAGE_DELAY_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .context("TRENDING_PAGE_DELAY_MS must be a valid number")?,
            ),
        })
    }
}
