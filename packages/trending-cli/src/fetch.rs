//! Page fetching: one request per page, strictly in order.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use serpapi_client::{AmazonSearchParams, SerpApiClient};
use std::time::Duration;
use trending::{AnalysisConfig, TrendingPipeline};

/// Source of raw results pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, config: &AnalysisConfig, page: u32) -> Result<Value>;
}

#[async_trait]
impl PageSource for SerpApiClient {
    async fn fetch_page(&self, config: &AnalysisConfig, page: u32) -> Result<Value> {
        let params = search_params(config, page);
        Ok(self.amazon_search(&params).await?)
    }
}

pub fn search_params(config: &AnalysisConfig, page: u32) -> AmazonSearchParams {
    AmazonSearchParams::new(&config.amazon_domain, &config.language)
        .with_sort(&config.sort)
        .with_node(&config.node)
        .with_page(page)
}

/// Fetch `config.pages` pages and feed them through the pipeline.
///
/// A page that fails to fetch is recorded and skipped; the run continues.
pub async fn collect_pages<S: PageSource + ?Sized>(
    source: &S,
    config: &AnalysisConfig,
    delay: Duration,
) -> Result<TrendingPipeline> {
    let mut pipeline = TrendingPipeline::new();

    for page in 1..=config.pages {
        if page > 1 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tracing::info!(page, "Fetching page");
        match source.fetch_page(config, page).await {
            Ok(results) => {
                pipeline.absorb_page(page, &results)?;
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "Failed to fetch page, continuing");
                pipeline.record_failed_page(page, e.to_string());
            }
        }
    }

    Ok(pipeline)
}
