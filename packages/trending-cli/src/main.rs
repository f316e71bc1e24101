//! Trending products CLI
//!
//! Fetches best-seller pages for one category from SerpApi, ranks the
//! deduplicated products and writes a JSON snapshot.

mod config;
mod fetch;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serpapi_client::SerpApiClient;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trending::{AnalysisConfig, AnalysisReport};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "trending")]
#[command(about = "Rank trending Amazon best sellers from SerpApi results")]
struct Cli {
    /// Number of result pages to fetch
    #[arg(long, default_value_t = 3)]
    pages: u32,

    /// Browse node (category) id
    #[arg(long)]
    node: Option<String>,

    /// Marketplace domain
    #[arg(long)]
    domain: Option<String>,

    /// Result language
    #[arg(long)]
    language: Option<String>,

    /// Provider sort key
    #[arg(long)]
    sort: Option<String>,

    /// Category label written into the report
    #[arg(long)]
    category: Option<String>,

    /// Entries kept per ranking in the report
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Entries printed per ranking
    #[arg(long, default_value_t = 5)]
    console_limit: usize,

    /// Report path (default: timestamped file in the current directory)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn analysis_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new()
            .with_pages(self.pages)
            .with_top_n(self.top);
        if let Some(node) = &self.node {
            config = config.with_node(node);
        }
        if let Some(domain) = &self.domain {
            config = config.with_amazon_domain(domain);
        }
        if let Some(language) = &self.language {
            config = config.with_language(language);
        }
        if let Some(sort) = &self.sort {
            config = config.with_sort(sort);
        }
        if let Some(category) = &self.category {
            config = config.with_category_label(category);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trending=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let analysis_config = cli.analysis_config();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        category = %analysis_config.category_label,
        pages = analysis_config.pages,
        "Starting trending analysis"
    );

    let mut client = SerpApiClient::new(config.serpapi_api_key);
    if let Some(base_url) = config.serpapi_base_url {
        client = client.with_base_url(base_url);
    }

    let pipeline = fetch::collect_pages(&client, &analysis_config, config.page_delay)
        .await
        .context("Failed to collect result pages")?;
    let analysis = pipeline.finish();

    if analysis.products.is_empty() {
        println!(
            "{}",
            "No products found. Please check your API key and try again.".bright_yellow()
        );
        return Ok(());
    }

    tracing::info!(
        products = analysis.products.len(),
        duplicates = analysis.run_report.duplicate_count(),
        skipped = analysis.run_report.skipped_count(),
        "Run complete"
    );

    let report = AnalysisReport::build(&analysis, &analysis_config, chrono::Utc::now());
    let path = output::save_report(&report, cli.output.as_deref())?;

    output::print_summary(&report, &path);
    let limit = cli.console_limit;
    output::print_ranking("TOP BY REVIEWS", &analysis.rankings.by_reviews, limit);
    output::print_ranking("TOP BY RATING", &analysis.rankings.by_rating, limit);
    output::print_ranking("TOP BY REVENUE", &analysis.rankings.by_revenue, limit);
    output::print_ranking("TOP TRENDING", &analysis.rankings.by_trending, limit);

    Ok(())
}
