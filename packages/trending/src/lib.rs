//! Trending Product Analysis
//!
//! Turns a sequence of raw search-result pages into a deduplicated product
//! collection, four rankings and a statistics summary.
//!
//! The library is pure: it performs no I/O and never fails because of bad
//! provider data. Fetching pages, printing and persisting are left to the
//! caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trending::{AnalysisConfig, AnalysisReport, TrendingPipeline};
//!
//! let mut pipeline = TrendingPipeline::new();
//! for (page, results) in fetched_pages {
//!     pipeline.absorb_page(page, &results)?;
//! }
//!
//! let analysis = pipeline.finish();
//! for product in analysis.rankings.by_trending.iter().take(5) {
//!     println!("{} {:.1}", product.title(), product.trending_score());
//! }
//!
//! let report = AnalysisReport::build(&analysis, &AnalysisConfig::default(), chrono::Utc::now());
//! ```
//!
//! # Modules
//!
//! - [`raw`] - Typed read access to raw provider records
//! - [`parse`] - Quantity and price parsers
//! - [`pipeline`] - Extraction, accumulation, derivation, ranking, statistics
//! - [`types`] - Product record and run configuration
//! - [`report`] - Serializable analysis snapshot
//! - [`testing`] - Raw page fixture builders

pub mod error;
pub mod parse;
pub mod pipeline;
pub mod raw;
pub mod report;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use error::{Result, SkipReason, TrendingError};
pub use parse::{parse_price_text, parse_quantity};
pub use raw::{Field, FieldAccess};
pub use report::{AnalysisMetadata, AnalysisReport, ApiParameters, RankingsSnapshot};
pub use types::{config::AnalysisConfig, product::ProductRecord};

pub use pipeline::{
    // Stages
    extract_page, extract_record, revenue_estimate, trending_score,
    // Rankings
    rank_by_rating, rank_by_reviews, rank_by_revenue, rank_by_trending_score,
    // State and outputs
    Accumulator, Analysis, DuplicateRecord, ExtractedRecord, FailedPage, FieldIssue,
    PageExtraction, PageMerge, Rankings, RunReport, SkippedRecord, Statistics, TrendingPipeline,
};
