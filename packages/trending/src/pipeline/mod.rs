//! The trending pipeline.
//!
//! Pages flow through:
//! - Extraction (raw items → typed records, per page)
//! - Accumulation (cross-page deduplication, first seen wins)
//! - Derivation (revenue estimate, trending score)
//! - Ranking and statistics (once, over the full collection)

pub mod accumulate;
pub mod derive;
pub mod extract;
pub mod rank;
pub mod run;
pub mod stats;

pub use accumulate::{Accumulator, DuplicateRecord, PageMerge};
pub use derive::{revenue_estimate, trending_score};
pub use extract::{
    extract_page, extract_record, ExtractedRecord, FieldIssue, PageExtraction, SkippedRecord,
};
pub use rank::{rank_by_rating, rank_by_reviews, rank_by_revenue, rank_by_trending_score, Rankings};
pub use run::{Analysis, FailedPage, RunReport, TrendingPipeline};
pub use stats::Statistics;
