//! Run driver: feeds pages through extraction and accumulation, then
//! computes rankings and statistics once over the full collection.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::pipeline::accumulate::{Accumulator, DuplicateRecord, PageMerge};
use crate::pipeline::extract::{extract_page, FieldIssue, SkippedRecord};
use crate::pipeline::rank::Rankings;
use crate::pipeline::stats::Statistics;
use crate::types::product::ProductRecord;

/// A page the caller could not fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPage {
    pub page: u32,
    pub reason: String,
}

/// Everything that was dropped or degraded during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// Pages successfully absorbed, in order
    pub pages_absorbed: Vec<u32>,

    /// Pages the caller reported as failed
    pub failed_pages: Vec<FailedPage>,

    /// Raw entries that produced no record
    pub skipped: Vec<SkippedRecord>,

    /// Fields that were present but unusable
    pub field_issues: Vec<FieldIssue>,

    /// Records dropped as duplicates
    pub duplicates: Vec<DuplicateRecord>,
}

impl RunReport {
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when nothing was skipped and no page failed.
    pub fn is_clean(&self) -> bool {
        self.failed_pages.is_empty() && self.skipped.is_empty()
    }
}

/// Final output of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub products: Vec<ProductRecord>,
    pub rankings: Rankings,
    pub statistics: Statistics,
    pub run_report: RunReport,
}

impl Analysis {
    /// Rank and summarize an already accumulated collection.
    pub fn from_products(products: Vec<ProductRecord>, run_report: RunReport) -> Self {
        Self {
            rankings: Rankings::compute(&products),
            statistics: Statistics::compute(&products),
            products,
            run_report,
        }
    }
}

/// Single-run pipeline state.
///
/// ```rust,ignore
/// let mut pipeline = TrendingPipeline::new();
/// for (page, results) in pages {
///     pipeline.absorb_page(page, &results)?;
/// }
/// let analysis = pipeline.finish();
/// ```
#[derive(Debug, Default)]
pub struct TrendingPipeline {
    accumulator: Accumulator,
    report: RunReport,
}

impl TrendingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract one raw results page and merge it into the collection.
    pub fn absorb_page(&mut self, page: u32, results: &Value) -> Result<PageMerge> {
        self.accumulator.ensure_next_page(page)?;

        let extraction = extract_page(results, page);
        let found = extraction.records.len();
        self.report.skipped.extend(extraction.skipped);
        self.report.field_issues.extend(extraction.field_issues);

        let merge = self.accumulator.absorb(page, extraction.records)?;
        self.report.pages_absorbed.push(page);
        self.report.duplicates.extend(merge.duplicates.iter().cloned());

        info!(
            page,
            found,
            added = merge.added,
            duplicates = merge.duplicates.len(),
            "Page absorbed"
        );

        Ok(merge)
    }

    /// Note that `page` could not be fetched. The run continues without it.
    pub fn record_failed_page(&mut self, page: u32, reason: impl Into<String>) {
        self.report.failed_pages.push(FailedPage {
            page,
            reason: reason.into(),
        });
    }

    pub fn products(&self) -> &[ProductRecord] {
        self.accumulator.products()
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn finish(self) -> Analysis {
        Analysis::from_products(self.accumulator.into_products(), self.report)
    }
}
