//! The structured snapshot handed to the reporting collaborator.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pipeline::rank::Rankings;
use crate::pipeline::run::{Analysis, RunReport};
use crate::pipeline::stats::Statistics;
use crate::types::config::AnalysisConfig;
use crate::types::product::ProductRecord;

/// Search parameters echoed into the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiParameters {
    pub engine: String,
    pub amazon_domain: String,
    pub language: String,
    pub sort: String,
    pub node: String,
    pub pages_analyzed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisMetadata {
    pub analysis_date: DateTime<Utc>,
    pub category: String,
    pub api_parameters: ApiParameters,
    pub total_products_found: usize,
    pub duplicates_removed: usize,
}

/// Rankings truncated to the configured top-N.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingsSnapshot {
    pub top_by_reviews: Vec<ProductRecord>,
    pub top_by_rating: Vec<ProductRecord>,
    pub top_by_revenue: Vec<ProductRecord>,
    pub top_trending: Vec<ProductRecord>,
}

impl From<Rankings> for RankingsSnapshot {
    fn from(rankings: Rankings) -> Self {
        Self {
            top_by_reviews: rankings.by_reviews,
            top_by_rating: rankings.by_rating,
            top_by_revenue: rankings.by_revenue,
            top_trending: rankings.by_trending,
        }
    }
}

/// Full analysis snapshot, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub analysis_metadata: AnalysisMetadata,
    pub statistics: Statistics,
    pub rankings: RankingsSnapshot,
    pub all_products: Vec<ProductRecord>,
    pub run_report: RunReport,
}

impl AnalysisReport {
    pub fn build(
        analysis: &Analysis,
        config: &AnalysisConfig,
        analysis_date: DateTime<Utc>,
    ) -> Self {
        Self {
            analysis_metadata: AnalysisMetadata {
                analysis_date,
                category: config.category_label.clone(),
                api_parameters: ApiParameters {
                    engine: "amazon".to_string(),
                    amazon_domain: config.amazon_domain.clone(),
                    language: config.language.clone(),
                    sort: config.sort.clone(),
                    node: config.node.clone(),
                    pages_analyzed: config.pages,
                },
                total_products_found: analysis.products.len(),
                duplicates_removed: analysis.run_report.duplicate_count(),
            },
            statistics: analysis.statistics.rounded(),
            rankings: analysis.rankings.top(config.top_n).into(),
            all_products: analysis.products.clone(),
            run_report: analysis.run_report.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run::TrendingPipeline;
    use crate::testing::{raw_item, results_page};
    use chrono::TimeZone;

    fn analysis() -> Analysis {
        let mut pipeline = TrendingPipeline::new();
        let items = (1..=12).map(|i| {
            raw_item(&format!("B{i:04}"))
                .position(i)
                .reviews(i as i64 * 10)
                .extracted_price(1.0 / 3.0)
                .build()
        });
        pipeline.absorb_page(1, &results_page(items)).unwrap();
        pipeline
            .absorb_page(2, &results_page([raw_item("B0001").build()]))
            .unwrap();
        pipeline.finish()
    }

    #[test]
    fn test_build_report() {
        let date = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let config = AnalysisConfig::new().with_pages(2).with_top_n(5);
        let report = AnalysisReport::build(&analysis(), &config, date);

        assert_eq!(report.analysis_metadata.total_products_found, 12);
        assert_eq!(report.analysis_metadata.duplicates_removed, 1);
        assert_eq!(report.analysis_metadata.api_parameters.pages_analyzed, 2);
        assert_eq!(report.analysis_metadata.category, "Smart Home Best Sellers");
        assert_eq!(report.rankings.top_by_reviews.len(), 5);
        assert_eq!(report.rankings.top_by_reviews[0].identifier(), "B0012");
        assert_eq!(report.all_products.len(), 12);
        assert_eq!(report.statistics.average_price, 0.33);
    }

    #[test]
    fn test_report_json_shape() {
        let date = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let report = AnalysisReport::build(&analysis(), &AnalysisConfig::default(), date);
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["analysis_metadata"]["analysis_date"], "2025-01-02T03:04:05Z");
        assert_eq!(value["analysis_metadata"]["api_parameters"]["engine"], "amazon");
        assert_eq!(value["statistics"]["products_with_price"], 12);
        assert_eq!(value["rankings"]["top_trending"].as_array().unwrap().len(), 10);
        assert_eq!(value["run_report"]["duplicates"][0]["identifier"], "B0001");
    }
}
