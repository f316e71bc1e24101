//! Configuration for one trending analysis run.

use serde::{Deserialize, Serialize};

/// Parameters describing what was searched and how results are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Human-readable label written into the report metadata.
    pub category_label: String,

    /// Marketplace domain, e.g. `amazon.com`.
    pub amazon_domain: String,

    /// Result language, e.g. `en_US`.
    pub language: String,

    /// Provider sort key. Default: best sellers.
    pub sort: String,

    /// Browse node id of the category. Default: Smart Home.
    pub node: String,

    /// Number of result pages to request, starting at 1.
    pub pages: u32,

    /// How many records each ranking keeps in the report.
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            category_label: "Smart Home Best Sellers".to_string(),
            amazon_domain: "amazon.com".to_string(),
            language: "en_US".to_string(),
            sort: "exact-aware-popularity-rank".to_string(),
            node: "6563140011".to_string(),
            pages: 3,
            top_n: 10,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = label.into();
        self
    }

    pub fn with_amazon_domain(mut self, domain: impl Into<String>) -> Self {
        self.amazon_domain = domain.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
