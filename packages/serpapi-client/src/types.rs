use serde::{Deserialize, Serialize};

/// Query parameters for the `amazon` engine.
///
/// `engine` and `api_key` are added by the client.
#[derive(Debug, Clone, Serialize)]
pub struct AmazonSearchParams {
    pub amazon_domain: String,
    pub language: String,
    /// Sort order, e.g. `exact-aware-popularity-rank` for best sellers.
    #[serde(rename = "s", skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Browse node (category) id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    pub page: u32,
}

impl AmazonSearchParams {
    pub fn new(amazon_domain: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            amazon_domain: amazon_domain.into(),
            language: language.into(),
            sort: None,
            node: None,
            page: 1,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// The `search_metadata` block SerpApi attaches to every response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMetadata {
    pub id: Option<String>,
    pub status: Option<String>,
    pub total_time_taken: Option<f64>,
}
