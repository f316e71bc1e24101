//! Pure SerpApi REST API client.
//!
//! A minimal client for the SerpApi search endpoint. Only the `amazon` engine
//! is wrapped. Responses are returned as raw JSON because result items are
//! heterogeneous and callers decide which fields they trust.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::{AmazonSearchParams, SerpApiClient};
//!
//! let client = SerpApiClient::new("your-api-key".into());
//! let params = AmazonSearchParams::new("amazon.com", "en_US")
//!     .with_node("6563140011")
//!     .with_page(2);
//!
//! let page = client.amazon_search(&params).await?;
//! println!("{}", page["organic_results"].as_array().map_or(0, Vec::len));
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SerpApiError};
pub use types::{AmazonSearchParams, SearchMetadata};

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

const BASE_URL: &str = "https://serpapi.com";

pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (proxies, local fixtures).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetch one page of Amazon results.
    pub async fn amazon_search(&self, params: &AmazonSearchParams) -> Result<Value> {
        let url = format!("{}/search.json", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("engine", "amazon"),
                ("api_key", self.api_key.expose_secret()),
            ])
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        check_provider_error(&value)?;

        let metadata = search_metadata(&value);
        tracing::debug!(
            search_id = metadata.id.as_deref().unwrap_or("-"),
            status = metadata.status.as_deref().unwrap_or("-"),
            page = params.page,
            total_time_taken = metadata.total_time_taken,
            "SerpApi search completed"
        );

        Ok(value)
    }
}

/// SerpApi reports some failures inside a 200 response.
fn check_provider_error(value: &Value) -> Result<()> {
    match value.get("error") {
        Some(Value::String(message)) => Err(SerpApiError::Provider(message.clone())),
        Some(Value::Null) | None => Ok(()),
        Some(other) => Err(SerpApiError::Provider(other.to_string())),
    }
}

fn search_metadata(value: &Value) -> SearchMetadata {
    value
        .get("search_metadata")
        .cloned()
        .and_then(|m| serde_json::from_value(m).ok())
        .unwrap_or_default()
}
