//! Fixture builders for raw provider pages.
//!
//! Useful for testing code that consumes the trending pipeline without
//! calling a real search provider.

use serde_json::{json, Map, Value};

/// Builder for one raw result item in the provider's field names.
#[derive(Debug, Clone, Default)]
pub struct RawItemBuilder {
    fields: Map<String, Value>,
}

/// Start a raw item with the given identifier.
pub fn raw_item(asin: &str) -> RawItemBuilder {
    RawItemBuilder::default().set("asin", json!(asin))
}

impl RawItemBuilder {
    /// Set an arbitrary field.
    pub fn set(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn position(self, position: u32) -> Self {
        self.set("position", json!(position))
    }

    pub fn title(self, title: &str) -> Self {
        self.set("title", json!(title))
    }

    pub fn extracted_price(self, price: f64) -> Self {
        self.set("extracted_price", json!(price))
    }

    /// Display price string, e.g. `"$19.99"`.
    pub fn price_text(self, price: &str) -> Self {
        self.set("price", json!(price))
    }

    pub fn rating(self, rating: f64) -> Self {
        self.set("rating", json!(rating))
    }

    pub fn reviews(self, reviews: i64) -> Self {
        self.set("reviews", json!(reviews))
    }

    pub fn bought(self, text: &str) -> Self {
        self.set("bought_last_month", json!(text))
    }

    pub fn link(self, link: &str) -> Self {
        self.set("link", json!(link))
    }

    pub fn thumbnail(self, url: &str) -> Self {
        self.set("thumbnail", json!(url))
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Wrap items in a results page.
pub fn results_page(items: impl IntoIterator<Item = Value>) -> Value {
    json!({ "organic_results": items.into_iter().collect::<Vec<_>>() })
}

/// A provider error page, as returned with a 200 status.
pub fn error_page(message: &str) -> Value {
    json!({ "error": message })
}
