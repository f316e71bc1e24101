//! The product record produced by extraction.

use serde::Serialize;

use crate::pipeline::derive::{revenue_estimate, trending_score};

/// Highest rating a provider can give.
pub const MAX_RATING: f64 = 5.0;

/// `value` if it lies in `[0, max]`, with `-0.0` folded into `0.0`.
fn non_negative(value: f64, max: f64) -> Option<f64> {
    (value.is_finite() && (0.0..=max).contains(&value)).then_some(value + 0.0)
}

/// One discovered product.
///
/// Records are immutable once built. `revenue_estimate` is recomputed by the
/// builder methods that touch its inputs and cannot be set directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    position: u32,
    #[serde(rename = "asin")]
    identifier: String,
    title: String,
    price: Option<f64>,
    rating: Option<f64>,
    #[serde(rename = "reviews")]
    review_count: Option<u64>,
    #[serde(rename = "bought_last_month")]
    sold_last_month: Option<String>,
    revenue_estimate: f64,
    #[serde(rename = "link")]
    source_link: String,
    #[serde(rename = "thumbnail")]
    thumbnail_url: String,
    page_found: u32,
}

impl ProductRecord {
    /// Create a record with only its identity fields set.
    pub fn new(identifier: impl Into<String>, page_found: u32) -> Self {
        Self {
            position: 0,
            identifier: identifier.into(),
            title: String::new(),
            price: None,
            rating: None,
            review_count: None,
            sold_last_month: None,
            revenue_estimate: 0.0,
            source_link: String::new(),
            thumbnail_url: String::new(),
            page_found,
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the price. Negative or non-finite prices are stored as absent.
    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price.and_then(|p| non_negative(p, f64::MAX));
        self.refresh_revenue();
        self
    }

    /// Set the rating. Values outside `[0, 5]` are stored as absent.
    pub fn with_rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating.and_then(|r| non_negative(r, MAX_RATING));
        self
    }

    pub fn with_review_count(mut self, review_count: Option<u64>) -> Self {
        self.review_count = review_count;
        self
    }

    /// Set the recent-sales text. Empty text is stored as absent.
    pub fn with_sold_last_month(mut self, text: Option<impl Into<String>>) -> Self {
        self.sold_last_month = text.map(Into::into).filter(|t: &String| !t.is_empty());
        self.refresh_revenue();
        self
    }

    pub fn with_source_link(mut self, link: impl Into<String>) -> Self {
        self.source_link = link.into();
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = url.into();
        self
    }

    fn refresh_revenue(&mut self) {
        self.revenue_estimate = revenue_estimate(self.price, self.sold_last_month.as_deref());
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Provider product code. Empty when the provider sent none.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn review_count(&self) -> Option<u64> {
        self.review_count
    }

    pub fn sold_last_month(&self) -> Option<&str> {
        self.sold_last_month.as_deref()
    }

    pub fn revenue_estimate(&self) -> f64 {
        self.revenue_estimate
    }

    pub fn source_link(&self) -> &str {
        &self.source_link
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn page_found(&self) -> u32 {
        self.page_found
    }

    /// Composite score in `[0, 100]` used by the trending ranking.
    pub fn trending_score(&self) -> f64 {
        trending_score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_follows_price_and_sales_text() {
        let record = ProductRecord::new("A1", 1)
            .with_price(Some(20.0))
            .with_sold_last_month(Some("1K+ bought in past month"));
        assert_eq!(record.revenue_estimate(), 20_000.0);

        let record = record.with_price(None);
        assert_eq!(record.revenue_estimate(), 0.0);
    }

    #[test]
    fn test_invalid_price_and_rating_are_absent() {
        let record = ProductRecord::new("X", 1)
            .with_price(Some(-5.0))
            .with_sold_last_month(Some("1K+"))
            .with_rating(Some(f64::NAN));
        assert_eq!(record.price(), None);
        assert_eq!(record.rating(), None);
        assert_eq!(record.revenue_estimate(), 0.0);
        assert_eq!(record.trending_score(), 0.0);

        let record = ProductRecord::new("X", 1)
            .with_price(Some(f64::INFINITY))
            .with_rating(Some(5.5));
        assert_eq!(record.price(), None);
        assert_eq!(record.rating(), None);
    }

    #[test]
    fn test_negative_zero_folded_to_zero() {
        let record = ProductRecord::new("X", 1)
            .with_price(Some(-0.0))
            .with_rating(Some(-0.0))
            .with_sold_last_month(Some("1K+"));
        assert!(record.price().unwrap().is_sign_positive());
        assert!(record.rating().unwrap().is_sign_positive());
        assert!(record.revenue_estimate().is_sign_positive());
    }

    #[test]
    fn test_empty_sales_text_is_absent() {
        let record = ProductRecord::new("A1", 1)
            .with_price(Some(20.0))
            .with_sold_last_month(Some(""));
        assert_eq!(record.sold_last_month(), None);
        assert_eq!(record.revenue_estimate(), 0.0);
    }

    #[test]
    fn test_serializes_with_provider_field_names() {
        let record = ProductRecord::new("B00TEST", 2)
            .with_review_count(Some(12))
            .with_source_link("https://example.com/p");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["asin"], "B00TEST");
        assert_eq!(value["reviews"], 12);
        assert_eq!(value["link"], "https://example.com/p");
        assert_eq!(value["page_found"], 2);
        assert!(value["price"].is_null());
        assert_eq!(value["revenue_estimate"], 0.0);
    }
}
