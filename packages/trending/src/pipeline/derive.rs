//! Derived metrics: revenue estimate and composite trending score.

use crate::parse::parse_quantity;
use crate::types::product::ProductRecord;

/// Weight of the rating component in the trending score.
pub const RATING_WEIGHT: f64 = 0.4;
/// Weight of the review-count component in the trending score.
pub const REVIEW_WEIGHT: f64 = 0.3;
/// Weight of the revenue component in the trending score.
pub const REVENUE_WEIGHT: f64 = 0.3;

/// `price × units sold`, or `0` when either input is missing or the price is not positive.
pub fn revenue_estimate(price: Option<f64>, sold_last_month: Option<&str>) -> f64 {
    let (Some(price), Some(text)) = (price, sold_last_month) else {
        return 0.0;
    };
    if price.is_nan() || price <= 0.0 {
        return 0.0;
    }

    match parse_quantity(text) {
        0 => 0.0,
        quantity => price * quantity as f64,
    }
}

/// Weighted blend of rating, review count and revenue, each scaled to `[0, 100]`.
///
/// - rating: `rating × 20` (a 5-star product scores 100)
/// - reviews: one point per thousand reviews
/// - revenue: one point per ten thousand of estimated revenue
pub fn trending_score(record: &ProductRecord) -> f64 {
    let rating = component(record.rating().unwrap_or(0.0) * 20.0);
    let reviews = component(record.review_count().unwrap_or(0) as f64 / 1_000.0);
    let revenue = component(record.revenue_estimate() / 10_000.0);

    RATING_WEIGHT * rating + REVIEW_WEIGHT * reviews + REVENUE_WEIGHT * revenue
}

/// Clamp to `[0, 100]`; NaN scores nothing.
fn component(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}
