//! Ranked views over the accumulated collection.
//!
//! Every ranking is a descending, stable sort of a copy of the collection:
//! ties keep collection order and the collection itself is never reordered.

use serde::Serialize;
use std::cmp::Reverse;

use crate::types::product::ProductRecord;

/// Descending by review count, absent counts as 0.
pub fn rank_by_reviews(products: &[ProductRecord]) -> Vec<ProductRecord> {
    let mut ranked = products.to_vec();
    ranked.sort_by_key(|p| Reverse(p.review_count().unwrap_or(0)));
    ranked
}

/// Descending by rating, absent counts as 0.
pub fn rank_by_rating(products: &[ProductRecord]) -> Vec<ProductRecord> {
    rank_by_score(products, |p| p.rating().unwrap_or(0.0))
}

/// Descending by estimated revenue.
pub fn rank_by_revenue(products: &[ProductRecord]) -> Vec<ProductRecord> {
    rank_by_score(products, ProductRecord::revenue_estimate)
}

/// Descending by composite trending score.
pub fn rank_by_trending_score(products: &[ProductRecord]) -> Vec<ProductRecord> {
    rank_by_score(products, ProductRecord::trending_score)
}

fn rank_by_score(
    products: &[ProductRecord],
    score: impl Fn(&ProductRecord) -> f64,
) -> Vec<ProductRecord> {
    let mut scored: Vec<(f64, &ProductRecord)> =
        products.iter().map(|p| (score(p) + 0.0, p)).collect();
    // `sort_by` is stable, so equal scores keep collection order.
    // `+ 0.0` above folds `-0.0` into `0.0` so `total_cmp` treats them as equal.
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, p)| p.clone()).collect()
}

/// The four rankings computed from one collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rankings {
    pub by_reviews: Vec<ProductRecord>,
    pub by_rating: Vec<ProductRecord>,
    pub by_revenue: Vec<ProductRecord>,
    pub by_trending: Vec<ProductRecord>,
}

impl Rankings {
    pub fn compute(products: &[ProductRecord]) -> Self {
        Self {
            by_reviews: rank_by_reviews(products),
            by_rating: rank_by_rating(products),
            by_revenue: rank_by_revenue(products),
            by_trending: rank_by_trending_score(products),
        }
    }

    /// Keep only the first `n` entries of every ranking.
    pub fn top(&self, n: usize) -> Self {
        let head = |ranked: &[ProductRecord]| -> Vec<ProductRecord> {
            ranked.iter().take(n).cloned().collect()
        };
        Self {
            by_reviews: head(&self.by_reviews),
            by_rating: head(&self.by_rating),
            by_revenue: head(&self.by_revenue),
            by_trending: head(&self.by_trending),
        }
    }
}
