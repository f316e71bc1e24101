//! Summary statistics over the accumulated collection.

use serde::Serialize;

use crate::types::product::ProductRecord;

/// Counts, averages and totals for one collection.
///
/// Averages only consider records where the value is present and are `0`
/// when no record has it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total_products: usize,
    pub products_with_price: usize,
    pub products_with_rating: usize,
    pub products_with_reviews: usize,
    pub products_with_quantity_data: usize,
    pub average_price: f64,
    pub average_rating: f64,
    pub total_estimated_revenue: f64,
}

impl Statistics {
    pub fn compute(products: &[ProductRecord]) -> Self {
        let prices: Vec<f64> = products.iter().filter_map(ProductRecord::price).collect();
        let ratings: Vec<f64> = products.iter().filter_map(ProductRecord::rating).collect();

        Self {
            total_products: products.len(),
            products_with_price: prices.len(),
            products_with_rating: ratings.len(),
            products_with_reviews: products.iter().filter(|p| p.review_count().is_some()).count(),
            products_with_quantity_data: products
                .iter()
                .filter(|p| p.sold_last_month().is_some())
                .count(),
            average_price: mean(&prices),
            average_rating: mean(&ratings),
            total_estimated_revenue: products.iter().map(ProductRecord::revenue_estimate).sum(),
        }
    }

    /// Copy with averages and totals rounded to cents.
    pub fn rounded(&self) -> Self {
        Self {
            average_price: round2(self.average_price),
            average_rating: round2(self.average_rating),
            total_estimated_revenue: round2(self.total_estimated_revenue),
            ..self.clone()
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_zero_filled() {
        assert_eq!(Statistics::compute(&[]), Statistics::default());
    }

    #[test]
    fn test_counts_and_averages() {
        let products = vec![
            ProductRecord::new("A", 1)
                .with_price(Some(20.0))
                .with_rating(Some(4.5))
                .with_review_count(Some(500))
                .with_sold_last_month(Some("1K+ bought in past month")),
            ProductRecord::new("B", 1)
                .with_price(Some(10.0))
                .with_rating(Some(3.0)),
            ProductRecord::new("C", 2),
        ];

        let stats = Statistics::compute(&products);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.products_with_price, 2);
        assert_eq!(stats.products_with_rating, 2);
        assert_eq!(stats.products_with_reviews, 1);
        assert_eq!(stats.products_with_quantity_data, 1);
        assert_eq!(stats.average_price, 15.0);
        assert_eq!(stats.average_rating, 3.75);
        assert_eq!(stats.total_estimated_revenue, 20_000.0);
    }

    #[test]
    fn test_zero_price_counts_as_present() {
        let products = vec![
            ProductRecord::new("A", 1).with_price(Some(0.0)),
            ProductRecord::new("B", 1).with_price(Some(10.0)),
        ];
        let stats = Statistics::compute(&products);
        assert_eq!(stats.products_with_price, 2);
        assert_eq!(stats.average_price, 5.0);
    }

    #[test]
    fn test_rounded() {
        let stats = Statistics {
            average_price: 19.994,
            average_rating: 4.256,
            total_estimated_revenue: 1234.5678,
            ..Default::default()
        };
        let rounded = stats.rounded();
        assert_eq!(rounded.average_price, 19.99);
        assert_eq!(rounded.average_rating, 4.26);
        assert_eq!(rounded.total_estimated_revenue, 1234.57);
    }
}
