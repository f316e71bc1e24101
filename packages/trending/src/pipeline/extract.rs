//! Page extraction: raw provider items to typed product records.
//!
//! Each field is read independently through [`FieldAccess`]; a missing or
//! malformed field becomes an absent value and never affects its neighbours.
//! Entries are skipped only when they are not a mapping or carry none of the
//! product fields.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SkipReason;
use crate::parse::parse_price_text;
use crate::raw::{Field, FieldAccess};
use crate::types::product::{ProductRecord, MAX_RATING};

/// Key holding the item list in a results page.
pub const RESULTS_KEY: &str = "organic_results";

const POSITION: &str = "position";
const ASIN: &str = "asin";
const TITLE: &str = "title";
const EXTRACTED_PRICE: &str = "extracted_price";
const PRICE: &str = "price";
const RATING: &str = "rating";
const REVIEWS: &str = "reviews";
const BOUGHT_LAST_MONTH: &str = "bought_last_month";
const LINK: &str = "link";
const THUMBNAIL: &str = "thumbnail";

const PRODUCT_FIELDS: [&str; 10] = [
    POSITION,
    ASIN,
    TITLE,
    EXTRACTED_PRICE,
    PRICE,
    RATING,
    REVIEWS,
    BOUGHT_LAST_MONTH,
    LINK,
    THUMBNAIL,
];

/// A raw entry that produced no record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub page: u32,
    /// Index of the entry within the page's result list.
    pub index: usize,
    pub reason: SkipReason,
}

/// A field that was present but unusable and was treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub page: u32,
    pub index: usize,
    pub field: &'static str,
}

/// A record plus the names of fields that had to be dropped while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRecord {
    pub record: ProductRecord,
    pub invalid_fields: Vec<&'static str>,
}

/// Everything extracted from one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageExtraction {
    pub records: Vec<ProductRecord>,
    pub skipped: Vec<SkippedRecord>,
    pub field_issues: Vec<FieldIssue>,
}

/// Extract every processable entry of one results page.
///
/// A page without a result list yields nothing.
pub fn extract_page(results: &Value, page: u32) -> PageExtraction {
    let mut extraction = PageExtraction::default();

    let Some(items) = results.get(RESULTS_KEY).and_then(Value::as_array) else {
        debug!(page, "No {} in page", RESULTS_KEY);
        return extraction;
    };

    for (index, item) in items.iter().enumerate() {
        match extract_record(item, page) {
            Ok(extracted) => {
                for field in extracted.invalid_fields {
                    debug!(page, index, field, "Unusable field treated as absent");
                    extraction.field_issues.push(FieldIssue { page, index, field });
                }
                extraction.records.push(extracted.record);
            }
            Err(reason) => {
                warn!(page, index, %reason, "Skipping result entry");
                extraction.skipped.push(SkippedRecord {
                    page,
                    index,
                    reason,
                });
            }
        }
    }

    extraction
}

/// Extract a single raw entry.
pub fn extract_record(item: &Value, page: u32) -> Result<ExtractedRecord, SkipReason> {
    let Value::Object(map) = item else {
        return Err(SkipReason::NotAnObject {
            found: json_kind(item).to_string(),
        });
    };

    if !PRODUCT_FIELDS.iter().any(|field| map.contains(field)) {
        return Err(SkipReason::NoUsableFields);
    }

    Ok(extract_fields(map, page))
}

fn extract_fields(item: &impl FieldAccess, page: u32) -> ExtractedRecord {
    let mut invalid = Vec::new();

    let position = note(&mut invalid, POSITION, item.integer(POSITION))
        .and_then(|p| u32::try_from(p).ok())
        .unwrap_or(0);

    let identifier = note(&mut invalid, ASIN, item.text(ASIN)).unwrap_or_default();
    let title = note(&mut invalid, TITLE, item.text(TITLE)).unwrap_or_default();
    let price = extract_price(item, &mut invalid);

    let rating = note(&mut invalid, RATING, item.number(RATING));
    let rating = match rating {
        Some(r) if (0.0..=MAX_RATING).contains(&r) => Some(r),
        Some(_) => {
            invalid.push(RATING);
            None
        }
        None => None,
    };

    let review_count = note(&mut invalid, REVIEWS, item.integer(REVIEWS));
    let review_count = match review_count.map(u64::try_from) {
        Some(Ok(n)) => Some(n),
        Some(Err(_)) => {
            invalid.push(REVIEWS);
            None
        }
        None => None,
    };

    let sold_last_month = note(&mut invalid, BOUGHT_LAST_MONTH, item.text(BOUGHT_LAST_MONTH));
    let link = note(&mut invalid, LINK, item.text(LINK)).unwrap_or_default();
    let thumbnail = note(&mut invalid, THUMBNAIL, item.text(THUMBNAIL)).unwrap_or_default();

    let record = ProductRecord::new(identifier, page)
        .with_position(position)
        .with_title(title)
        .with_price(price)
        .with_rating(rating)
        .with_review_count(review_count)
        .with_sold_last_month(sold_last_month)
        .with_source_link(link)
        .with_thumbnail_url(thumbnail);

    ExtractedRecord {
        record,
        invalid_fields: invalid,
    }
}

/// Prefer the provider's pre-parsed price; fall back to the display string.
fn extract_price(item: &impl FieldAccess, invalid: &mut Vec<&'static str>) -> Option<f64> {
    match item.number(EXTRACTED_PRICE) {
        Field::Present(price) if price >= 0.0 => return Some(price + 0.0),
        Field::Present(_) | Field::Invalid => invalid.push(EXTRACTED_PRICE),
        Field::Absent => {}
    }

    note(invalid, PRICE, item.text(PRICE)).and_then(|text| parse_price_text(&text))
}

fn note<T>(invalid: &mut Vec<&'static str>, name: &'static str, field: Field<T>) -> Option<T> {
    if field.is_invalid() {
        invalid.push(name);
    }
    field.present()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{raw_item, results_page};
    use serde_json::json;

    #[test]
    fn test_extracts_all_fields() {
        let page = results_page([raw_item("B0001")
            .position(3)
            .title("Smart Plug")
            .extracted_price(24.99)
            .rating(4.6)
            .reviews(12_345)
            .bought("5K+ bought in past month")
            .link("https://www.amazon.com/dp/B0001")
            .thumbnail("https://m.media-amazon.com/B0001.jpg")
            .build()]);

        let extraction = extract_page(&page, 2);
        assert_eq!(extraction.records.len(), 1);
        assert!(extraction.skipped.is_empty());
        assert!(extraction.field_issues.is_empty());

        let record = &extraction.records[0];
        assert_eq!(record.position(), 3);
        assert_eq!(record.identifier(), "B0001");
        assert_eq!(record.title(), "Smart Plug");
        assert_eq!(record.price(), Some(24.99));
        assert_eq!(record.rating(), Some(4.6));
        assert_eq!(record.review_count(), Some(12_345));
        assert_eq!(record.sold_last_month(), Some("5K+ bought in past month"));
        assert!((record.revenue_estimate() - 124_950.0).abs() < 1e-6);
        assert_eq!(record.source_link(), "https://www.amazon.com/dp/B0001");
        assert_eq!(record.thumbnail_url(), "https://m.media-amazon.com/B0001.jpg");
        assert_eq!(record.page_found(), 2);
    }

    #[test]
    fn test_price_falls_back_to_display_string() {
        let page = results_page([raw_item("B0002").price_text("$19.99").build()]);
        let extraction = extract_page(&page, 1);
        assert_eq!(extraction.records[0].price(), Some(19.99));
    }

    #[test]
    fn test_extracted_price_preferred_over_display_string() {
        let page = results_page([raw_item("B0003")
            .extracted_price(9.5)
            .price_text("$12.00")
            .build()]);
        let extraction = extract_page(&page, 1);
        assert_eq!(extraction.records[0].price(), Some(9.5));
    }

    #[test]
    fn test_unparseable_price_is_absent_not_zero() {
        let page = results_page([raw_item("B0004").price_text("See options").build()]);
        let extraction = extract_page(&page, 1);
        assert_eq!(extraction.records[0].price(), None);
    }

    #[test]
    fn test_malformed_field_does_not_block_others() {
        let page = results_page([json!({
            "asin": "B0005",
            "title": "Doorbell",
            "rating": "excellent",
            "reviews": [1, 2],
            "extracted_price": 30.0,
            "bought_last_month": "1K+ bought in past month"
        })]);

        let extraction = extract_page(&page, 1);
        let record = &extraction.records[0];
        assert_eq!(record.rating(), None);
        assert_eq!(record.review_count(), None);
        assert_eq!(record.price(), Some(30.0));
        assert_eq!(record.revenue_estimate(), 30_000.0);

        let fields: Vec<_> = extraction.field_issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec![RATING, REVIEWS]);
    }

    #[test]
    fn test_out_of_range_values_are_absent() {
        let page = results_page([json!({
            "asin": "B0006",
            "rating": 7.5,
            "reviews": -3,
            "position": -1
        })]);

        let extraction = extract_page(&page, 1);
        let record = &extraction.records[0];
        assert_eq!(record.rating(), None);
        assert_eq!(record.review_count(), None);
        assert_eq!(record.position(), 0);
    }

    #[test]
    fn test_negative_zero_values_tie_with_absent() {
        use crate::pipeline::rank::Rankings;

        let page = results_page([
            raw_item("FIRST")
                .rating(-0.0)
                .extracted_price(-0.0)
                .bought("1K+ bought in past month")
                .build(),
            raw_item("SECOND").build(),
        ]);

        let extraction = extract_page(&page, 1);
        assert!(extraction.field_issues.is_empty());
        let first = &extraction.records[0];
        assert!(first.rating().is_some_and(f64::is_sign_positive));
        assert!(first.price().is_some_and(f64::is_sign_positive));
        assert!(first.revenue_estimate().is_sign_positive());

        let rankings = Rankings::compute(&extraction.records);
        let ids = |ranked: &[ProductRecord]| -> Vec<String> {
            ranked.iter().map(|p| p.identifier().to_string()).collect()
        };
        assert_eq!(ids(&rankings.by_rating), ["FIRST", "SECOND"]);
        assert_eq!(ids(&rankings.by_revenue), ["FIRST", "SECOND"]);
        assert_eq!(ids(&rankings.by_trending), ["FIRST", "SECOND"]);
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let page = results_page([json!({ "asin": "B0007", "rating": "4.0", "reviews": "250" })]);
        let record = &extract_page(&page, 1).records[0];
        assert_eq!(record.rating(), Some(4.0));
        assert_eq!(record.review_count(), Some(250));
    }

    #[test]
    fn test_non_object_entries_skipped_page_continues() {
        let page = results_page([
            json!("not a product"),
            json!({}),
            raw_item("B0008").build(),
        ]);

        let extraction = extract_page(&page, 4);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].identifier(), "B0008");
        assert_eq!(
            extraction.skipped,
            vec![
                SkippedRecord {
                    page: 4,
                    index: 0,
                    reason: SkipReason::NotAnObject {
                        found: "string".to_string()
                    },
                },
                SkippedRecord {
                    page: 4,
                    index: 1,
                    reason: SkipReason::NoUsableFields,
                },
            ]
        );
    }

    #[test]
    fn test_record_without_identifier_is_kept() {
        let page = results_page([json!({ "position": 1, "title": "Unbranded hub" })]);
        let extraction = extract_page(&page, 1);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].identifier(), "");
    }

    #[test]
    fn test_page_without_results_is_empty() {
        assert_eq!(extract_page(&json!({}), 1), PageExtraction::default());
        assert_eq!(
            extract_page(&json!({ "organic_results": null }), 1),
            PageExtraction::default()
        );
    }
}
