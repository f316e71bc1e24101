//! Parsers for the free-text numbers that search providers embed in strings.
//!
//! Both parsers are total: malformed input yields `0` or `None`, never an error.
//! Only ASCII digits count as digits; other Unicode digits are treated as text.

use regex::Regex;
use std::sync::LazyLock;

static RE_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)([KMB]?)\+?").unwrap());

static RE_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(\.[0-9]+)?").unwrap());

/// Approximate a unit count from text like `"10K+ bought in past month"`.
///
/// Only the first number is used. `K`, `M` and `B` scale by 1e3, 1e6 and 1e9;
/// the result is truncated toward zero.
pub fn parse_quantity(text: &str) -> u64 {
    let Some(caps) = RE_QUANTITY.captures(text) else {
        return 0;
    };

    let number: f64 = caps[1].parse().unwrap_or(0.0);
    let multiplier = match caps.get(2).map(|m| m.as_str().to_ascii_uppercase()) {
        Some(suffix) if suffix == "K" => 1_000.0,
        Some(suffix) if suffix == "M" => 1_000_000.0,
        Some(suffix) if suffix == "B" => 1_000_000_000.0,
        _ => 1.0,
    };

    // `as` saturates and truncates toward zero.
    (number * multiplier) as u64
}

/// Extract the first decimal number from a currency string like `"$1,299.99"`.
///
/// Grouping commas inside the number are dropped.
pub fn parse_price_text(text: &str) -> Option<f64> {
    let caps = RE_PRICE.captures(text)?;
    let whole = caps[1].replace(',', "");
    let fraction = caps.get(2).map_or("", |m| m.as_str());
    format!("{whole}{fraction}").parse().ok()
}
