//! Console presentation and JSON snapshot persistence.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use trending::{AnalysisReport, ProductRecord};

const TITLE_WIDTH: usize = 60;

/// Write the report as pretty JSON and return the path written.
///
/// Without an explicit path the file name is timestamped.
pub fn save_report(report: &AnalysisReport, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_file_name(chrono::Local::now())),
    };

    let json = report
        .to_json_pretty()
        .context("Failed to serialize analysis report")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    tracing::info!(path = %path.display(), "Analysis saved");
    Ok(path)
}

pub fn default_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!(
        "smart_home_comprehensive_analysis_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

pub fn print_summary(report: &AnalysisReport, path: &Path) {
    let stats = &report.statistics;
    println!();
    println!("{}", "ANALYSIS SUMMARY".bright_cyan().bold());
    println!("{}", "=".repeat(50));
    println!(
        "Total Unique Products: {}",
        report.analysis_metadata.total_products_found
    );
    println!("Duplicates Removed: {}", report.analysis_metadata.duplicates_removed);
    println!("Average Price: ${:.2}", stats.average_price);
    println!("Average Rating: {:.2}/5.0", stats.average_rating);
    println!(
        "Total Estimated Revenue: ${}",
        format_amount(stats.total_estimated_revenue)
    );
    if !report.run_report.failed_pages.is_empty() {
        let pages: Vec<String> = report
            .run_report
            .failed_pages
            .iter()
            .map(|f| f.page.to_string())
            .collect();
        println!("{}", format!("Failed Pages: {}", pages.join(", ")).bright_yellow());
    }
    println!("Comprehensive JSON saved to: {}", path.display());
}

pub fn print_ranking(title: &str, products: &[ProductRecord], limit: usize) {
    println!();
    println!("{}", "=".repeat(80));
    println!("{}", title.bright_green().bold());
    println!("{}", "=".repeat(80));

    for (i, product) in products.iter().take(limit).enumerate() {
        println!();
        println!("{}. {}", i + 1, truncate_title(product.title()));
        println!("   ASIN: {}", product.identifier());
        println!(
            "   Page: {}, Position: {}",
            product.page_found(),
            product.position()
        );
        println!("   Price: {}", or_na(product.price().map(|p| format!("${p:.2}"))));
        println!("   Rating: {}", or_na(product.rating().map(|r| format!("{r:.1}/5.0"))));
        println!(
            "   Reviews: {}",
            or_na(product.review_count().map(group_thousands))
        );
        println!(
            "   Sold Last Month: {}",
            or_na(product.sold_last_month().map(str::to_string))
        );
        let revenue = product.revenue_estimate();
        println!(
            "   Est. Revenue: {}",
            or_na((revenue > 0.0).then(|| format!("${}", format_amount(revenue))))
        );
        println!("   Trending Score: {:.1}", product.trending_score());
    }
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_WIDTH {
        return title.to_string();
    }
    let head: String = title.chars().take(TITLE_WIDTH).collect();
    format!("{head}...")
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234567.891` -> `"1,234,567.89"`
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as u64;
    format!("{}.{:02}", group_thousands(cents / 100), cents % 100)
}
