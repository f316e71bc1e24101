//! Cross-page accumulation with identifier-based deduplication.
//!
//! The first record seen for an identifier wins; later records with the same
//! identifier are dropped without reconciling fields. Records with an empty
//! identifier cannot be deduplicated and are always kept.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::error::{Result, TrendingError};
use crate::types::product::ProductRecord;

/// A record dropped because its identifier was already accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    pub page: u32,
    pub identifier: String,
}

/// Outcome of merging one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMerge {
    pub page: u32,
    pub added: usize,
    pub duplicates: Vec<DuplicateRecord>,
}

/// Ordered, deduplicated product collection built one page at a time.
#[derive(Debug, Default)]
pub struct Accumulator {
    products: Vec<ProductRecord>,
    seen: HashSet<String>,
    last_page: Option<u32>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `page` may be absorbed next.
    pub fn ensure_next_page(&self, page: u32) -> Result<()> {
        if page == 0 {
            return Err(TrendingError::InvalidPageNumber(page));
        }
        match self.last_page {
            Some(last) if page <= last => Err(TrendingError::PageOutOfOrder { page, last }),
            _ => Ok(()),
        }
    }

    /// Append the records of `page` that are not duplicates.
    pub fn absorb(&mut self, page: u32, records: Vec<ProductRecord>) -> Result<PageMerge> {
        self.ensure_next_page(page)?;
        self.last_page = Some(page);

        let mut added = 0;
        let mut duplicates = Vec::new();

        for record in records {
            let identifier = record.identifier();
            if !identifier.is_empty() && !self.seen.insert(identifier.to_string()) {
                debug!(page, identifier, "Duplicate found");
                duplicates.push(DuplicateRecord {
                    page,
                    identifier: identifier.to_string(),
                });
                continue;
            }
            self.products.push(record);
            added += 1;
        }

        Ok(PageMerge {
            page,
            added,
            duplicates,
        })
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.seen.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn into_products(self) -> Vec<ProductRecord> {
        self.products
    }
}
