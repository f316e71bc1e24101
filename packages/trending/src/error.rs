//! Typed errors for the trending library.
//!
//! Field and record problems are never errors here: they resolve to absent
//! values or to a [`SkipReason`] collected in the run report.

use serde::Serialize;
use thiserror::Error;

/// Caller contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendingError {
    /// Page numbers start at 1
    #[error("invalid page number: {0}")]
    InvalidPageNumber(u32),

    /// Pages must be absorbed in strictly increasing order
    #[error("page {page} absorbed after page {last}")]
    PageOutOfOrder { page: u32, last: u32 },
}

/// Why a raw result entry produced no product record.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The entry is not a key/value mapping
    #[error("entry is not an object (found {found})")]
    NotAnObject { found: String },

    /// The entry is a mapping but carries none of the product fields
    #[error("entry has no recognised product fields")]
    NoUsableFields,
}

/// Result type alias for trending operations.
pub type Result<T> = std::result::Result<T, TrendingError>;
