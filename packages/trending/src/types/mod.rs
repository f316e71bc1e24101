//! Data types for the trending library.

pub mod config;
pub mod product;
