//! Wire-shape contracts for external data.
//!
//! This module owns the spelling of data crossing the core's boundary.
//! Keep these serde-only with no domain logic to avoid dependency creep.

pub mod catalog;

pub use catalog::{CatalogError, CatalogPackage, CatalogProduct, parse_products};
