//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (network, filesystem, hardware probing).
//!
//! # Structure
//!
//! - `package` - Downloadable file types (`Package`, `IntegrityManifest`)
//! - `product` - Installable product type and its derived properties

mod package;
mod product;

// Re-export domain types at the domain level for convenience
pub use package::{IntegrityManifest, Package, PackageExport};
pub use product::{Product, ProductExport, ProductSummary};
