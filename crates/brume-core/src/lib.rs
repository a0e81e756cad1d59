//! Core domain types and port definitions for brume.
//!
//! This crate is the decision logic between a parsed software-update
//! catalog entry and the consumers that show, download, or assemble it:
//! whether a product is compatible with the current host, the ordered
//! fetch plan for its packages, and the derived sizes, names, and
//! projections callers label artifacts with.
//!
//! The crate is pure and stateless. Network retrieval, hardware probing,
//! and installer assembly live in adapters behind the ports defined here.

#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use contracts::{CatalogError, CatalogPackage, CatalogProduct, parse_products};
pub use domain::{
    IntegrityManifest, Package, PackageExport, Product, ProductExport, ProductSummary,
};
pub use ports::{HardwareProbePort, HostIdentifiers};
pub use services::CatalogService;
