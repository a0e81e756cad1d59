//! Software-update catalog wire contracts.
//!
//! These DTOs carry the verbatim key names of the software-update catalog
//! data and cross the boundary between the catalog decode step and the
//! core domain. Domain types stay wire-agnostic; only this module knows
//! the catalog's spelling.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{IntegrityManifest, Package, Product};

/// Errors that can occur while decoding catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog data was not valid JSON or did not match the expected
    /// product shape.
    #[error("Failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One package entry as it appears in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPackage {
    /// URL of the downloadable file.
    #[serde(rename = "URL")]
    pub url: String,
    /// Expected transfer size in bytes.
    #[serde(rename = "Size")]
    pub size: u64,
    /// URL of the companion integrity-check descriptor, when supplied.
    #[serde(rename = "IntegrityDataURL", default)]
    pub integrity_data_url: Option<String>,
    /// Size of the integrity-check descriptor, when supplied.
    #[serde(rename = "IntegrityDataSize", default)]
    pub integrity_data_size: Option<u64>,
}

/// One product entry as it appears in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogProduct {
    /// Catalog identifier.
    #[serde(rename = "Identifier")]
    pub identifier: String,
    /// Display name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Version string.
    #[serde(rename = "Version")]
    pub version: String,
    /// Build string.
    #[serde(rename = "Build")]
    pub build: String,
    /// Release date, passed through verbatim.
    #[serde(rename = "PostDate")]
    pub post_date: String,
    /// URL of the top-level distribution manifest.
    #[serde(rename = "DistributionURL")]
    pub distribution_url: String,
    /// Constituent packages, in catalog order.
    #[serde(rename = "Packages", default)]
    pub packages: Vec<CatalogPackage>,
    /// Supported board IDs; may be empty.
    #[serde(rename = "BoardIDs", default)]
    pub board_ids: Vec<String>,
    /// Supported device IDs; may be empty.
    #[serde(rename = "DeviceIDs", default)]
    pub device_ids: Vec<String>,
    /// Explicitly unsupported model identifiers; may be empty.
    #[serde(rename = "UnsupportedModels", default)]
    pub unsupported_models: Vec<String>,
}

impl From<CatalogPackage> for Package {
    fn from(raw: CatalogPackage) -> Self {
        // The catalog supplies the integrity fields as a pair; an unpaired
        // key is a producer error and is dropped rather than half-kept.
        let integrity_manifest = raw
            .integrity_data_url
            .zip(raw.integrity_data_size)
            .map(|(location, size_bytes)| IntegrityManifest {
                location,
                size_bytes,
            });
        Self::new(raw.url, raw.size, integrity_manifest)
    }
}

impl From<CatalogProduct> for Product {
    fn from(raw: CatalogProduct) -> Self {
        Self {
            identifier: raw.identifier,
            name: raw.name,
            version: raw.version,
            build: raw.build,
            release_date: raw.post_date,
            distribution_location: raw.distribution_url,
            packages: raw.packages.into_iter().map(Package::from).collect(),
            board_ids: raw.board_ids,
            device_ids: raw.device_ids,
            unsupported_model_identifiers: raw.unsupported_models,
        }
    }
}

/// Decode a JSON array of catalog product entries into domain products.
pub fn parse_products(json: &str) -> Result<Vec<Product>, CatalogError> {
    let raw: Vec<CatalogProduct> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(Product::from).collect())
}
