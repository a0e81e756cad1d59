//! Product domain type and its derived properties.
//!
//! A [`Product`] is the read-only view of one installable software release
//! from the software-update catalog: identifying metadata, the distribution
//! manifest location, the packages making up the installer, and the hardware
//! identifier lists used for compatibility filtering. Every derived property
//! is a pure function recomputed on access; nothing is cached or mutated
//! after construction.

use std::path::PathBuf;

use serde::Serialize;

use super::package::{Package, PackageExport};
use crate::ports::HostIdentifiers;

/// One gibibyte, the unit the installer image estimate is rounded to.
const GIB: u64 = 1 << 30;

/// An installable software product from the update catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Catalog identifier (e.g. "012-34567").
    pub identifier: String,
    /// Display name (e.g. "macOS Monterey").
    pub name: String,
    /// Version string (e.g. "12.0.1").
    pub version: String,
    /// Build string (e.g. "21A559").
    pub build: String,
    /// Release date, passed through verbatim from the catalog.
    pub release_date: String,
    /// URL of the top-level distribution manifest.
    pub distribution_location: String,
    /// Constituent packages, in catalog order.
    pub packages: Vec<Package>,
    /// Board IDs this product supports (Intel boot ROM). Empty means the
    /// check does not apply.
    pub board_ids: Vec<String>,
    /// Device IDs this product supports (Apple silicon or Intel T2). Empty
    /// means the check does not apply.
    pub device_ids: Vec<String>,
    /// Model identifiers this product explicitly does not support. Empty
    /// means the check does not apply.
    pub unsupported_model_identifiers: Vec<String>,
}

/// Minimal view of a product for listing and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub identifier: String,
    pub name: String,
    pub version: String,
    pub build: String,
    pub size_bytes: u64,
    pub release_date: String,
    pub compatible: bool,
}

/// Full view of a product for machine-readable export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductExport {
    pub identifier: String,
    pub name: String,
    pub version: String,
    pub build: String,
    pub size_bytes: u64,
    pub release_date: String,
    pub compatible: bool,
    pub distribution_location: String,
    /// Per-package detail, in catalog order.
    pub packages: Vec<PackageExport>,
    pub beta: bool,
}

impl Product {
    /// Whether this product can be installed on the described host.
    ///
    /// Three independent exclusion checks, each skipped when its identifier
    /// list is empty or the host value is unavailable — absent data means
    /// "this check does not apply", never incompatibility:
    ///
    /// 1. a known host board ID missing from a non-empty board-ID list,
    /// 2. a known host device ID missing from a non-empty device-ID list,
    /// 3. a known host model identifier present in a non-empty
    ///    unsupported-model list.
    ///
    /// Any single match is sufficient to declare the product incompatible.
    #[must_use]
    pub fn is_compatible(&self, host: &HostIdentifiers) -> bool {
        // Board ID (Intel)
        if !self.board_ids.is_empty() {
            if let Some(board_id) = host.board_id.as_deref() {
                if !self.board_ids.iter().any(|id| id == board_id) {
                    return false;
                }
            }
        }

        // Device ID (Apple silicon or Intel T2)
        if !self.device_ids.is_empty() {
            if let Some(device_id) = host.device_id.as_deref() {
                if !self.device_ids.iter().any(|id| id == device_id) {
                    return false;
                }
            }
        }

        // Model identifier deny list
        if !self.unsupported_model_identifiers.is_empty() {
            if let Some(model_identifier) = host.model_identifier.as_deref() {
                if self
                    .unsupported_model_identifiers
                    .iter()
                    .any(|id| id == model_identifier)
                {
                    return false;
                }
            }
        }

        true
    }

    /// Complete ordered fetch plan for this product.
    ///
    /// A synthetic entry for the distribution manifest (size 0, no integrity
    /// metadata) comes first; it is fetched to discover the real package
    /// list, so its size is not known in advance. The constituent packages
    /// follow in ascending filename order, giving callers a deterministic
    /// plan regardless of catalog order.
    #[must_use]
    pub fn all_downloads(&self) -> Vec<Package> {
        let mut downloads = Vec::with_capacity(self.packages.len() + 1);
        downloads.push(Package::new(self.distribution_location.clone(), 0, None));

        let mut packages = self.packages.clone();
        packages.sort_by(|a, b| a.filename().cmp(b.filename()));
        downloads.extend(packages);
        downloads
    }

    /// Aggregate transfer size of all constituent packages, in bytes.
    #[must_use]
    pub fn total_size_bytes(&self) -> u64 {
        self.packages.iter().map(|package| package.size_bytes).sum()
    }

    /// Conservative size, in bytes, for pre-allocating an installer disk
    /// image: the total package size rounded up to whole gibibytes, plus
    /// one gibibyte of slack for filesystem overhead.
    #[must_use]
    pub fn estimated_image_size_bytes(&self) -> u64 {
        (self.total_size_bytes().div_ceil(GIB) + 1) * GIB
    }

    /// Whether this is a non-final build.
    ///
    /// Apple build numbers append a trailing lowercase letter for beta
    /// builds (e.g. "21A5248p").
    #[must_use]
    pub fn is_beta(&self) -> bool {
        self.build
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_lowercase())
    }

    /// Whether this product's installer exceeds the package payload size
    /// ceiling and must be distributed as a disk image instead.
    ///
    /// True for major versions 11 through 19, matching the literal version
    /// prefixes `"11."` through `"19."`.
    #[must_use]
    pub fn is_too_large_for_package_payload(&self) -> bool {
        matches!(self.version.as_bytes(), [b'1', b'1'..=b'9', b'.', ..])
    }

    /// Well-known path of the assembled installer application.
    #[must_use]
    pub fn installer_application_path(&self) -> PathBuf {
        PathBuf::from(format!("/Applications/Install {}.app", self.name))
    }

    /// Deterministic archive filename for this product,
    /// `Install-{name}-{version}-{build}.zip` with spaces hyphenated.
    #[must_use]
    pub fn archive_file_name(&self) -> String {
        format!("Install {} {} {}.zip", self.name, self.version, self.build).replace(' ', "-")
    }

    /// Minimal listing view of this product for the described host.
    #[must_use]
    pub fn summary_projection(&self, host: &HostIdentifiers) -> ProductSummary {
        ProductSummary {
            identifier: self.identifier.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            build: self.build.clone(),
            size_bytes: self.total_size_bytes(),
            release_date: self.release_date.clone(),
            compatible: self.is_compatible(host),
        }
    }

    /// Full export view of this product for the described host.
    #[must_use]
    pub fn export_projection(&self, host: &HostIdentifiers) -> ProductExport {
        ProductExport {
            identifier: self.identifier.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            build: self.build.clone(),
            size_bytes: self.total_size_bytes(),
            release_date: self.release_date.clone(),
            compatible: self.is_compatible(host),
            distribution_location: self.distribution_location.clone(),
            packages: self
                .packages
                .iter()
                .map(Package::export_projection)
                .collect(),
            beta: self.is_beta(),
        }
    }
}
