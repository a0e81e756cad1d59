//! Package domain types.

use serde::Serialize;

/// Companion integrity-check descriptor for a package download.
///
/// The catalog supplies the descriptor location and size as a pair, so they
/// are modelled as one composite value: a `Package` either has a complete
/// integrity manifest or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityManifest {
    /// URL of the integrity-check descriptor.
    pub location: String,
    /// Size of the descriptor in bytes.
    pub size_bytes: u64,
}

/// One downloadable file belonging to a product.
///
/// Immutable once constructed. Packages are owned by the product that lists
/// them and carry no back-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// URL of the downloadable file.
    pub location: String,
    /// Expected transfer size in bytes. `0` is a valid sentinel, used for
    /// the synthetic distribution-manifest entry whose size is unknown.
    pub size_bytes: u64,
    /// Integrity-check descriptor, when the catalog supplies one.
    pub integrity_manifest: Option<IntegrityManifest>,
}

/// Flat export view of a [`Package`] for machine-readable output.
///
/// The integrity fields are omitted from serialized output when the package
/// carries no integrity manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageExport {
    /// URL of the downloadable file.
    pub location: String,
    /// Expected transfer size in bytes.
    pub size_bytes: u64,
    /// URL of the integrity-check descriptor, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity_manifest_location: Option<String>,
    /// Size of the integrity-check descriptor in bytes, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity_manifest_size_bytes: Option<u64>,
}

impl Package {
    /// Create a new package.
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        size_bytes: u64,
        integrity_manifest: Option<IntegrityManifest>,
    ) -> Self {
        Self {
            location: location.into(),
            size_bytes,
            integrity_manifest,
        }
    }

    /// Last path component of the package location.
    ///
    /// Used to label the downloaded file and to order download plans.
    #[must_use]
    pub fn filename(&self) -> &str {
        self.location.rsplit('/').next().unwrap_or_default()
    }

    /// Flat export view of this package.
    #[must_use]
    pub fn export_projection(&self) -> PackageExport {
        PackageExport {
            location: self.location.clone(),
            size_bytes: self.size_bytes,
            integrity_manifest_location: self
                .integrity_manifest
                .as_ref()
                .map(|manifest| manifest.location.clone()),
            integrity_manifest_size_bytes: self
                .integrity_manifest
                .as_ref()
                .map(|manifest| manifest.size_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_last_path_component() {
        let package = Package::new(
            "https://example.com/content/downloads/InstallAssistant.pkg",
            42,
            None,
        );
        assert_eq!(package.filename(), "InstallAssistant.pkg");
    }

    #[test]
    fn test_filename_without_separator_is_whole_location() {
        let package = Package::new("InstallAssistant.pkg", 42, None);
        assert_eq!(package.filename(), "InstallAssistant.pkg");
    }

    #[test]
    fn test_export_projection_includes_integrity_pair() {
        let package = Package::new(
            "https://example.com/a.pkg",
            100,
            Some(IntegrityManifest {
                location: "https://example.com/a.integrityDataV1".to_string(),
                size_bytes: 336,
            }),
        );

        let export = package.export_projection();
        assert_eq!(export.location, "https://example.com/a.pkg");
        assert_eq!(export.size_bytes, 100);
        assert_eq!(
            export.integrity_manifest_location.as_deref(),
            Some("https://example.com/a.integrityDataV1")
        );
        assert_eq!(export.integrity_manifest_size_bytes, Some(336));
    }

    #[test]
    fn test_export_projection_omits_absent_integrity_fields() {
        let package = Package::new("https://example.com/a.pkg", 100, None);

        let value = serde_json::to_value(package.export_projection()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("location"));
        assert!(object.contains_key("size_bytes"));
        assert!(!object.contains_key("integrity_manifest_location"));
        assert!(!object.contains_key("integrity_manifest_size_bytes"));
    }
}
