//! Catalog service - compatibility filtering and projections over products.

use std::sync::Arc;

use crate::domain::{Package, Product, ProductExport, ProductSummary};
use crate::ports::HardwareProbePort;

/// Service answering catalog queries for the current host.
///
/// This service binds an injected hardware probe to the pure product
/// predicates so callers do not carry host identifiers around themselves.
/// It adds no business logic beyond what the domain provides - it's a
/// thin facade.
pub struct CatalogService {
    probe: Arc<dyn HardwareProbePort>,
}

impl CatalogService {
    /// Create a new catalog service with the given hardware probe.
    #[must_use]
    pub fn new(probe: Arc<dyn HardwareProbePort>) -> Self {
        Self { probe }
    }

    /// Filter products down to those compatible with the current host.
    ///
    /// Input order is preserved.
    pub fn compatible_products<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let host = self.probe.host_identifiers();
        products
            .iter()
            .filter(|product| {
                let compatible = product.is_compatible(&host);
                if !compatible {
                    tracing::debug!(
                        identifier = %product.identifier,
                        build = %product.build,
                        "product incompatible with host"
                    );
                }
                compatible
            })
            .collect()
    }

    /// Listing views of the given products for the current host.
    pub fn summaries(&self, products: &[Product]) -> Vec<ProductSummary> {
        let host = self.probe.host_identifiers();
        products
            .iter()
            .map(|product| product.summary_projection(&host))
            .collect()
    }

    /// Export views of the given products for the current host.
    pub fn exports(&self, products: &[Product]) -> Vec<ProductExport> {
        let host = self.probe.host_identifiers();
        products
            .iter()
            .map(|product| product.export_projection(&host))
            .collect()
    }

    /// Ordered fetch plan for one product.
    pub fn download_plan(&self, product: &Product) -> Vec<Package> {
        product.all_downloads()
    }
}
