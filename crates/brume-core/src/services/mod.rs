//! Services orchestrating domain types over injected ports.

mod catalog_service;

pub use catalog_service::CatalogService;
