//! Data loading for the home finance calculators.
//!
//! Currently this is the renovation option catalog, read from CSV into a
//! [`home_core::RenovationCatalog`].

mod loader;

pub use loader::{RenovationCatalogError, RenovationCatalogLoader, RenovationOptionRecord};
