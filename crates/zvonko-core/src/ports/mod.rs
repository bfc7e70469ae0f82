pub mod catalog;

pub use catalog::{CatalogProvider, ProviderError};
