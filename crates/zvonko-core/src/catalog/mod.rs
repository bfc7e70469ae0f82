//! Vista del catálogo: funciones puras sobre las colecciones ya cargadas.

mod filter;
mod query;
mod stats;

pub use filter::{filter_and_sort, upcoming_count};
pub use query::{ALL_PLATFORMS, CatalogQuery, PlatformFilter, SortKey, platform_options};
pub use stats::{StatTotals, aggregate_stats};
