pub mod data;

use async_trait::async_trait;
use tracing::trace;

use zvonko_core::domain::{Artist, PlatformShare, Release, StatPoint};
use zvonko_core::ports::{CatalogProvider, ProviderError};

/// Implementación de `CatalogProvider` con datos fijos en memoria.
///
/// Ocupa el lugar del futuro cliente del API del portal. Nunca falla.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
  async fn load_artist(&self) -> Result<Artist, ProviderError> {
    trace!("serving static artist");
    Ok(data::artist())
  }

  async fn load_releases(&self) -> Result<Vec<Release>, ProviderError> {
    trace!("serving static releases");
    Ok(data::releases())
  }

  async fn load_stats(&self) -> Result<Vec<StatPoint>, ProviderError> {
    trace!("serving static stats");
    Ok(data::stats())
  }

  async fn load_platform_shares(&self) -> Result<Vec<PlatformShare>, ProviderError> {
    Ok(data::platform_shares())
  }
}
