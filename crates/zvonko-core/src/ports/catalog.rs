use async_trait::async_trait;

use crate::domain::{Artist, PlatformShare, Release, StatPoint};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
  /// La fuente no pudo producir la colección (red caída, archivo ausente...).
  #[error("data unavailable: {0}")]
  DataUnavailable(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Port que abstrae de dónde salen los datos del panel.
///
/// Hoy lo implementan datos estáticos; una implementación real (HTTP, base
/// de datos) puede sustituirla sin tocar el filtrado ni los agregados.
///
/// Cada método se llama una sola vez por carga del panel y puede fallar de
/// forma independiente de los demás.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
  async fn load_artist(&self) -> Result<Artist, ProviderError>;
  async fn load_releases(&self) -> Result<Vec<Release>, ProviderError>;
  async fn load_stats(&self) -> Result<Vec<StatPoint>, ProviderError>;
  async fn load_platform_shares(&self) -> Result<Vec<PlatformShare>, ProviderError>;
}
