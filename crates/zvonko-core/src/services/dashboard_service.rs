use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{CatalogQuery, StatTotals, aggregate_stats, filter_and_sort, upcoming_count};
use crate::domain::{Artist, PlatformShare, Release, StatPoint};
use crate::errors::CoreError;
use crate::ports::{CatalogProvider, ProviderError};

pub struct DashboardService<P>
where
  P: CatalogProvider,
{
  provider: P,
}

impl<P> DashboardService<P>
where
  P: CatalogProvider,
{
  pub fn new(provider: P) -> Self {
    Self { provider }
  }

  /// Carga todas las colecciones del panel desde el proveedor.
  ///
  /// - `DataUnavailable` en una colección → colección vacía (se registra un warn).
  /// - `DataUnavailable` en el artista → el panel se muestra sin cabecera.
  /// - `Internal` en cualquier llamada → se propaga como [`CoreError`].
  pub async fn load(&self) -> Result<Dashboard, CoreError> {
    let artist = match self.provider.load_artist().await {
      Ok(artist) => Some(artist),
      Err(ProviderError::DataUnavailable(reason)) => {
        warn!(%reason, "artist unavailable, rendering without header");
        None
      }
      Err(e) => return Err(e.into()),
    };

    let releases = or_empty("releases", self.provider.load_releases().await)?;
    let stats = or_empty("stats", self.provider.load_stats().await)?;
    let platform_shares = or_empty("platform shares", self.provider.load_platform_shares().await)?;

    info!(
      releases = releases.len(),
      stats = stats.len(),
      platforms = platform_shares.len(),
      "dashboard loaded"
    );

    Ok(Dashboard { artist, releases, stats, platform_shares })
  }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, ProviderError>) -> Result<Vec<T>, CoreError> {
  match result {
    Ok(items) => Ok(items),
    Err(ProviderError::DataUnavailable(reason)) => {
      warn!(collection = what, %reason, "collection unavailable, treating as empty");
      Ok(Vec::new())
    }
    Err(e) => Err(e.into()),
  }
}

/// Colecciones del panel, cargadas una vez y de solo lectura.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
  pub artist: Option<Artist>,
  pub releases: Vec<Release>,
  pub stats: Vec<StatPoint>,
  pub platform_shares: Vec<PlatformShare>,
}

impl Dashboard {
  /// Calcula la vista para una consulta. Se puede llamar tantas veces como
  /// cambie la consulta; no guarda nada entre llamadas.
  pub fn view(&self, query: &CatalogQuery) -> DashboardView<'_> {
    let releases = filter_and_sort(&self.releases, query);

    DashboardView {
      artist: self.artist.as_ref(),
      release_count: releases.len(),
      releases,
      totals: aggregate_stats(&self.stats),
      stats: &self.stats,
      platform_shares: &self.platform_shares,
      upcoming: upcoming_count(&self.releases),
      query: query.clone(),
    }
  }
}

/// Resultado listo para pintar: lo que ve el artista para una consulta dada.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView<'a> {
  pub artist: Option<&'a Artist>,
  pub releases: Vec<&'a Release>,
  /// Releases visibles tras filtrar.
  pub release_count: usize,
  pub totals: StatTotals,
  pub stats: &'a [StatPoint],
  pub platform_shares: &'a [PlatformShare],
  /// Releases pendientes en toda la colección, sin aplicar filtros.
  pub upcoming: usize,
  pub query: CatalogQuery,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{PlatformFilter, SortKey};
  use crate::domain::{ArtistId, ReleaseId, ReleaseStatus};
  use async_trait::async_trait;

  #[derive(Clone, Copy)]
  enum Failure {
    None,
    Unavailable,
    Internal,
  }

  struct FakeProvider {
    releases: Failure,
    artist: Failure,
  }

  impl FakeProvider {
    fn healthy() -> Self {
      Self { releases: Failure::None, artist: Failure::None }
    }
  }

  fn fail<T>(failure: Failure, ok: T) -> Result<T, ProviderError> {
    match failure {
      Failure::None => Ok(ok),
      Failure::Unavailable => Err(ProviderError::DataUnavailable("offline".to_string())),
      Failure::Internal => Err(ProviderError::Internal("boom".to_string())),
    }
  }

  fn release(id: u64, title: &str, created: &str, status: ReleaseStatus) -> Release {
    Release {
      id: ReleaseId::new(id),
      title: title.to_string(),
      cover_url: String::new(),
      upc: format!("00000000000{id}"),
      release_date: created.to_string(),
      created_date: created.to_string(),
      territories: String::new(),
      platforms: vec!["Spotify".to_string()],
      genre: String::new(),
      status,
      artist_name: None,
    }
  }

  #[async_trait]
  impl CatalogProvider for FakeProvider {
    async fn load_artist(&self) -> Result<Artist, ProviderError> {
      let artist = Artist {
        id: ArtistId::new(1),
        name: "tester".to_string(),
        email: "tester@example.com".to_string(),
        avatar_url: String::new(),
        bio: String::new(),
        social_links: Default::default(),
      };
      fail(self.artist, artist)
    }

    async fn load_releases(&self) -> Result<Vec<Release>, ProviderError> {
      let releases = vec![
        release(1, "first", "2025-01-01", ReleaseStatus::Published),
        release(2, "second", "2025-03-01", ReleaseStatus::Pending),
      ];
      fail(self.releases, releases)
    }

    async fn load_stats(&self) -> Result<Vec<StatPoint>, ProviderError> {
      Ok(vec![StatPoint::new("2025-11-10", 10, 2), StatPoint::new("2025-11-11", 5, 1)])
    }

    async fn load_platform_shares(&self) -> Result<Vec<PlatformShare>, ProviderError> {
      Ok(vec![PlatformShare::new("Spotify", 100, "#1DB954")])
    }
  }

  #[tokio::test]
  async fn builds_view_from_provider() {
    let service = DashboardService::new(FakeProvider::healthy());
    let dashboard = service.load().await.unwrap();

    let view = dashboard.view(&CatalogQuery::new().sort_by(SortKey::CreatedDate));

    assert_eq!(view.artist.map(|a| a.name.as_str()), Some("tester"));
    assert_eq!(view.release_count, 2);
    assert_eq!(view.releases[0].title, "second");
    assert_eq!(view.totals, StatTotals { total_streams: 15, total_downloads: 3 });
    assert_eq!(view.upcoming, 1);
    assert_eq!(view.platform_shares.len(), 1);
  }

  #[tokio::test]
  async fn unavailable_releases_become_empty() {
    let provider = FakeProvider { releases: Failure::Unavailable, artist: Failure::None };
    let dashboard = DashboardService::new(provider).load().await.unwrap();

    let view = dashboard.view(&CatalogQuery::new());

    assert!(view.releases.is_empty());
    assert_eq!(view.upcoming, 0);
    assert_eq!(view.totals.total_streams, 15);
  }

  #[tokio::test]
  async fn unavailable_artist_is_none() {
    let provider = FakeProvider { releases: Failure::None, artist: Failure::Unavailable };
    let dashboard = DashboardService::new(provider).load().await.unwrap();

    assert!(dashboard.artist.is_none());
    assert_eq!(dashboard.releases.len(), 2);
  }

  #[tokio::test]
  async fn internal_errors_propagate() {
    let provider = FakeProvider { releases: Failure::Internal, artist: Failure::None };
    let err = DashboardService::new(provider).load().await.unwrap_err();

    assert!(matches!(err, CoreError::Provider(ProviderError::Internal(_))));
  }

  #[tokio::test]
  async fn view_reflects_each_query() {
    let dashboard = DashboardService::new(FakeProvider::healthy()).load().await.unwrap();

    let none = dashboard.view(&CatalogQuery::new().platform(PlatformFilter::only("Deezer")));
    assert_eq!(none.release_count, 0);
    assert_eq!(none.upcoming, 1);

    let found = dashboard.view(&CatalogQuery::new().search("FIRST"));
    assert_eq!(found.release_count, 1);
    assert_eq!(found.query.search_text, "FIRST");
  }

  #[tokio::test]
  async fn view_serializes_to_json() {
    let dashboard = DashboardService::new(FakeProvider::healthy()).load().await.unwrap();
    let view = dashboard.view(&CatalogQuery::new());

    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["release_count"], 2);
    assert_eq!(json["totals"]["total_downloads"], 3);
    assert_eq!(json["releases"][0]["status"], "pending");
    assert_eq!(json["query"]["platform_filter"], "all");
  }
}
