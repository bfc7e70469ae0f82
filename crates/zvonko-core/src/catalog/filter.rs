use std::cmp::Ordering;

use tracing::debug;

use super::query::{CatalogQuery, PlatformFilter, SortKey};
use crate::domain::Release;

/// Aplica búsqueda, filtro de plataforma y orden a la colección de releases.
///
/// - La búsqueda compara sin distinguir mayúsculas contra título y nombre de
///   artista, y como subcadena literal contra el UPC. Vacía deja pasar todo.
/// - El filtro de plataforma exige coincidencia exacta salvo con
///   [`PlatformFilter::All`].
/// - Ambos filtros se combinan con AND.
/// - El orden por fecha es descendente y estable: los empates conservan el
///   orden de entrada. Las fechas que no se pueden interpretar quedan por
///   detrás de cualquier fecha válida.
///
/// Devuelve referencias a los elementos de `releases`, que no se modifica.
pub fn filter_and_sort<'a>(releases: &'a [Release], query: &CatalogQuery) -> Vec<&'a Release> {
  let needle = query.search_text.to_lowercase();

  let mut visible: Vec<&Release> = releases
    .iter()
    .filter(|release| matches_search(release, &query.search_text, &needle))
    .filter(|release| matches_platform(release, &query.platform_filter))
    .collect();

  match query.sort_key {
    SortKey::CreatedDate => visible.sort_by(|a, b| newest_first(a.created_at(), b.created_at())),
    SortKey::ReleaseDate => visible.sort_by(|a, b| newest_first(a.released_at(), b.released_at())),
    SortKey::Unsorted => {}
  }

  debug!(
    total = releases.len(),
    visible = visible.len(),
    sort = %query.sort_key,
    platform = %query.platform_filter,
    "catalog query evaluated"
  );

  visible
}

/// Número de releases que aparecen en la pestaña de próximos lanzamientos.
pub fn upcoming_count(releases: &[Release]) -> usize {
  releases.iter().filter(|release| release.status.is_upcoming()).count()
}

fn matches_search(release: &Release, raw: &str, needle: &str) -> bool {
  if raw.is_empty() {
    return true;
  }

  release.title.to_lowercase().contains(needle)
    || release.artist_name.as_deref().is_some_and(|name| name.to_lowercase().contains(needle))
    || release.upc.contains(raw)
}

fn matches_platform(release: &Release, filter: &PlatformFilter) -> bool {
  match filter {
    PlatformFilter::All => true,
    PlatformFilter::Only(platform) => release.is_on_platform(platform),
  }
}

// `Option` ordena `None` antes que `Some`, así que invertir la comparación deja
// las fechas inválidas al final.
fn newest_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
  b.cmp(&a)
}
