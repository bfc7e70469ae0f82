use serde::{Deserialize, Serialize};

use crate::domain::StatPoint;

/// Totales acumulados de la serie de estadísticas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatTotals {
  pub total_streams: u64,
  pub total_downloads: u64,
}

/// Suma escuchas y descargas de toda la serie. Una serie vacía da `{0, 0}`.
pub fn aggregate_stats(stats: &[StatPoint]) -> StatTotals {
  stats.iter().fold(StatTotals::default(), |acc, point| StatTotals {
    total_streams: acc.total_streams.saturating_add(point.streams),
    total_downloads: acc.total_downloads.saturating_add(point.downloads),
  })
}
