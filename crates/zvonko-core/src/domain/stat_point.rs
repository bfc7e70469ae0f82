use serde::{Deserialize, Serialize};

use super::dates::{numeric_ru_label, parse_iso_date, short_ru_label};

/// Escuchas y descargas agregadas de un día.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPoint {
  /// Día (ISO 8601). No se exige unicidad.
  pub date: String,
  pub streams: u64,
  pub downloads: u64,
}

impl StatPoint {
  pub fn new(date: impl Into<String>, streams: u64, downloads: u64) -> Self {
    Self { date: date.into(), streams, downloads }
  }

  /// Etiqueta corta del eje X (`10 нояб.`). Si la fecha no se puede
  /// interpretar se devuelve tal cual.
  pub fn chart_label(&self) -> String {
    parse_iso_date(&self.date).map(short_ru_label).unwrap_or_else(|| self.date.clone())
  }

  /// Etiqueta completa del tooltip (`10.11.2025`).
  pub fn tooltip_label(&self) -> String {
    parse_iso_date(&self.date).map(numeric_ru_label).unwrap_or_else(|| self.date.clone())
  }
}
