use serde::{Deserialize, Serialize};

/// Plataformas que ofrece el filtro del catálogo, en el orden del menú.
pub const KNOWN_PLATFORMS: [&str; 4] = ["Spotify", "Apple Music", "YouTube Music", "Deezer"];

/// Porción de las escuchas totales que corresponde a una plataforma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformShare {
  pub name: String,
  /// Porcentaje entero, 0..=100.
  pub percent: u8,
  /// Color del sector en el gráfico (`#RRGGBB`).
  pub color: String,
}

impl PlatformShare {
  pub fn new(name: impl Into<String>, percent: u8, color: impl Into<String>) -> Self {
    Self { name: name.into(), percent: percent.min(100), color: color.into() }
  }

  /// `"Spotify 45%"`
  pub fn label(&self) -> String {
    format!("{} {}%", self.name, self.percent)
  }
}
