use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Estado editorial de un lanzamiento dentro del portal de distribución.
///
/// El ciclo habitual es `Draft` → `Moderation` → `Pending` → `Published`,
/// aunque el núcleo no impone transiciones: solo clasifica y etiqueta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
  /// Ya disponible en las plataformas.
  Published,
  /// Aprobado, esperando su fecha de salida.
  Pending,
  /// En revisión por el equipo de moderación.
  Moderation,
  /// Borrador sin enviar.
  Draft,
}

impl ReleaseStatus {
  pub const ALL: [ReleaseStatus; 4] =
    [ReleaseStatus::Published, ReleaseStatus::Pending, ReleaseStatus::Moderation, ReleaseStatus::Draft];

  /// Clave estable usada en datos y configuración (`"published"`, ...).
  pub fn as_str(&self) -> &'static str {
    match self {
      ReleaseStatus::Published => "published",
      ReleaseStatus::Pending => "pending",
      ReleaseStatus::Moderation => "moderation",
      ReleaseStatus::Draft => "draft",
    }
  }

  /// Etiqueta que ve el artista en la insignia del release.
  pub fn label(&self) -> &'static str {
    match self {
      ReleaseStatus::Published => "Опубликован",
      ReleaseStatus::Pending => "Ожидает выхода",
      ReleaseStatus::Moderation => "На модерации",
      ReleaseStatus::Draft => "Черновик",
    }
  }

  /// Un release pendiente cuenta como "próximo lanzamiento".
  pub fn is_upcoming(&self) -> bool {
    matches!(self, ReleaseStatus::Pending)
  }
}

/// Error producido cuando una cadena no corresponde a ningún [`ReleaseStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid release status: {input}")]
pub struct StatusParseError {
  pub input: String,
}

impl FromStr for ReleaseStatus {
  type Err = StatusParseError;

  /// Acepta la clave en cualquier combinación de mayúsculas y con espacios
  /// alrededor. A diferencia de otros campos libres, aquí un valor
  /// desconocido sí es un error.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase();

    ReleaseStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == normalized)
      .ok_or_else(|| StatusParseError { input: s.to_string() })
  }
}

impl fmt::Display for ReleaseStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.label())
  }
}
