use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::dates::parse_iso_timestamp;
use super::ids::ReleaseId;
use super::release_status::ReleaseStatus;

/// Representa un lanzamiento tal como lo gestiona el portal de distribución.
///
/// A diferencia de una biblioteca local, aquí el release es el producto que
/// se envía a las plataformas: lleva su UPC, los territorios donde se
/// distribuye y la lista de plataformas de destino.
///
/// Dentro del núcleo es inmutable: no hay operaciones de edición.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
  /// Identificador único dentro de la colección cargada.
  pub id: ReleaseId,

  /// Título tal como aparece en las plataformas. Nunca vacío.
  pub title: String,

  /// Referencia a la portada.
  pub cover_url: String,

  /// Universal Product Code, solo dígitos.
  pub upc: String,

  /// Fecha de salida en las plataformas (ISO 8601).
  ///
  /// Se guarda como `String` porque así llega del proveedor; se interpreta
  /// bajo demanda con [`Release::released_at`].
  pub release_date: String,

  /// Fecha de alta en el portal (ISO 8601).
  pub created_date: String,

  /// Texto libre con los territorios de distribución.
  pub territories: String,

  /// Plataformas de destino. El orden solo importa al mostrarlas.
  pub platforms: Vec<String>,

  /// Género en texto libre.
  pub genre: String,

  pub status: ReleaseStatus,

  /// Nombre del artista a mostrar, si difiere del dueño de la cuenta.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub artist_name: Option<String>,
}

impl Release {
  /// Instante de salida; `None` si la fecha no es ISO 8601 válida.
  pub fn released_at(&self) -> Option<NaiveDateTime> {
    parse_iso_timestamp(&self.release_date)
  }

  pub fn created_at(&self) -> Option<NaiveDateTime> {
    parse_iso_timestamp(&self.created_date)
  }

  /// `true` si el release se distribuye en `platform` (comparación exacta).
  pub fn is_on_platform(&self, platform: &str) -> bool {
    self.platforms.iter().any(|p| p == platform)
  }
}
