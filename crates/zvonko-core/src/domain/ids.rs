use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de un artista dentro del portal.
///
/// El portal asigna identificadores numéricos secuenciales, así que el
/// newtype envuelve directamente un `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(u64);

impl ArtistId {
  pub const fn new(raw: u64) -> Self {
    ArtistId(raw)
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de un lanzamiento (`Release`).
///
/// Es único dentro de la colección cargada en cada momento; el núcleo no
/// genera IDs, solo los recibe del proveedor de datos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseId(u64);

impl ReleaseId {
  pub const fn new(raw: u64) -> Self {
    ReleaseId(raw)
  }
}

impl fmt::Display for ReleaseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
