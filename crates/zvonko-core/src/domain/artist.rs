use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::ArtistId;

/// Titular de la cuenta del portal.
///
/// Es puramente descriptivo: ninguna lógica del núcleo lo transforma, solo
/// se muestra en la cabecera del panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  pub id: ArtistId,

  /// Nombre público del artista o sello.
  pub name: String,

  /// Correo de contacto.
  pub email: String,

  /// Referencia a la imagen de perfil.
  pub avatar_url: String,

  pub bio: String,

  /// Redes sociales: red → usuario (`"instagram" → "@cvdence"`).
  #[serde(default)]
  pub social_links: BTreeMap<String, String>,
}

impl Artist {
  /// Primera letra del nombre, usada cuando no carga el avatar.
  pub fn initial(&self) -> Option<char> {
    self.name.chars().next()
  }
}
