use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::KNOWN_PLATFORMS;

/// Valor centinela del filtro que deja pasar todas las plataformas.
pub const ALL_PLATFORMS: &str = "all";

/// Filtro por plataforma del catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformFilter {
  #[default]
  All,
  /// Nombre exacto de la plataforma; distingue mayúsculas.
  Only(String),
}

impl PlatformFilter {
  pub fn only(name: impl Into<String>) -> Self {
    PlatformFilter::Only(name.into())
  }

  pub fn as_str(&self) -> &str {
    match self {
      PlatformFilter::All => ALL_PLATFORMS,
      PlatformFilter::Only(name) => name,
    }
  }

  /// Texto de la opción en el selector.
  pub fn label(&self) -> &str {
    match self {
      PlatformFilter::All => "Все площадки",
      PlatformFilter::Only(name) => name,
    }
  }
}

impl FromStr for PlatformFilter {
  type Err = Infallible;

  /// Solo el centinela exacto `"all"` significa "todas". Cualquier otra
  /// cadena es un nombre de plataforma, aunque no exista.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(PlatformFilter::from(s.to_string()))
  }
}

impl From<String> for PlatformFilter {
  fn from(s: String) -> Self {
    if s == ALL_PLATFORMS { PlatformFilter::All } else { PlatformFilter::Only(s) }
  }
}

impl From<PlatformFilter> for String {
  fn from(filter: PlatformFilter) -> Self {
    match filter {
      PlatformFilter::All => ALL_PLATFORMS.to_string(),
      PlatformFilter::Only(name) => name,
    }
  }
}

impl fmt::Display for PlatformFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Opciones del selector de plataforma: "todas" primero y luego las conocidas.
pub fn platform_options() -> Vec<PlatformFilter> {
  std::iter::once(PlatformFilter::All)
    .chain(KNOWN_PLATFORMS.iter().map(|p| PlatformFilter::only(*p)))
    .collect()
}

/// Criterio de orden del catálogo. Ambos criterios de fecha son descendentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
  /// Más recientes en el portal primero.
  #[default]
  CreatedDate,
  /// Próximas salidas primero.
  ReleaseDate,
  /// Conserva el orden de entrada.
  Unsorted,
}

impl SortKey {
  pub fn as_str(&self) -> &'static str {
    match self {
      SortKey::CreatedDate => "created_date",
      SortKey::ReleaseDate => "release_date",
      SortKey::Unsorted => "unsorted",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      SortKey::CreatedDate => "Дата создания",
      SortKey::ReleaseDate => "Дата релиза",
      SortKey::Unsorted => "Без сортировки",
    }
  }
}

impl FromStr for SortKey {
  type Err = Infallible;

  /// Acepta tanto `snake_case` como `camelCase`. Un valor desconocido no es
  /// un error: deja el catálogo sin reordenar.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = match s.trim() {
      "created_date" | "createdDate" => SortKey::CreatedDate,
      "release_date" | "releaseDate" => SortKey::ReleaseDate,
      _ => SortKey::Unsorted,
    };
    Ok(key)
  }
}

impl From<String> for SortKey {
  fn from(s: String) -> Self {
    let Ok(key) = s.parse::<SortKey>();
    key
  }
}

impl From<SortKey> for String {
  fn from(key: SortKey) -> Self {
    key.as_str().to_string()
  }
}

impl fmt::Display for SortKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Parámetros de consulta del catálogo.
///
/// Sustituye al estado de vista global: quien renderiza construye un
/// `CatalogQuery` y lo pasa explícitamente a [`super::filter_and_sort`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
  #[serde(default)]
  pub search_text: String,
  #[serde(default)]
  pub platform_filter: PlatformFilter,
  #[serde(default)]
  pub sort_key: SortKey,
}

impl CatalogQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn search(mut self, text: impl Into<String>) -> Self {
    self.search_text = text.into();
    self
  }

  pub fn platform(mut self, filter: PlatformFilter) -> Self {
    self.platform_filter = filter;
    self
  }

  pub fn sort_by(mut self, key: SortKey) -> Self {
    self.sort_key = key;
    self
  }
}
