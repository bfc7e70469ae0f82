use serde::{Deserialize, Serialize};
use zvonko_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use zvonko_core::catalog::{ALL_PLATFORMS, PlatformFilter, SortKey};

const SECTION: &str = "dashboard";

/// Sección `[dashboard]` de `zvonko.toml`: valores iniciales del panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
  /// Plataforma seleccionada al abrir el panel (`"all"` para todas).
  #[serde(default = "default_platform")]
  pub default_platform: String,

  /// Orden inicial: `created_date` o `release_date`.
  #[serde(default = "default_sort")]
  pub default_sort: String,

  /// Nivel de log cuando `RUST_LOG` no está definido.
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

fn default_platform() -> String {
  ALL_PLATFORMS.to_string()
}

fn default_sort() -> String {
  SortKey::CreatedDate.as_str().to_string()
}

fn default_log_level() -> String {
  "warn".to_string()
}

impl Default for DashboardConfig {
  fn default() -> Self {
    DashboardConfig {
      default_platform: default_platform(),
      default_sort: default_sort(),
      log_level: default_log_level(),
    }
  }
}

impl DashboardConfig {
  /// Carga la sección usando el backend global y la vuelve a escribir, de
  /// modo que el archivo siempre muestra todas las claves disponibles.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: DashboardConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn platform_filter(&self) -> PlatformFilter {
    PlatformFilter::from(self.default_platform.clone())
  }

  pub fn sort_key(&self) -> SortKey {
    SortKey::from(self.default_sort.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;
  use zvonko_config::ZvonkoPaths;

  #[test]
  fn missing_file_is_created_with_defaults() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(ZvonkoPaths::portable(tmp.path()).unwrap());

    let cfg = DashboardConfig::load_from(&backend).unwrap();

    assert_eq!(cfg, DashboardConfig::default());
    let written = std::fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(written.contains("[dashboard]"));
    assert!(written.contains("default_sort = \"created_date\""));
  }

  #[test]
  fn partial_section_fills_missing_keys() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(ZvonkoPaths::portable(tmp.path()).unwrap());
    std::fs::write(backend.paths().config_file(), "[dashboard]\ndefault_platform = \"Deezer\"\n").unwrap();

    let cfg = DashboardConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.platform_filter(), PlatformFilter::only("Deezer"));
    assert_eq!(cfg.sort_key(), SortKey::CreatedDate);
    assert_eq!(cfg.log_level, "warn");
  }

  #[test]
  fn user_values_survive_the_rewrite() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(ZvonkoPaths::portable(tmp.path()).unwrap());
    std::fs::write(
      backend.paths().config_file(),
      "[dashboard]\ndefault_platform = \"Apple Music\"\ndefault_sort = \"release_date\"\nlog_level = \"debug\"\n",
    )
    .unwrap();

    let first = DashboardConfig::load_from(&backend).unwrap();
    let second = DashboardConfig::load_from(&backend).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.platform_filter(), PlatformFilter::only("Apple Music"));
    assert_eq!(second.sort_key(), SortKey::ReleaseDate);
    assert_eq!(second.log_level, "debug");
  }

  #[test]
  fn defaults_map_to_widest_query() {
    let cfg = DashboardConfig::default();

    assert_eq!(cfg.platform_filter(), PlatformFilter::All);
    assert_eq!(cfg.sort_key(), SortKey::CreatedDate);
  }
}
