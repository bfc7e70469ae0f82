use crate::io::atomic_write_str;
use crate::paths::{ConfigError, ZvonkoPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

// toml_edit solo para escribir: conserva comentarios y orden del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Backend sobre un único `zvonko.toml` con una sección por componente.
pub struct TomlConfigBackend {
  paths: ZvonkoPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: ZvonkoPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &ZvonkoPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero un archivo o sección ausente
  /// devuelve `T::default()` en lugar de error.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %path.display(), "config file missing, using defaults");
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let root: toml::Table = toml::from_str(&content)?;

    let Some(table) = root.get(section) else {
      debug!(section, "config section missing, using defaults");
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let root: toml::Table = toml::from_str(&content)?;

    let table = root
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // `toml` serializa la sección sin cabecera ("clave = valor\n...");
    // se reinterpreta como documento para obtener una tabla editable.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // Si la sección ya existe se actualizan solo las claves, así sobreviven
    // los comentarios que el usuario puso dentro de ella.
    match doc.get_mut(section).and_then(Item::as_table_mut) {
      Some(existing) => {
        for (key, item) in section_doc.as_table().iter() {
          match existing.get_mut(key) {
            Some(slot) => *slot = item.clone(),
            None => {
              existing.insert(key, item.clone());
            }
          }
        }
      }
      None => doc[section] = Item::Table(section_doc.as_table().clone()),
    }

    atomic_write_str(&path, &doc.to_string())?;
    debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    level: u32,
  }

  fn backend() -> (tempfile::TempDir, TomlConfigBackend) {
    let tmp = tempdir().unwrap();
    let paths = ZvonkoPaths::portable(tmp.path()).unwrap();
    (tmp, TomlConfigBackend::new(paths))
  }

  #[test]
  fn missing_file_yields_default() {
    let (_tmp, backend) = backend();

    let sample: Sample = backend.load_section_with_default("sample").unwrap();

    assert_eq!(sample, Sample::default());
  }

  #[test]
  fn missing_section_is_an_error_without_default() {
    let (_tmp, backend) = backend();
    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();

    let err = backend.load_section::<Sample>("sample").unwrap_err();

    assert!(matches!(err, ConfigError::Other(_)));
  }

  #[test]
  fn save_then_load_round_trips_section() {
    let (_tmp, backend) = backend();
    let sample = Sample { name: "zvonko".to_string(), level: 3 };

    backend.save_section("sample", &sample).unwrap();
    let loaded: Sample = backend.load_section("sample").unwrap();

    assert_eq!(loaded, sample);
  }

  #[test]
  fn save_preserves_other_sections_and_comments() {
    let (_tmp, backend) = backend();
    let file = backend.paths().config_file();
    fs::write(&file, "# ajustes del panel\n[other]\nkeep = true # no tocar\n\n[sample]\n# nivel\nlevel = 1\nname = \"x\"\n")
      .unwrap();

    backend.save_section("sample", &Sample { name: "y".to_string(), level: 2 }).unwrap();

    let written = fs::read_to_string(&file).unwrap();
    assert!(written.contains("# ajustes del panel"));
    assert!(written.contains("keep = true # no tocar"));
    assert!(written.contains("# nivel"));

    let loaded: Sample = backend.load_section("sample").unwrap();
    assert_eq!(loaded, Sample { name: "y".to_string(), level: 2 });
  }

  #[test]
  fn malformed_file_reports_toml_error() {
    let (_tmp, backend) = backend();
    fs::write(backend.paths().config_file(), "this is = = not toml").unwrap();

    let err = backend.load_section_with_default::<Sample>("sample").unwrap_err();

    assert!(matches!(err, ConfigError::Toml(_)));
  }
}
