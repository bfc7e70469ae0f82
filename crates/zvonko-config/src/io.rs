use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en un temporal hermano y lo renombra sobre `path`.
///
/// Un lector concurrente ve el archivo viejo o el nuevo, nunca uno a medias.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_existing_file_without_leftovers() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("zvonko.toml");
    fs::write(&path, "old = true\n").unwrap();

    atomic_write_str(&path, "new = true\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new = true\n");
    assert!(!tmp.path().join("zvonko.tmp").exists());
  }
}
