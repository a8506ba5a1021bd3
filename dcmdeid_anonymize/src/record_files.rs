use std::path::{Path, PathBuf};

/// Lists all files under a directory recursively, in a stable order sorted by
/// file name at each level of the directory tree.
///
pub fn list_record_files(
  directory: &Path,
) -> Result<Vec<PathBuf>, walkdir::Error> {
  walkdir::WalkDir::new(directory)
    .sort_by_file_name()
    .into_iter()
    .filter_map(|entry| match entry {
      Ok(entry) => {
        if entry.file_type().is_file() {
          Some(Ok(entry.into_path()))
        } else {
          None
        }
      }

      Err(e) => Some(Err(e)),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn list_record_files_test() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("b/nested")).unwrap();
    fs::write(root.join("c"), "").unwrap();
    fs::write(root.join("a"), "").unwrap();
    fs::write(root.join("b/nested/z"), "").unwrap();
    fs::write(root.join("b/y"), "").unwrap();

    assert_eq!(
      list_record_files(root).unwrap(),
      vec![
        root.join("a"),
        root.join("b/nested/z"),
        root.join("b/y"),
        root.join("c"),
      ]
    );
  }

  #[test]
  fn missing_directory_test() {
    let temp_dir = tempfile::tempdir().unwrap();

    assert!(list_record_files(&temp_dir.path().join("missing")).is_err());
  }
}
