use std::path::{Path, PathBuf};

use tempfile::TempDir;

fn temp_dir() -> PathBuf {
  if let Ok(t) = std::env::var("RUNNER_TEMP") {
    PathBuf::from(t)
  } else {
    std::env::temp_dir()
  }
}

/// Creates a temporary directory holding an `input` directory populated with
/// the given records, and returns both.
///
#[allow(dead_code)]
pub fn create_input_dir(records: &[(&str, &str)]) -> (TempDir, PathBuf) {
  let temp_dir = TempDir::new_in(temp_dir()).unwrap();
  let input = temp_dir.path().join("input");

  for (name, content) in records {
    let path = input.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
  }

  (temp_dir, input)
}

/// Returns the names of the files directly inside a directory, sorted.
///
#[allow(dead_code)]
pub fn file_names(directory: &Path) -> Vec<String> {
  let mut names: Vec<_> = std::fs::read_dir(directory)
    .unwrap()
    .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
    .collect();

  names.sort();
  names
}
