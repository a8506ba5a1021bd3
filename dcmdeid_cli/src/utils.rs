use std::path::{Path, PathBuf};

use dcmdeid::core::DcmdeidError;

/// An error reading or writing a file that isn't a record, e.g. a UID map or
/// rule table.
///
#[derive(Debug)]
pub struct FileError {
  pub when: String,
  pub path: PathBuf,
  pub details: String,
}

impl FileError {
  pub fn new(when: &str, path: &Path, details: impl ToString) -> Self {
    Self {
      when: when.to_string(),
      path: path.to_path_buf(),
      details: details.to_string(),
    }
  }
}

impl DcmdeidError for FileError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("File error {task_description}"),
      "".to_string(),
      format!("  When: {}", self.when),
      format!("  File: {}", self.path.display()),
      format!("  Details: {}", self.details),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn file_error_to_lines_test() {
    let error =
      FileError::new("Reading UID map", Path::new("map.json"), "Not found");

    assert_eq!(
      error.to_lines("anonymizing \"in\""),
      vec![
        "File error anonymizing \"in\"",
        "",
        "  When: Reading UID map",
        "  File: map.json",
        "  Details: Not found",
      ]
    );
  }
}
