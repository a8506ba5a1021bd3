//! Export of a directory of anonymized records into a single archive.

use std::path::{Path, PathBuf};

use dcmdeid_core::DcmdeidError;

use crate::progress::{ProgressCounter, ProgressObserver};
use crate::record_files::list_record_files;

/// A destination for archive entries, e.g. a ZIP file writer.
///
pub trait ArchiveWriter {
  /// Adds a file with the given relative name and content to the archive.
  /// Names use `/` as the path separator.
  ///
  fn add_entry(&mut self, name: &str, data: &[u8]) -> std::io::Result<()>;
}

/// An error that occurred exporting records to an archive.
///
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
  #[error("Failed listing files: {details}")]
  Listing { details: String },

  #[error("Failed reading \"{}\": {error}", .path.display())]
  Read {
    path: PathBuf,
    error: std::io::Error,
  },

  #[error("Failed writing archive entry \"{name}\": {error}")]
  Write {
    name: String,
    error: std::io::Error,
  },
}

impl DcmdeidError for ArchiveError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("Archive error {task_description}"),
      "".to_string(),
    ];

    match self {
      Self::Listing { details } => {
        lines.push("  Error: Failed listing files".to_string());
        lines.push(format!("  Details: {details}"));
      }

      Self::Read { path, error } => {
        lines.push("  Error: Failed reading file".to_string());
        lines.push(format!("  File: {}", path.display()));
        lines.push(format!("  Details: {error}"));
      }

      Self::Write { name, error } => {
        lines.push("  Error: Failed writing archive entry".to_string());
        lines.push(format!("  Entry: {name}"));
        lines.push(format!("  Details: {error}"));
      }
    }

    lines
  }
}

/// Adds every file under a directory to an archive, named relative to the
/// directory. Progress is reported once per file. Returns the number of
/// entries written.
///
pub fn export_archive(
  directory: &Path,
  writer: &mut impl ArchiveWriter,
  observer: &mut dyn ProgressObserver,
) -> Result<usize, ArchiveError> {
  let files =
    list_record_files(directory).map_err(|e| ArchiveError::Listing {
      details: e.to_string(),
    })?;

  let mut progress = ProgressCounter::new(files.len());

  for (index, file) in files.iter().enumerate() {
    let name = entry_name(directory, file);

    let data = std::fs::read(file).map_err(|error| ArchiveError::Read {
      path: file.clone(),
      error,
    })?;

    writer
      .add_entry(&name, &data)
      .map_err(|error| ArchiveError::Write {
        name: name.clone(),
        error,
      })?;

    tracing::debug!("Added \"{name}\" to archive");

    observer.on_progress(
      progress.advance(1),
      &format!("Archiving record {} of {}", index + 1, files.len()),
    );
  }

  Ok(files.len())
}

fn entry_name(directory: &Path, file: &Path) -> String {
  let relative = file.strip_prefix(directory).unwrap_or(file);

  relative
    .components()
    .map(|c| c.as_os_str().to_string_lossy())
    .collect::<Vec<_>>()
    .join("/")
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[derive(Default)]
  struct MemoryArchive {
    entries: Vec<(String, Vec<u8>)>,
  }

  impl ArchiveWriter for MemoryArchive {
    fn add_entry(&mut self, name: &str, data: &[u8]) -> std::io::Result<()> {
      self.entries.push((name.to_string(), data.to_vec()));
      Ok(())
    }
  }

  struct FailingArchive;

  impl ArchiveWriter for FailingArchive {
    fn add_entry(&mut self, _name: &str, _data: &[u8]) -> std::io::Result<()> {
      Err(std::io::Error::other("disk full"))
    }
  }

  #[test]
  fn export_archive_test() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("im00000"), "a").unwrap();
    fs::write(root.join("sub/im00001"), "b").unwrap();

    let mut archive = MemoryArchive::default();
    let mut fractions = vec![];
    let mut observer = |fraction: f64, _: &str| fractions.push(fraction);

    assert_eq!(export_archive(root, &mut archive, &mut observer).unwrap(), 2);

    assert_eq!(
      archive.entries,
      vec![
        ("im00000".to_string(), b"a".to_vec()),
        ("sub/im00001".to_string(), b"b".to_vec()),
      ]
    );
    assert_eq!(fractions, vec![0.5, 1.0]);
  }

  #[test]
  fn write_error_test() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("im00000"), "a").unwrap();

    let error = export_archive(
      temp_dir.path(),
      &mut FailingArchive,
      &mut crate::progress::NoProgress,
    )
    .unwrap_err();

    assert_eq!(
      error.to_lines("exporting archive"),
      vec![
        "Archive error exporting archive",
        "",
        "  Error: Failed writing archive entry",
        "  Entry: im00000",
        "  Details: disk full",
      ]
    );
  }
}
