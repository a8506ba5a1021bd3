use std::path::{Path, PathBuf};

use dcmdeid_core::{DataError, DataSetPath, DcmdeidError};

/// An error that occurred when anonymizing a single data set.
///
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AnonymizeError {
  /// A value couldn't be read or replaced. The record is skipped.
  #[error(transparent)]
  DataError(#[from] DataError),

  /// A date couldn't be shifted. The record is skipped.
  #[error("Date shift failed: {details}")]
  DateShiftFailed { details: String, path: DataSetPath },

  /// The `C` (clean) action was requested. Cleaning isn't supported, and
  /// silently skipping it could leak identifying data.
  #[error("The clean action is not supported")]
  CleanActionUnsupported { path: DataSetPath },

  /// A dummy value was requested for a sequence.
  #[error("Sequences have no dummy value")]
  SequenceHasNoDummyValue { path: DataSetPath },
}

impl AnonymizeError {
  /// Returns whether the error indicates a broken rule configuration rather
  /// than bad input data. Fatal errors stop a session.
  ///
  pub fn is_fatal(&self) -> bool {
    matches!(
      self,
      Self::CleanActionUnsupported { .. } | Self::SequenceHasNoDummyValue { .. }
    )
  }

  pub fn path(&self) -> Option<&DataSetPath> {
    match self {
      Self::DataError(e) => e.path(),
      Self::DateShiftFailed { path, .. }
      | Self::CleanActionUnsupported { path }
      | Self::SequenceHasNoDummyValue { path } => Some(path),
    }
  }

  /// Sets the path in the data set the error relates to.
  ///
  pub fn with_path(self, data_set_path: &DataSetPath) -> Self {
    match self {
      Self::DataError(e) => Self::DataError(e.with_path(data_set_path)),
      Self::DateShiftFailed { details, .. } => Self::DateShiftFailed {
        details,
        path: data_set_path.clone(),
      },
      Self::CleanActionUnsupported { .. } => Self::CleanActionUnsupported {
        path: data_set_path.clone(),
      },
      Self::SequenceHasNoDummyValue { .. } => Self::SequenceHasNoDummyValue {
        path: data_set_path.clone(),
      },
    }
  }
}

impl DcmdeidError for AnonymizeError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    if let Self::DataError(e) = self {
      return e.to_lines(task_description);
    }

    let mut lines = vec![
      format!("Anonymize error {task_description}"),
      "".to_string(),
      format!("  Error: {self}"),
    ];

    if let Some(path) = self.path() {
      if let Some(tag) = path.final_data_element() {
        lines.push(format!("  Tag: {tag}"));
      }
      lines.push(format!("  Path: {}", path.to_detailed_string()));
    }

    lines
  }
}

/// An error that caused a single record in a session to be skipped.
///
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
  #[error("Failed reading \"{}\": {error}", .path.display())]
  Read {
    path: PathBuf,
    error: std::io::Error,
  },

  #[error("Failed decoding \"{}\": {details}", .path.display())]
  Decode { path: PathBuf, details: String },

  #[error("Failed anonymizing \"{}\": {error}", .path.display())]
  Anonymize { path: PathBuf, error: AnonymizeError },

  #[error("Failed encoding \"{}\": {details}", .path.display())]
  Encode { path: PathBuf, details: String },

  #[error("Failed writing \"{}\": {error}", .path.display())]
  Write {
    path: PathBuf,
    error: std::io::Error,
  },

  #[error("Failed removing staged file \"{}\": {error}", .path.display())]
  RemoveStaged {
    path: PathBuf,
    error: std::io::Error,
  },
}

impl RecordError {
  /// Returns the path of the input file the error relates to.
  ///
  pub fn path(&self) -> &Path {
    match self {
      Self::Read { path, .. }
      | Self::Decode { path, .. }
      | Self::Anonymize { path, .. }
      | Self::Encode { path, .. }
      | Self::Write { path, .. }
      | Self::RemoveStaged { path, .. } => path,
    }
  }
}

impl DcmdeidError for RecordError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    if let Self::Anonymize { path, error } = self {
      let mut lines = error.to_lines(task_description);
      lines.push(format!("  File: {}", path.display()));
      return lines;
    }

    vec![
      format!("Record error {task_description}"),
      "".to_string(),
      format!("  Error: {self}"),
    ]
  }
}

/// An error that stopped an anonymization session.
///
#[derive(Debug, thiserror::Error)]
pub enum AnonymizeSessionError {
  /// The session has already been run.
  #[error("Session has already been run")]
  AlreadyRun,

  /// The input directory couldn't be moved aside for processing. The input
  /// directory is left as it was.
  #[error("Failed staging \"{}\": {details}", .input.display())]
  Staging { input: PathBuf, details: String },

  /// The staged input files couldn't be listed. They are left in the staging
  /// directory.
  #[error("Failed listing files in \"{}\": {details}", .staging_path.display())]
  Listing {
    staging_path: PathBuf,
    details: String,
  },

  /// The staging directory couldn't be removed after processing.
  #[error("Failed removing \"{}\": {error}", .staging_path.display())]
  Finalizing {
    staging_path: PathBuf,
    error: std::io::Error,
  },

  /// A fatal anonymization error stopped the session. Input files not yet
  /// processed remain in the staging directory.
  #[error("Fatal error anonymizing \"{}\": {error}", .file.display())]
  Fatal {
    staging_path: PathBuf,
    file: PathBuf,
    error: AnonymizeError,
  },
}

impl DcmdeidError for AnonymizeSessionError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      Self::Fatal {
        staging_path,
        file,
        error,
      } => {
        let mut lines = error.to_lines(task_description);
        lines.push(format!("  File: {}", file.display()));
        lines.push(format!("  Staged input: {}", staging_path.display()));
        lines
      }

      Self::Listing { staging_path, .. } => vec![
        format!("Anonymize session error {task_description}"),
        "".to_string(),
        format!("  Error: {self}"),
        format!("  Staged input: {}", staging_path.display()),
      ],

      _ => vec![
        format!("Anonymize session error {task_description}"),
        "".to_string(),
        format!("  Error: {self}"),
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dcmdeid_core::dictionary;

  #[test]
  fn is_fatal_test() {
    let path = DataSetPath::new_with_data_element(dictionary::PATIENT_NAME.tag);

    assert!(
      AnonymizeError::CleanActionUnsupported { path: path.clone() }.is_fatal()
    );
    assert!(
      AnonymizeError::SequenceHasNoDummyValue { path: path.clone() }.is_fatal()
    );
    assert!(
      !AnonymizeError::DateShiftFailed {
        details: "".to_string(),
        path
      }
      .is_fatal()
    );
    assert!(
      !AnonymizeError::DataError(DataError::new_value_not_present()).is_fatal()
    );
  }

  #[test]
  fn to_lines_test() {
    let error = AnonymizeError::CleanActionUnsupported {
      path: DataSetPath::new(),
    }
    .with_path(&DataSetPath::new_with_data_element(
      dictionary::ACQUISITION_COMMENTS.tag,
    ));

    assert_eq!(
      error.to_lines("anonymizing test.json"),
      vec![
        "Anonymize error anonymizing test.json".to_string(),
        "".to_string(),
        "  Error: The clean action is not supported".to_string(),
        "  Tag: (0018,4000)".to_string(),
        "  Path: (0018,4000) Acquisition Comments".to_string(),
      ]
    );
  }
}
