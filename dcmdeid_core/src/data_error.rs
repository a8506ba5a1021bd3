//! Errors raised when reading or creating data element values.

use crate::{DataSetPath, DcmdeidError, ValueRepresentation};

/// An error that occurred when accessing or creating data in a data set, e.g. a
/// requested tag not being present, or a value that can't be decoded.
///
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DataError {
  /// The requested data element or value was not present.
  #[error("Value not present")]
  ValueNotPresent { path: Option<DataSetPath> },

  /// The value has a different multiplicity than the one requested, e.g. a
  /// single string was requested from a multi-valued element.
  #[error("Multiplicity mismatch")]
  MultiplicityMismatch { path: Option<DataSetPath> },

  /// The value is not valid for its VR, or can't be converted to the
  /// requested type.
  #[error("Value invalid: {details}")]
  ValueInvalid {
    details: String,
    path: Option<DataSetPath>,
  },

  /// The value's length is not valid for its VR.
  #[error("Value length {length} is invalid for {vr}: {details}")]
  ValueLengthInvalid {
    vr: ValueRepresentation,
    length: usize,
    details: String,
    path: Option<DataSetPath>,
  },
}

impl DataError {
  pub fn new_value_not_present() -> Self {
    Self::ValueNotPresent { path: None }
  }

  pub fn new_multiplicity_mismatch() -> Self {
    Self::MultiplicityMismatch { path: None }
  }

  pub fn new_value_invalid(details: String) -> Self {
    Self::ValueInvalid {
      details,
      path: None,
    }
  }

  pub fn new_value_length_invalid(
    vr: ValueRepresentation,
    length: usize,
    details: String,
  ) -> Self {
    Self::ValueLengthInvalid {
      vr,
      length,
      details,
      path: None,
    }
  }

  /// Returns the path in the data set the error relates to, if known.
  ///
  pub fn path(&self) -> Option<&DataSetPath> {
    match self {
      Self::ValueNotPresent { path }
      | Self::MultiplicityMismatch { path }
      | Self::ValueInvalid { path, .. }
      | Self::ValueLengthInvalid { path, .. } => path.as_ref(),
    }
  }

  /// Attaches a data set path to the error, replacing any existing one.
  ///
  pub fn with_path(mut self, data_set_path: &DataSetPath) -> Self {
    match &mut self {
      Self::ValueNotPresent { path }
      | Self::MultiplicityMismatch { path }
      | Self::ValueInvalid { path, .. }
      | Self::ValueLengthInvalid { path, .. } => {
        *path = Some(data_set_path.clone());
      }
    }

    self
  }

  /// Returns the name of the error kind as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      Self::ValueNotPresent { .. } => "Value not present",
      Self::MultiplicityMismatch { .. } => "Multiplicity mismatch",
      Self::ValueInvalid { .. } => "Value invalid",
      Self::ValueLengthInvalid { .. } => "Value length invalid",
    }
  }
}

impl DcmdeidError for DataError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("DICOM data error {task_description}"),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    if let Some(path) = self.path() {
      if let Some(tag) = path.final_data_element() {
        lines.push(format!("  Tag: {tag}"));
      }
      lines.push(format!("  Path: {}", path.to_detailed_string()));
    }

    match self {
      Self::ValueInvalid { details, .. } => {
        lines.push(format!("  Details: {details}"));
      }

      Self::ValueLengthInvalid {
        vr,
        length,
        details,
        ..
      } => {
        lines.push(format!("  VR: {vr}"));
        lines.push(format!("  Length: {length} bytes"));
        lines.push(format!("  Details: {details}"));
      }

      _ => (),
    }

    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{DataElementTag, dictionary};

  #[test]
  fn to_lines_test() {
    let error = DataError::new_value_invalid("Bad UID".to_string()).with_path(
      &DataSetPath::new_with_data_element(dictionary::STUDY_INSTANCE_UID.tag),
    );

    assert_eq!(
      error.to_lines("reading study UID"),
      vec![
        "DICOM data error reading study UID".to_string(),
        "".to_string(),
        "  Error: Value invalid".to_string(),
        "  Tag: (0020,000D)".to_string(),
        "  Path: (0020,000D) Study Instance UID".to_string(),
        "  Details: Bad UID".to_string(),
      ]
    );

    assert_eq!(
      error.path().and_then(|p| p.final_data_element()),
      Some(DataElementTag::new(0x0020, 0x000D))
    );
  }
}
