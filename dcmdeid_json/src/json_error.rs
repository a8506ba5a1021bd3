use dcmdeid_core::{DataError, DataSetPath, DcmdeidError, dictionary};

/// Occurs when an error is encountered converting to the DICOM JSON model.
///
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum JsonSerializeError {
  /// The data to be serialized is invalid. Details of the issue are in the
  /// contained [`DataError`].
  #[error(transparent)]
  DataError(#[from] DataError),

  /// The JSON text could not be produced.
  #[error("DICOM JSON output error: {0}")]
  OutputError(String),
}

/// Occurs when an error is encountered converting from the DICOM JSON model.
///
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum JsonDeserializeError {
  /// The DICOM JSON data to be deserialized is invalid.
  #[error(
    "DICOM JSON deserialize error, details: {details}, path: {}",
    .path.to_detailed_string()
  )]
  JsonInvalid { details: String, path: DataSetPath },
}

impl JsonDeserializeError {
  pub(crate) fn new(details: impl Into<String>, path: &DataSetPath) -> Self {
    Self::JsonInvalid {
      details: details.into(),
      path: path.clone(),
    }
  }
}

impl DcmdeidError for JsonSerializeError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      JsonSerializeError::DataError(e) => e.to_lines(task_description),
      JsonSerializeError::OutputError(details) => vec![
        format!("DICOM JSON serialize error {task_description}"),
        "".to_string(),
        format!("  Details: {details}"),
      ],
    }
  }
}

impl DcmdeidError for JsonDeserializeError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      JsonDeserializeError::JsonInvalid { details, path } => {
        let mut lines = vec![
          format!("DICOM JSON deserialize error {task_description}"),
          "".to_string(),
          format!("  Details: {details}"),
        ];

        if let Some(tag) = path.final_data_element() {
          lines.push(format!("  Tag: {tag}"));
          lines.push(format!("  Name: {}", dictionary::tag_name(tag)));
        }

        if !path.is_root() {
          lines.push(format!("  Path: {path}"));
        }

        lines
      }
    }
  }
}
