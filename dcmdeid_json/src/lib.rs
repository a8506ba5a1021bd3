//! Converts between data sets and the DICOM JSON Model.
//!
//! Ref: PS3.18 F.2.

mod json_config;
mod json_deserialize;
mod json_error;
mod json_serialize;

use dcmdeid_core::{DataSet, DataSetPath};

pub use json_config::DicomJsonConfig;
pub use json_error::{JsonDeserializeError, JsonSerializeError};

/// Adds functions to [`DataSet`] for converting to and from the DICOM JSON
/// Model.
///
pub trait DataSetJsonExtensions
where
  Self: Sized,
{
  /// Converts a data set to DICOM JSON text.
  ///
  fn to_json(&self, config: &DicomJsonConfig) -> Result<String, JsonSerializeError>;

  /// Converts DICOM JSON text to a data set.
  ///
  fn from_json(json: &str) -> Result<Self, JsonDeserializeError>;
}

impl DataSetJsonExtensions for DataSet {
  fn to_json(&self, config: &DicomJsonConfig) -> Result<String, JsonSerializeError> {
    let json = json_serialize::data_set_to_json(self, &mut DataSetPath::new())?;

    let text = if config.pretty_print {
      serde_json::to_string_pretty(&json)
    } else {
      serde_json::to_string(&json)
    };

    text.map_err(|e| JsonSerializeError::OutputError(e.to_string()))
  }

  fn from_json(json: &str) -> Result<Self, JsonDeserializeError> {
    let value: serde_json::Value =
      serde_json::from_str(json).map_err(|e| JsonDeserializeError::JsonInvalid {
        details: format!("Input is not valid JSON: {e}"),
        path: DataSetPath::new(),
      })?;

    json_deserialize::json_to_data_set(&value, &mut DataSetPath::new())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dcmdeid_core::{DataElementValue, dictionary};

  #[test]
  fn to_json_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["ANONYMIZED^ANONYMIZED"])
      .unwrap();
    data_set.insert(
      dictionary::ROWS.tag,
      DataElementValue::new_unsigned_short(&[0]),
    );

    assert_eq!(
      data_set.to_json(&DicomJsonConfig::default()),
      Ok(
        r#"{"00100010":{"vr":"PN","Value":[{"Alphabetic":"ANONYMIZED^ANONYMIZED"}]},"00280010":{"vr":"US","Value":[0]}}"#
          .to_string()
      )
    );
  }

  #[test]
  fn round_trip_test() {
    let json = r#"{
      "00080050": { "vr": "SH", "Value": ["AC123"] },
      "00081140": {
        "vr": "SQ",
        "Value": [{ "00081155": { "vr": "UI", "Value": ["1.2.3.4"] } }]
      },
      "00100010": { "vr": "PN", "Value": [{ "Alphabetic": "DOE^JOHN" }] },
      "00100040": { "vr": "CS", "Value": ["M"] },
      "00180015": { "vr": "CS" },
      "7FE00010": { "vr": "OB", "InlineBinary": "AAECAw==" }
    }"#;

    let data_set = DataSet::from_json(json).unwrap();
    let output = data_set
      .to_json(&DicomJsonConfig::default().pretty_print(true))
      .unwrap();

    assert_eq!(DataSet::from_json(&output), Ok(data_set));
  }

  #[test]
  fn from_json_invalid_test() {
    assert!(matches!(
      DataSet::from_json("{"),
      Err(JsonDeserializeError::JsonInvalid { .. })
    ));
  }
}
