//! Conversion of stored records to and from data sets.

use dcmdeid_core::{DataElementValue, DataSet, ValueRepresentation, dictionary};

/// Decodes records into data sets and encodes them back again.
///
pub trait RecordCodec {
  type DecodeError: core::fmt::Display;
  type EncodeError: core::fmt::Display;

  fn decode(&self, bytes: &[u8]) -> Result<DataSet, Self::DecodeError>;

  fn encode(&self, data_set: &DataSet) -> Result<Vec<u8>, Self::EncodeError>;
}

/// Gives `UN` data elements the VR from the dictionary where it's known, so
/// that they get a type-correct replacement value. Values that aren't valid
/// for the dictionary VR are left as `UN`.
///
pub fn assign_dictionary_vrs(data_set: &mut DataSet) {
  for tag in data_set.tags() {
    let Ok(value) = data_set.get_value_mut(tag) else {
      continue;
    };

    if let Ok(items) = value.sequence_items_mut() {
      items.iter_mut().for_each(assign_dictionary_vrs);
      continue;
    }

    if value.value_representation() != ValueRepresentation::Unknown {
      continue;
    }

    let Ok(item) = dictionary::find(tag) else {
      continue;
    };

    if matches!(
      item.vr,
      ValueRepresentation::Sequence | ValueRepresentation::Unknown
    ) {
      continue;
    }

    let Ok(bytes) = value.bytes() else {
      continue;
    };

    if let Ok(new_value) = DataElementValue::new_binary(item.vr, bytes.to_vec())
    {
      *value = new_value;
    }
  }
}

#[cfg(feature = "json")]
pub use json_codec::DicomJsonCodec;

#[cfg(feature = "json")]
mod json_codec {
  use dcmdeid_core::{DataSet, DataSetPath};
  use dcmdeid_json::{
    DataSetJsonExtensions, DicomJsonConfig, JsonDeserializeError,
    JsonSerializeError,
  };

  use super::{RecordCodec, assign_dictionary_vrs};

  /// Stores records as DICOM JSON.
  ///
  #[derive(Clone, Debug, Default)]
  pub struct DicomJsonCodec {
    config: DicomJsonConfig,
  }

  impl DicomJsonCodec {
    pub fn new(config: DicomJsonConfig) -> Self {
      Self { config }
    }
  }

  impl RecordCodec for DicomJsonCodec {
    type DecodeError = JsonDeserializeError;
    type EncodeError = JsonSerializeError;

    fn decode(&self, bytes: &[u8]) -> Result<DataSet, JsonDeserializeError> {
      let json = core::str::from_utf8(bytes).map_err(|_| {
        JsonDeserializeError::JsonInvalid {
          details: "Record is not valid UTF-8".to_string(),
          path: DataSetPath::new(),
        }
      })?;

      let mut data_set = DataSet::from_json(json)?;
      assign_dictionary_vrs(&mut data_set);

      Ok(data_set)
    }

    fn encode(
      &self,
      data_set: &DataSet,
    ) -> Result<Vec<u8>, JsonSerializeError> {
      data_set.to_json(&self.config).map(String::into_bytes)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn assign_dictionary_vrs_test() {
    let mut item = DataSet::new();
    item.insert(
      dictionary::REFERENCED_SOP_INSTANCE_UID.tag,
      DataElementValue::new_binary(ValueRepresentation::Unknown, b"1.2.3\0".to_vec())
        .unwrap(),
    );

    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::PATIENT_NAME.tag,
      DataElementValue::new_binary(ValueRepresentation::Unknown, b"DOE^J ".to_vec())
        .unwrap(),
    );
    data_set.insert(
      dictionary::ROWS.tag,
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::Unknown,
        vec![1, 2, 3],
      ),
    );
    data_set.insert(
      dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );

    assign_dictionary_vrs(&mut data_set);

    assert_eq!(data_set.get_string(dictionary::PATIENT_NAME.tag), Ok("DOE^J"));

    // Three bytes can't be a US value
    assert_eq!(
      data_set
        .get_value(dictionary::ROWS.tag)
        .unwrap()
        .value_representation(),
      ValueRepresentation::Unknown
    );

    assert_eq!(
      data_set.get_sequence_items(dictionary::REFERENCED_IMAGE_SEQUENCE.tag)
        .unwrap()[0]
        .get_string(dictionary::REFERENCED_SOP_INSTANCE_UID.tag),
      Ok("1.2.3")
    );
  }

  #[cfg(feature = "json")]
  #[test]
  fn dicom_json_codec_test() {
    let codec = DicomJsonCodec::default();

    let data_set = codec
      .decode(br#"{"00100010":{"vr":"PN","Value":[{"Alphabetic":"DOE^JOHN"}]}}"#)
      .unwrap();
    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("DOE^JOHN")
    );

    assert_eq!(
      codec.encode(&data_set).unwrap(),
      br#"{"00100010":{"vr":"PN","Value":[{"Alphabetic":"DOE^JOHN"}]}}"#
    );

    assert!(codec.decode(b"{").is_err());
    assert!(codec.decode(&[0xFF, 0xFE]).is_err());
  }
}
