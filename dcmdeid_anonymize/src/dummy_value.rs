//! Dummy values used to replace identifying data. Every VR maps to a single
//! constant, so the same VR always produces the same bytes.

use dcmdeid_core::{
  DataElementTag, DataElementValue, DataSetPath, ValueRepresentation,
  dictionary,
};

use crate::AnonymizeError;

/// The dummy value for most text VRs.
///
pub const DUMMY_TEXT: &str = "ANONYMIZED";

/// The dummy value for `PN` data elements.
///
pub const DUMMY_PERSON_NAME: &str = "ANONYMIZED^ANONYMIZED";

/// The dummy value for Patient's Sex (0010,0040). `O` means "other".
///
pub const DUMMY_PATIENT_SEX: &str = "O";

/// Returns the dummy value to store in a data element with the given tag and
/// VR. Sequences have no dummy value and are an error.
///
pub fn dummy_value(
  vr: ValueRepresentation,
  tag: DataElementTag,
) -> Result<DataElementValue, AnonymizeError> {
  if tag == dictionary::PATIENT_SEX.tag {
    return Ok(DataElementValue::new_binary_unchecked(
      vr,
      vr.pad_bytes_to_even_length(DUMMY_PATIENT_SEX.as_bytes().to_vec()),
    ));
  }

  let bytes: Vec<u8> = match vr {
    ValueRepresentation::ApplicationEntity
    | ValueRepresentation::CodeString
    | ValueRepresentation::LongString
    | ValueRepresentation::LongText
    | ValueRepresentation::ShortString
    | ValueRepresentation::ShortText
    | ValueRepresentation::UnlimitedCharacters
    | ValueRepresentation::UniqueIdentifier
    | ValueRepresentation::Unknown
    | ValueRepresentation::UniversalResourceIdentifier
    | ValueRepresentation::UnlimitedText => DUMMY_TEXT.into(),

    ValueRepresentation::AgeString => b"000Y".to_vec(),
    ValueRepresentation::Date => b"19000101".to_vec(),
    ValueRepresentation::DateTime => b"19000101000000.000000".to_vec(),
    ValueRepresentation::Time => b"000000.000000".to_vec(),

    ValueRepresentation::DecimalString | ValueRepresentation::IntegerString => {
      b"0".to_vec()
    }

    ValueRepresentation::PersonName => DUMMY_PERSON_NAME.into(),

    ValueRepresentation::AttributeTag
    | ValueRepresentation::FloatingPointDouble
    | ValueRepresentation::FloatingPointSingle
    | ValueRepresentation::OtherByteString
    | ValueRepresentation::OtherDoubleString
    | ValueRepresentation::OtherFloatString
    | ValueRepresentation::OtherLongString
    | ValueRepresentation::OtherVeryLongString
    | ValueRepresentation::OtherWordString
    | ValueRepresentation::SignedLong
    | ValueRepresentation::SignedShort
    | ValueRepresentation::SignedVeryLong
    | ValueRepresentation::UnsignedLong
    | ValueRepresentation::UnsignedShort
    | ValueRepresentation::UnsignedVeryLong => {
      vec![0; vr.fixed_value_size().unwrap_or(1)]
    }

    ValueRepresentation::Sequence => {
      return Err(AnonymizeError::SequenceHasNoDummyValue {
        path: DataSetPath::new_with_data_element(tag),
      });
    }
  };

  Ok(DataElementValue::new_binary_unchecked(
    vr,
    vr.pad_bytes_to_even_length(bytes),
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::date_shift::SHIFT_ORIGIN;
  use dcmdeid_core::value_representation;

  fn dummy(vr: ValueRepresentation) -> DataElementValue {
    dummy_value(vr, DataElementTag::new(0x0009, 0x1000)).unwrap()
  }

  #[test]
  fn text_test() {
    assert_eq!(
      dummy(ValueRepresentation::LongString).get_string(),
      Ok("ANONYMIZED")
    );
    assert_eq!(
      dummy(ValueRepresentation::PersonName).get_string(),
      Ok("ANONYMIZED^ANONYMIZED")
    );
    assert_eq!(dummy(ValueRepresentation::AgeString).get_string(), Ok("000Y"));
    assert_eq!(dummy(ValueRepresentation::Date).get_string(), Ok("19000101"));
    assert_eq!(
      dummy(ValueRepresentation::DateTime).get_string(),
      Ok("19000101000000.000000")
    );
    assert_eq!(dummy(ValueRepresentation::IntegerString).get_ints(), Ok(vec![0]));
    assert_eq!(dummy(ValueRepresentation::Unknown).bytes(), Ok(&b"ANONYMIZED"[..]));
  }

  #[test]
  fn date_matches_shift_origin_test() {
    let origin = SHIFT_ORIGIN.format("%Y%m%d").to_string();

    assert_eq!(dummy(ValueRepresentation::Date).get_string(), Ok(origin.as_str()));
    assert!(
      dummy(ValueRepresentation::DateTime)
        .get_string()
        .unwrap()
        .starts_with(&origin)
    );
  }

  #[test]
  fn binary_test() {
    assert_eq!(
      dummy(ValueRepresentation::UnsignedShort).get_ints(),
      Ok(vec![0])
    );
    assert_eq!(
      dummy(ValueRepresentation::FloatingPointDouble).get_floats(),
      Ok(vec![0.0])
    );
    assert_eq!(
      dummy(ValueRepresentation::AttributeTag).get_attribute_tags(),
      Ok(vec![DataElementTag::ZERO])
    );
    assert_eq!(dummy(ValueRepresentation::OtherWordString).bytes(), Ok(&[0, 0][..]));

    // Single bytes are padded to an even length
    assert_eq!(dummy(ValueRepresentation::OtherByteString).bytes(), Ok(&[0, 0][..]));
  }

  #[test]
  fn patient_sex_test() {
    let value =
      dummy_value(ValueRepresentation::CodeString, dictionary::PATIENT_SEX.tag)
        .unwrap();

    assert_eq!(value.get_string(), Ok("O"));
  }

  #[test]
  fn sequence_test() {
    let error =
      dummy_value(ValueRepresentation::Sequence, dictionary::CONTENT_SEQUENCE.tag)
        .unwrap_err();

    assert!(error.is_fatal());
  }

  #[test]
  fn deterministic_test() {
    for vr in value_representation::ALL {
      if vr != ValueRepresentation::Sequence {
        assert_eq!(dummy(vr), dummy(vr));
      }
    }
  }
}
