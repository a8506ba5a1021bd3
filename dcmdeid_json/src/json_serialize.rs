//! Conversion of a data set to the DICOM JSON Model.
//!
//! Ref: PS3.18 F.2.

use base64::prelude::*;
use byteorder::{ByteOrder, LittleEndian};
use serde_json::{Map, Number, Value};

use dcmdeid_core::{
  DataElementValue, DataError, DataSet, DataSetPath, ValueRepresentation,
};

use crate::JsonSerializeError;

/// The range of integers representable by JavaScript's Number type. 64-bit
/// integers outside this range are emitted as strings.
///
const SAFE_INTEGER_RANGE: core::ops::RangeInclusive<i128> =
  -9007199254740991..=9007199254740991;

/// Converts a data set to a DICOM JSON object.
///
pub fn data_set_to_json(
  data_set: &DataSet,
  path: &mut DataSetPath,
) -> Result<Value, JsonSerializeError> {
  let mut object = Map::new();

  for (tag, value) in data_set.iter() {
    path
      .add_data_element(*tag)
      .map_err(JsonSerializeError::OutputError)?;

    let element = data_element_to_json(value, path)?;
    object.insert(tag.to_hex_string(), element);

    path.pop().map_err(JsonSerializeError::OutputError)?;
  }

  Ok(Value::Object(object))
}

fn data_element_to_json(
  value: &DataElementValue,
  path: &mut DataSetPath,
) -> Result<Value, JsonSerializeError> {
  let vr = value.value_representation();

  let mut object = Map::new();
  object.insert("vr".to_string(), Value::String(vr.to_code().to_string()));

  if let Ok(items) = value.sequence_items() {
    if !items.is_empty() {
      let mut json_items = Vec::with_capacity(items.len());

      for (index, item) in items.iter().enumerate() {
        path
          .add_sequence_item(index)
          .map_err(JsonSerializeError::OutputError)?;
        json_items.push(data_set_to_json(item, path)?);
        path.pop().map_err(JsonSerializeError::OutputError)?;
      }

      object.insert("Value".to_string(), Value::Array(json_items));
    }

    return Ok(Value::Object(object));
  }

  let bytes = value.bytes().map_err(|e| e.with_path(path))?;
  if bytes.is_empty() {
    return Ok(Value::Object(object));
  }

  if is_inline_binary_vr(vr) {
    object.insert(
      "InlineBinary".to_string(),
      Value::String(BASE64_STANDARD.encode(bytes)),
    );
  } else {
    let values =
      binary_value_to_json(value, bytes).map_err(|e| e.with_path(path))?;

    if !values.is_empty() {
      object.insert("Value".to_string(), Value::Array(values));
    }
  }

  Ok(Value::Object(object))
}

/// Returns whether a VR's value is stored as base64 `InlineBinary` rather than
/// as a `Value` array.
///
pub(crate) fn is_inline_binary_vr(vr: ValueRepresentation) -> bool {
  matches!(
    vr,
    ValueRepresentation::OtherByteString
      | ValueRepresentation::OtherDoubleString
      | ValueRepresentation::OtherFloatString
      | ValueRepresentation::OtherLongString
      | ValueRepresentation::OtherVeryLongString
      | ValueRepresentation::OtherWordString
      | ValueRepresentation::Unknown
  )
}

fn binary_value_to_json(
  value: &DataElementValue,
  bytes: &[u8],
) -> Result<Vec<Value>, DataError> {
  match value.value_representation() {
    ValueRepresentation::AttributeTag => Ok(
      value
        .get_attribute_tags()?
        .iter()
        .map(|tag| Value::String(tag.to_hex_string()))
        .collect(),
    ),

    // JSON has no NaN or Infinity, so these are converted to strings
    ValueRepresentation::DecimalString
    | ValueRepresentation::FloatingPointDouble
    | ValueRepresentation::FloatingPointSingle => {
      Ok(value.get_floats()?.into_iter().map(float_to_json).collect())
    }

    ValueRepresentation::PersonName => value
      .get_strings()?
      .into_iter()
      .map(person_name_to_json)
      .collect(),

    ValueRepresentation::SignedLong
    | ValueRepresentation::SignedShort
    | ValueRepresentation::UnsignedLong
    | ValueRepresentation::UnsignedShort => Ok(
      value
        .get_ints()?
        .into_iter()
        .map(|i| Value::Number(i.into()))
        .collect(),
    ),

    // Integers that aren't valid are retried as decimals, which is a common
    // non-conformance
    ValueRepresentation::IntegerString => match value.get_ints() {
      Ok(ints) => Ok(ints.into_iter().map(|i| Value::Number(i.into())).collect()),

      Err(e) => {
        let floats = DataElementValue::new_binary_unchecked(
          ValueRepresentation::DecimalString,
          bytes.to_vec(),
        )
        .get_floats()
        .map_err(|_| e)?;

        Ok(floats.into_iter().map(float_to_json).collect())
      }
    },

    ValueRepresentation::SignedVeryLong => Ok(
      bytes
        .chunks_exact(8)
        .map(|b| big_int_to_json(LittleEndian::read_i64(b) as i128))
        .collect(),
    ),

    ValueRepresentation::UnsignedVeryLong => Ok(
      bytes
        .chunks_exact(8)
        .map(|b| big_int_to_json(LittleEndian::read_u64(b) as i128))
        .collect(),
    ),

    vr if vr.is_string() => {
      Ok(value.get_strings()?.into_iter().map(string_to_json).collect())
    }

    vr => Err(DataError::new_value_invalid(format!(
      "{vr} can't be stored in a DICOM JSON Value"
    ))),
  }
}

fn float_to_json(f: f64) -> Value {
  if f.is_nan() {
    Value::String("NaN".to_string())
  } else if f == f64::INFINITY {
    Value::String("Infinity".to_string())
  } else if f == f64::NEG_INFINITY {
    Value::String("-Infinity".to_string())
  } else {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
  }
}

fn big_int_to_json(i: i128) -> Value {
  if SAFE_INTEGER_RANGE.contains(&i) {
    Value::Number((i as i64).into())
  } else {
    Value::String(i.to_string())
  }
}

fn string_to_json(s: &str) -> Value {
  if s.is_empty() {
    Value::Null
  } else {
    Value::String(s.to_string())
  }
}

/// Converts one person name to a JSON object with its `Alphabetic`,
/// `Ideographic` and `Phonetic` component groups. Empty groups are omitted.
///
fn person_name_to_json(raw_name: &str) -> Result<Value, DataError> {
  let component_groups: Vec<&str> = raw_name.split('=').collect();

  if component_groups.len() > 3 {
    return Err(DataError::new_value_invalid(format!(
      "PersonName has too many component groups: {}",
      component_groups.len()
    )));
  }

  let mut object = Map::new();
  for (name, group) in ["Alphabetic", "Ideographic", "Phonetic"]
    .iter()
    .zip(component_groups)
  {
    let group = group.trim_end_matches(' ');
    if !group.is_empty() {
      object.insert(name.to_string(), Value::String(group.to_string()));
    }
  }

  Ok(Value::Object(object))
}

#[cfg(test)]
mod tests {
  use super::*;
  use dcmdeid_core::{DataElementTag, dictionary};
  use serde_json::json;

  fn to_json(data_set: &DataSet) -> Value {
    data_set_to_json(data_set, &mut DataSetPath::new()).unwrap()
  }

  #[test]
  fn strings_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["DOE^JOHN=ドウ^ジョン"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::ACCESSION_NUMBER, &["AC123"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::IMAGE_TYPE, &["ORIGINAL", "", "AXIAL"])
      .unwrap();

    assert_eq!(
      to_json(&data_set),
      json!({
        "00080008": { "vr": "CS", "Value": ["ORIGINAL", null, "AXIAL"] },
        "00080050": { "vr": "SH", "Value": ["AC123"] },
        "00100010": {
          "vr": "PN",
          "Value": [{ "Alphabetic": "DOE^JOHN", "Ideographic": "ドウ^ジョン" }]
        }
      })
    );
  }

  #[test]
  fn numbers_test() {
    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::ROWS.tag,
      DataElementValue::new_unsigned_short(&[512]),
    );
    data_set.insert(
      DataElementTag::new(0x0018, 0x9306),
      DataElementValue::new_floating_point_double(&[0.5, f64::NAN]),
    );
    data_set.insert(
      DataElementTag::new(0x0018, 0x9307),
      DataElementValue::new_unsigned_very_long(&[u64::MAX]),
    );
    data_set
      .insert_string_value(&dictionary::SERIES_NUMBER, &["7"])
      .unwrap();

    assert_eq!(
      to_json(&data_set),
      json!({
        "00189306": { "vr": "FD", "Value": [0.5, "NaN"] },
        "00189307": { "vr": "UV", "Value": ["18446744073709551615"] },
        "00200011": { "vr": "IS", "Value": [7] },
        "00280010": { "vr": "US", "Value": [512] }
      })
    );
  }

  #[test]
  fn binary_and_sequence_test() {
    let mut item = DataSet::new();
    item.insert(
      dictionary::REFERENCED_SOP_INSTANCE_UID.tag,
      DataElementValue::new_unique_identifier(&["1.2.3"]).unwrap(),
    );

    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );
    data_set.insert(
      dictionary::REFERENCED_STUDY_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![]),
    );
    data_set.insert(
      dictionary::PIXEL_DATA.tag,
      DataElementValue::new_binary(
        ValueRepresentation::OtherWordString,
        vec![1, 2, 3, 4],
      )
      .unwrap(),
    );
    data_set.insert(
      dictionary::STUDY_DATE.tag,
      DataElementValue::new_binary(ValueRepresentation::Date, vec![]).unwrap(),
    );

    assert_eq!(
      to_json(&data_set),
      json!({
        "00080020": { "vr": "DA" },
        "00081110": { "vr": "SQ" },
        "00081140": {
          "vr": "SQ",
          "Value": [{ "00081155": { "vr": "UI", "Value": ["1.2.3"] } }]
        },
        "7FE00010": { "vr": "OW", "InlineBinary": "AQIDBA==" }
      })
    );
  }

  #[test]
  fn invalid_value_has_path_test() {
    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::PATIENT_WEIGHT.tag,
      DataElementValue::new_string(ValueRepresentation::DecimalString, "heavy")
        .unwrap(),
    );

    let error = data_set_to_json(&data_set, &mut DataSetPath::new()).unwrap_err();

    match error {
      JsonSerializeError::DataError(e) => assert_eq!(
        e.path(),
        Some(&DataSetPath::new_with_data_element(dictionary::PATIENT_WEIGHT.tag))
      ),
      e => panic!("Unexpected error: {e}"),
    }
  }
}
