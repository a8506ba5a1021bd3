//! Conversion of DICOM JSON Model data into a data set.
//!
//! Ref: PS3.18 F.2.

use base64::prelude::*;
use serde_json::Value;

use dcmdeid_core::{
  DataElementTag, DataElementValue, DataSet, DataSetPath, ValueRepresentation,
};

use crate::JsonDeserializeError;
use crate::json_serialize::is_inline_binary_vr;

/// Converts a DICOM JSON object into a data set.
///
pub fn json_to_data_set(
  json: &Value,
  path: &mut DataSetPath,
) -> Result<DataSet, JsonDeserializeError> {
  let object = json.as_object().ok_or_else(|| {
    JsonDeserializeError::new("Data set is not an object", path)
  })?;

  let mut data_set = DataSet::new();

  for (key, element) in object {
    let tag = DataElementTag::from_hex_string(key)
      .ok()
      .filter(|_| key.len() == 8)
      .ok_or_else(|| {
        JsonDeserializeError::new(format!("Invalid data element tag: {key}"), path)
      })?;

    path
      .add_data_element(tag)
      .map_err(|e| JsonDeserializeError::new(e, path))?;

    let value = json_to_data_element_value(element, path)?;
    data_set.insert(tag, value);

    path
      .pop()
      .map_err(|e| JsonDeserializeError::new(e, path))?;
  }

  Ok(data_set)
}

fn json_to_data_element_value(
  json: &Value,
  path: &mut DataSetPath,
) -> Result<DataElementValue, JsonDeserializeError> {
  let object = json.as_object().ok_or_else(|| {
    JsonDeserializeError::new("Data element is not an object", path)
  })?;

  let vr = match object.get("vr") {
    Some(Value::String(vr)) => vr
      .parse::<ValueRepresentation>()
      .map_err(|e| JsonDeserializeError::new(e, path))?,
    _ => {
      return Err(JsonDeserializeError::new(
        "Data element has no \"vr\"",
        path,
      ));
    }
  };

  if object.contains_key("BulkDataURI") {
    return Err(JsonDeserializeError::new(
      "BulkDataURI is not supported",
      path,
    ));
  }

  if let Some(inline_binary) = object.get("InlineBinary") {
    return inline_binary_to_value(vr, inline_binary, path);
  }

  match object.get("Value") {
    None => Ok(empty_value(vr)),

    Some(Value::Array(values)) => {
      if vr == ValueRepresentation::Sequence {
        sequence_to_value(values, path)
      } else {
        array_to_value(vr, values, path)
      }
    }

    Some(_) => Err(JsonDeserializeError::new("\"Value\" is not an array", path)),
  }
}

fn empty_value(vr: ValueRepresentation) -> DataElementValue {
  if vr == ValueRepresentation::Sequence {
    DataElementValue::new_sequence(vec![])
  } else {
    DataElementValue::new_binary_unchecked(vr, vec![])
  }
}

fn inline_binary_to_value(
  vr: ValueRepresentation,
  inline_binary: &Value,
  path: &DataSetPath,
) -> Result<DataElementValue, JsonDeserializeError> {
  if !is_inline_binary_vr(vr) {
    return Err(JsonDeserializeError::new(
      format!("InlineBinary is not valid for {vr}"),
      path,
    ));
  }

  let Value::String(base64) = inline_binary else {
    return Err(JsonDeserializeError::new("InlineBinary is not a string", path));
  };

  let bytes = BASE64_STANDARD
    .decode(base64)
    .map_err(|_| JsonDeserializeError::new("InlineBinary is not valid base64", path))?;

  DataElementValue::new_binary(vr, bytes)
    .map_err(|e| JsonDeserializeError::new(e.to_string(), path))
}

fn sequence_to_value(
  items: &[Value],
  path: &mut DataSetPath,
) -> Result<DataElementValue, JsonDeserializeError> {
  let mut data_sets = Vec::with_capacity(items.len());

  for (index, item) in items.iter().enumerate() {
    path
      .add_sequence_item(index)
      .map_err(|e| JsonDeserializeError::new(e, path))?;

    data_sets.push(json_to_data_set(item, path)?);

    path
      .pop()
      .map_err(|e| JsonDeserializeError::new(e, path))?;
  }

  Ok(DataElementValue::new_sequence(data_sets))
}

fn array_to_value(
  vr: ValueRepresentation,
  values: &[Value],
  path: &DataSetPath,
) -> Result<DataElementValue, JsonDeserializeError> {
  let invalid = |details: String| JsonDeserializeError::new(details, path);

  let value = match vr {
    ValueRepresentation::PersonName => {
      let names = values
        .iter()
        .map(|value| json_to_person_name(value).ok_or_else(|| {
          invalid("PersonName value is not an object".to_string())
        }))
        .collect::<Result<Vec<_>, _>>()?;

      DataElementValue::new_binary(vr, names.join("\\").into_bytes())
    }

    ValueRepresentation::AttributeTag => {
      let tags = values
        .iter()
        .map(|value| {
          value
            .as_str()
            .and_then(|s| DataElementTag::from_hex_string(s).ok())
            .ok_or_else(|| invalid(format!("Invalid AttributeTag: {value}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

      Ok(DataElementValue::new_attribute_tag(&tags))
    }

    ValueRepresentation::DecimalString | ValueRepresentation::IntegerString => {
      let strings = values
        .iter()
        .map(|value| match value {
          Value::Number(n) => Ok(n.to_string()),
          Value::String(s) => Ok(s.clone()),
          Value::Null => Ok(String::new()),
          _ => Err(invalid(format!("Invalid {vr} value: {value}"))),
        })
        .collect::<Result<Vec<_>, _>>()?;

      DataElementValue::new_binary(vr, strings.join("\\").into_bytes())
    }

    ValueRepresentation::FloatingPointDouble
    | ValueRepresentation::FloatingPointSingle => {
      let floats = values
        .iter()
        .map(|value| json_to_float(value).ok_or_else(|| {
          invalid(format!("Invalid {vr} value: {value}"))
        }))
        .collect::<Result<Vec<_>, _>>()?;

      if vr == ValueRepresentation::FloatingPointSingle {
        let floats: Vec<f32> = floats.iter().map(|f| *f as f32).collect();
        Ok(DataElementValue::new_floating_point_single(&floats))
      } else {
        Ok(DataElementValue::new_floating_point_double(&floats))
      }
    }

    ValueRepresentation::SignedShort
    | ValueRepresentation::UnsignedShort
    | ValueRepresentation::SignedLong
    | ValueRepresentation::UnsignedLong
    | ValueRepresentation::SignedVeryLong
    | ValueRepresentation::UnsignedVeryLong => {
      let ints = values
        .iter()
        .map(|value| json_to_int(value).ok_or_else(|| {
          invalid(format!("Invalid {vr} value: {value}"))
        }))
        .collect::<Result<Vec<i128>, _>>()?;

      return ints_to_value(vr, &ints).ok_or_else(|| {
        invalid(format!("{vr} value is out of range"))
      });
    }

    vr if vr.is_string() => {
      let strings = values
        .iter()
        .map(|value| match value {
          Value::String(s) => Ok(s.as_str()),
          Value::Null => Ok(""),
          _ => Err(invalid(format!("Invalid {vr} value: {value}"))),
        })
        .collect::<Result<Vec<_>, _>>()?;

      DataElementValue::new_strings(vr, &strings)
    }

    vr => {
      return Err(invalid(format!("{vr} data can't be stored in \"Value\"")));
    }
  };

  value.map_err(|e| invalid(e.to_string()))
}

fn json_to_person_name(value: &Value) -> Option<String> {
  match value {
    Value::Null => Some(String::new()),

    Value::Object(object) => {
      let mut groups: Vec<&str> = ["Alphabetic", "Ideographic", "Phonetic"]
        .iter()
        .map(|name| object.get(*name).and_then(Value::as_str).unwrap_or(""))
        .collect();

      while groups.last() == Some(&"") {
        groups.pop();
      }

      Some(groups.join("="))
    }

    _ => None,
  }
}

fn json_to_float(value: &Value) -> Option<f64> {
  match value {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => match s.as_str() {
      "NaN" => Some(f64::NAN),
      "Infinity" => Some(f64::INFINITY),
      "-Infinity" => Some(f64::NEG_INFINITY),
      s => s.parse().ok(),
    },
    _ => None,
  }
}

fn json_to_int(value: &Value) -> Option<i128> {
  match value {
    Value::Number(n) => n
      .as_i64()
      .map(i128::from)
      .or_else(|| n.as_u64().map(i128::from)),
    Value::String(s) => s.parse().ok(),
    _ => None,
  }
}

fn ints_to_value(vr: ValueRepresentation, ints: &[i128]) -> Option<DataElementValue> {
  fn convert<T: TryFrom<i128>>(ints: &[i128]) -> Option<Vec<T>> {
    ints.iter().map(|i| T::try_from(*i).ok()).collect()
  }

  match vr {
    ValueRepresentation::SignedShort => {
      convert(ints).map(|v: Vec<i16>| DataElementValue::new_signed_short(&v))
    }
    ValueRepresentation::UnsignedShort => {
      convert(ints).map(|v: Vec<u16>| DataElementValue::new_unsigned_short(&v))
    }
    ValueRepresentation::SignedLong => {
      convert(ints).map(|v: Vec<i32>| DataElementValue::new_signed_long(&v))
    }
    ValueRepresentation::UnsignedLong => {
      convert(ints).map(|v: Vec<u32>| DataElementValue::new_unsigned_long(&v))
    }
    ValueRepresentation::SignedVeryLong => {
      convert(ints).map(|v: Vec<i64>| DataElementValue::new_signed_very_long(&v))
    }
    ValueRepresentation::UnsignedVeryLong => convert(ints)
      .map(|v: Vec<u64>| DataElementValue::new_unsigned_very_long(&v)),
    _ => None,
  }
}
