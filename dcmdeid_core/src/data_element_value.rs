//! A data element value that can hold any of the DICOM value representations.
//! Data element values are stored in a [`DataSet`] which maps data element
//! tags to data element values.

use byteorder::{ByteOrder, LittleEndian};

use crate::{DataElementTag, DataError, DataSet, ValueRepresentation};

pub mod unique_identifier;

/// A DICOM data element value that holds one of the following:
///
/// 1. Binary value. Raw bytes for a specific VR. When the VR is a string type
///    the bytes are UTF-8 encoded. Numeric data is always little endian.
///
/// 2. Sequence value. A list of nested data sets.
///
/// Binary data is only parsed when a typed accessor is called, so values that
/// are non-conformant pass through untouched unless something reads them.
///
/// Ref: PS3.5 6.2.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DataElementValue(RawDataElementValue);

#[derive(Clone, Debug, PartialEq)]
enum RawDataElementValue {
  BinaryValue {
    vr: ValueRepresentation,
    bytes: Vec<u8>,
  },
  SequenceValue {
    items: Vec<DataSet>,
  },
}

impl DataElementValue {
  /// Creates a new binary value after checking that the bytes are valid for
  /// the VR: numeric VRs must hold a whole number of values and string VRs
  /// must be valid UTF-8. The bytes are padded to an even length.
  ///
  pub fn new_binary(
    vr: ValueRepresentation,
    bytes: Vec<u8>,
  ) -> Result<Self, DataError> {
    if vr == ValueRepresentation::Sequence {
      return Err(DataError::new_value_invalid(
        "Sequences can't hold binary data".to_string(),
      ));
    }

    if vr.is_string() {
      if core::str::from_utf8(&bytes).is_err() {
        return Err(DataError::new_value_invalid(format!(
          "{vr} value is not valid UTF-8"
        )));
      }
    } else if let Some(size) = vr.fixed_value_size() {
      if size > 1 && bytes.len() % size != 0 {
        return Err(DataError::new_value_length_invalid(
          vr,
          bytes.len(),
          format!("Must be a multiple of {size} bytes"),
        ));
      }
    }

    Ok(Self::new_binary_unchecked(vr, vr.pad_bytes_to_even_length(bytes)))
  }

  /// Creates a new binary value without validating or padding the bytes.
  ///
  pub fn new_binary_unchecked(vr: ValueRepresentation, bytes: Vec<u8>) -> Self {
    Self(RawDataElementValue::BinaryValue { vr, bytes })
  }

  /// Creates a new sequence value.
  ///
  pub fn new_sequence(items: Vec<DataSet>) -> Self {
    Self(RawDataElementValue::SequenceValue { items })
  }

  /// Creates a new string value holding the given values, joined by
  /// backslashes. Only VRs that permit multiplicity accept more than one
  /// value.
  ///
  pub fn new_strings(
    vr: ValueRepresentation,
    values: &[&str],
  ) -> Result<Self, DataError> {
    if !vr.is_string() {
      return Err(DataError::new_value_invalid(format!(
        "{vr} is not a string VR"
      )));
    }

    if values.len() > 1 && !vr.allows_multiple_string_values() {
      return Err(DataError::new_multiplicity_mismatch());
    }

    if vr.allows_multiple_string_values()
      && values.iter().any(|value| value.contains('\\'))
    {
      return Err(DataError::new_value_invalid(
        "String value contains a backslash".to_string(),
      ));
    }

    Self::new_binary(vr, values.join("\\").into_bytes())
  }

  /// Creates a new string value holding a single value.
  ///
  pub fn new_string(
    vr: ValueRepresentation,
    value: &str,
  ) -> Result<Self, DataError> {
    Self::new_strings(vr, &[value])
  }

  pub fn new_code_string(values: &[&str]) -> Result<Self, DataError> {
    Self::new_strings(ValueRepresentation::CodeString, values)
  }

  pub fn new_long_string(values: &[&str]) -> Result<Self, DataError> {
    Self::new_strings(ValueRepresentation::LongString, values)
  }

  pub fn new_short_string(values: &[&str]) -> Result<Self, DataError> {
    Self::new_strings(ValueRepresentation::ShortString, values)
  }

  pub fn new_person_name(values: &[&str]) -> Result<Self, DataError> {
    Self::new_strings(ValueRepresentation::PersonName, values)
  }

  pub fn new_date(value: &str) -> Result<Self, DataError> {
    Self::new_string(ValueRepresentation::Date, value)
  }

  /// Creates a new `UniqueIdentifier` value. Each UID must be valid.
  ///
  pub fn new_unique_identifier(values: &[&str]) -> Result<Self, DataError> {
    if let Some(uid) = values.iter().find(|uid| !unique_identifier::is_valid(uid))
    {
      return Err(DataError::new_value_invalid(format!(
        "UID is invalid: {uid:?}"
      )));
    }

    Ok(Self::new_binary_unchecked(
      ValueRepresentation::UniqueIdentifier,
      unique_identifier::to_bytes(values),
    ))
  }

  pub fn new_unsigned_short(values: &[u16]) -> Self {
    let mut bytes = vec![0u8; values.len() * 2];
    LittleEndian::write_u16_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::UnsignedShort, bytes)
  }

  pub fn new_signed_short(values: &[i16]) -> Self {
    let mut bytes = vec![0u8; values.len() * 2];
    LittleEndian::write_i16_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::SignedShort, bytes)
  }

  pub fn new_unsigned_long(values: &[u32]) -> Self {
    let mut bytes = vec![0u8; values.len() * 4];
    LittleEndian::write_u32_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::UnsignedLong, bytes)
  }

  pub fn new_signed_long(values: &[i32]) -> Self {
    let mut bytes = vec![0u8; values.len() * 4];
    LittleEndian::write_i32_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::SignedLong, bytes)
  }

  pub fn new_unsigned_very_long(values: &[u64]) -> Self {
    let mut bytes = vec![0u8; values.len() * 8];
    LittleEndian::write_u64_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::UnsignedVeryLong, bytes)
  }

  pub fn new_signed_very_long(values: &[i64]) -> Self {
    let mut bytes = vec![0u8; values.len() * 8];
    LittleEndian::write_i64_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::SignedVeryLong, bytes)
  }

  pub fn new_floating_point_single(values: &[f32]) -> Self {
    let mut bytes = vec![0u8; values.len() * 4];
    LittleEndian::write_f32_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::FloatingPointSingle, bytes)
  }

  pub fn new_floating_point_double(values: &[f64]) -> Self {
    let mut bytes = vec![0u8; values.len() * 8];
    LittleEndian::write_f64_into(values, &mut bytes);
    Self::new_binary_unchecked(ValueRepresentation::FloatingPointDouble, bytes)
  }

  /// Creates a new `AttributeTag` value. Each tag is stored as its group then
  /// its element, both little endian.
  ///
  pub fn new_attribute_tag(tags: &[DataElementTag]) -> Self {
    let mut bytes = Vec::with_capacity(tags.len() * 4);
    for tag in tags {
      bytes.extend_from_slice(&tag.group.to_le_bytes());
      bytes.extend_from_slice(&tag.element.to_le_bytes());
    }

    Self::new_binary_unchecked(ValueRepresentation::AttributeTag, bytes)
  }

  /// Returns the value's VR.
  ///
  pub fn value_representation(&self) -> ValueRepresentation {
    match &self.0 {
      RawDataElementValue::BinaryValue { vr, .. } => *vr,
      RawDataElementValue::SequenceValue { .. } => ValueRepresentation::Sequence,
    }
  }

  /// Returns whether the value holds no bytes, or is a sequence with no items.
  ///
  pub fn is_empty(&self) -> bool {
    match &self.0 {
      RawDataElementValue::BinaryValue { bytes, .. } => bytes.is_empty(),
      RawDataElementValue::SequenceValue { items } => items.is_empty(),
    }
  }

  /// Returns the raw bytes of a binary value.
  ///
  pub fn bytes(&self) -> Result<&[u8], DataError> {
    match &self.0 {
      RawDataElementValue::BinaryValue { bytes, .. } => Ok(bytes),
      RawDataElementValue::SequenceValue { .. } => {
        Err(DataError::new_value_not_present())
      }
    }
  }

  /// Returns the string values held by a string VR, with padding removed.
  /// An empty value returns no strings.
  ///
  pub fn get_strings(&self) -> Result<Vec<&str>, DataError> {
    let vr = self.value_representation();
    if !vr.is_string() {
      return Err(DataError::new_value_not_present());
    }

    let bytes = self.bytes()?;
    let value = core::str::from_utf8(bytes).map_err(|_| {
      DataError::new_value_invalid(format!("{vr} value is not valid UTF-8"))
    })?;

    let value = value.trim_end_matches(['\0', ' ']);
    if value.is_empty() {
      return Ok(vec![]);
    }

    if !vr.allows_multiple_string_values() {
      return Ok(vec![value]);
    }

    Ok(
      value
        .split('\\')
        .map(|s| match vr {
          ValueRepresentation::PersonName
          | ValueRepresentation::LongString
          | ValueRepresentation::ShortString
          | ValueRepresentation::UnlimitedCharacters => s.trim_end_matches(' '),
          _ => s.trim_matches([' ', '\0']),
        })
        .collect(),
    )
  }

  /// Returns the single string value held by a string VR.
  ///
  pub fn get_string(&self) -> Result<&str, DataError> {
    match self.get_strings()?.as_slice() {
      [value] => Ok(*value),
      [] => Err(DataError::new_value_not_present()),
      _ => Err(DataError::new_multiplicity_mismatch()),
    }
  }

  /// Returns the integer values of a binary integer VR or an `IntegerString`.
  ///
  pub fn get_ints(&self) -> Result<Vec<i64>, DataError> {
    let vr = self.value_representation();
    let bytes = self.bytes()?;

    let values = match vr {
      ValueRepresentation::UnsignedShort => {
        bytes.chunks_exact(2).map(|b| LittleEndian::read_u16(b) as i64).collect()
      }
      ValueRepresentation::SignedShort => {
        bytes.chunks_exact(2).map(|b| LittleEndian::read_i16(b) as i64).collect()
      }
      ValueRepresentation::UnsignedLong => {
        bytes.chunks_exact(4).map(|b| LittleEndian::read_u32(b) as i64).collect()
      }
      ValueRepresentation::SignedLong => {
        bytes.chunks_exact(4).map(|b| LittleEndian::read_i32(b) as i64).collect()
      }
      ValueRepresentation::SignedVeryLong => {
        bytes.chunks_exact(8).map(LittleEndian::read_i64).collect()
      }
      ValueRepresentation::UnsignedVeryLong => bytes
        .chunks_exact(8)
        .map(|b| {
          i64::try_from(LittleEndian::read_u64(b)).map_err(|_| {
            DataError::new_value_invalid(
              "UnsignedVeryLong value is out of range".to_string(),
            )
          })
        })
        .collect::<Result<_, _>>()?,
      ValueRepresentation::IntegerString => self
        .get_strings()?
        .into_iter()
        .map(|s| {
          s.parse::<i64>().map_err(|_| {
            DataError::new_value_invalid(format!("Invalid IntegerString: {s:?}"))
          })
        })
        .collect::<Result<_, _>>()?,
      _ => return Err(DataError::new_value_not_present()),
    };

    Ok(values)
  }

  /// Returns the float values of a binary float VR or a `DecimalString`.
  ///
  pub fn get_floats(&self) -> Result<Vec<f64>, DataError> {
    let bytes = self.bytes()?;

    match self.value_representation() {
      ValueRepresentation::FloatingPointSingle => Ok(
        bytes
          .chunks_exact(4)
          .map(|b| LittleEndian::read_f32(b) as f64)
          .collect(),
      ),
      ValueRepresentation::FloatingPointDouble => {
        Ok(bytes.chunks_exact(8).map(LittleEndian::read_f64).collect())
      }
      ValueRepresentation::DecimalString => self
        .get_strings()?
        .into_iter()
        .map(|s| {
          s.parse::<f64>().map_err(|_| {
            DataError::new_value_invalid(format!("Invalid DecimalString: {s:?}"))
          })
        })
        .collect(),
      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// Returns the tags held by an `AttributeTag` value.
  ///
  pub fn get_attribute_tags(&self) -> Result<Vec<DataElementTag>, DataError> {
    if self.value_representation() != ValueRepresentation::AttributeTag {
      return Err(DataError::new_value_not_present());
    }

    let bytes = self.bytes()?;
    if bytes.len() % 4 != 0 {
      return Err(DataError::new_value_length_invalid(
        ValueRepresentation::AttributeTag,
        bytes.len(),
        "Must be a multiple of 4 bytes".to_string(),
      ));
    }

    Ok(
      bytes
        .chunks_exact(4)
        .map(|b| {
          DataElementTag::new(
            LittleEndian::read_u16(&b[0..2]),
            LittleEndian::read_u16(&b[2..4]),
          )
        })
        .collect(),
    )
  }

  /// Returns the items of a sequence value.
  ///
  pub fn sequence_items(&self) -> Result<&[DataSet], DataError> {
    match &self.0 {
      RawDataElementValue::SequenceValue { items } => Ok(items),
      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// Returns the items of a sequence value for modification.
  ///
  pub fn sequence_items_mut(&mut self) -> Result<&mut Vec<DataSet>, DataError> {
    match &mut self.0 {
      RawDataElementValue::SequenceValue { items } => Ok(items),
      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// Formats a value as a single line of text, truncated with an ellipsis if
  /// it exceeds the output width.
  ///
  pub fn to_string(&self, output_width: usize) -> String {
    let vr = self.value_representation();

    let text = match &self.0 {
      RawDataElementValue::SequenceValue { items } => {
        format!("{} item{}", items.len(), if items.len() == 1 { "" } else { "s" })
      }

      RawDataElementValue::BinaryValue { bytes, .. } => {
        let formatted = if vr.is_string() {
          self.get_strings().map(|strings| {
            strings
              .iter()
              .map(|s| format!("{s:?}"))
              .collect::<Vec<_>>()
              .join(", ")
          })
        } else if vr == ValueRepresentation::AttributeTag {
          self.get_attribute_tags().map(|tags| {
            tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
          })
        } else if let Ok(ints) = self.get_ints() {
          Ok(ints.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", "))
        } else if let Ok(floats) = self.get_floats() {
          Ok(
            floats
              .iter()
              .map(|f| f.to_string())
              .collect::<Vec<_>>()
              .join(", "),
          )
        } else {
          Ok(format!("[{} bytes]", bytes.len()))
        };

        formatted.unwrap_or_else(|e| format!("!! {e}"))
      }
    };

    if text.chars().count() > output_width {
      let mut truncated: String =
        text.chars().take(output_width.saturating_sub(1)).collect();
      truncated.push('…');
      truncated
    } else {
      text
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_strings_test() {
    let value =
      DataElementValue::new_person_name(&["DOE^JOHN", "ROE^JANE"]).unwrap();

    assert_eq!(value.bytes().unwrap(), b"DOE^JOHN\\ROE^JANE ");
    assert_eq!(value.get_strings().unwrap(), vec!["DOE^JOHN", "ROE^JANE"]);
    assert_eq!(
      value.get_string(),
      Err(DataError::new_multiplicity_mismatch())
    );

    assert_eq!(
      DataElementValue::new_strings(ValueRepresentation::LongText, &["a", "b"]),
      Err(DataError::new_multiplicity_mismatch())
    );

    assert!(
      DataElementValue::new_strings(ValueRepresentation::UnsignedShort, &["1"])
        .is_err()
    );
  }

  #[test]
  fn new_binary_test() {
    assert!(
      DataElementValue::new_binary(ValueRepresentation::UnsignedShort, vec![1])
        .is_err()
    );

    assert!(
      DataElementValue::new_binary(ValueRepresentation::Sequence, vec![]).is_err()
    );

    assert_eq!(
      DataElementValue::new_binary(ValueRepresentation::OtherByteString, vec![7])
        .unwrap()
        .bytes()
        .unwrap(),
      &[7, 0]
    );
  }

  #[test]
  fn unique_identifier_test() {
    let value = DataElementValue::new_unique_identifier(&["1.2.840.99.1"]).unwrap();

    assert_eq!(value.bytes().unwrap(), b"1.2.840.99.1");
    assert_eq!(value.get_string(), Ok("1.2.840.99.1"));

    let value = DataElementValue::new_unique_identifier(&["1.2.3"]).unwrap();
    assert_eq!(value.bytes().unwrap(), b"1.2.3\0");
    assert_eq!(value.get_string(), Ok("1.2.3"));

    assert!(DataElementValue::new_unique_identifier(&["1.02"]).is_err());
  }

  #[test]
  fn numeric_test() {
    assert_eq!(
      DataElementValue::new_unsigned_short(&[1, 513]).bytes().unwrap(),
      &[1, 0, 1, 2]
    );

    assert_eq!(
      DataElementValue::new_signed_long(&[-2]).get_ints(),
      Ok(vec![-2])
    );

    assert_eq!(
      DataElementValue::new_floating_point_double(&[0.5]).get_floats(),
      Ok(vec![0.5])
    );

    assert_eq!(
      DataElementValue::new_string(ValueRepresentation::IntegerString, "12")
        .unwrap()
        .get_ints(),
      Ok(vec![12])
    );
  }

  #[test]
  fn attribute_tag_test() {
    let tags = vec![DataElementTag::new(0x0010, 0x0020)];
    let value = DataElementValue::new_attribute_tag(&tags);

    assert_eq!(value.bytes().unwrap(), &[0x10, 0, 0x20, 0]);
    assert_eq!(value.get_attribute_tags(), Ok(tags));
  }

  #[test]
  fn sequence_test() {
    let mut value = DataElementValue::new_sequence(vec![DataSet::new()]);

    assert_eq!(value.value_representation(), ValueRepresentation::Sequence);
    assert_eq!(value.sequence_items().unwrap().len(), 1);
    assert!(value.bytes().is_err());

    value.sequence_items_mut().unwrap().clear();
    assert!(value.is_empty());
  }

  #[test]
  fn to_string_test() {
    let value = DataElementValue::new_person_name(&["DOE^JOHN"]).unwrap();
    assert_eq!(value.to_string(80), "\"DOE^JOHN\"");
    assert_eq!(value.to_string(5), "\"DOE…");

    assert_eq!(
      DataElementValue::new_unsigned_short(&[512, 1]).to_string(80),
      "512, 1"
    );

    assert_eq!(
      DataElementValue::new_binary(ValueRepresentation::OtherByteString, vec![0; 4])
        .unwrap()
        .to_string(80),
      "[4 bytes]"
    );
  }
}
