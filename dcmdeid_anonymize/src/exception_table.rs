//! Caller-supplied literal values that override the rule table for specific
//! tags, e.g. setting a fixed patient name on every anonymized record.

use std::collections::BTreeMap;

use dcmdeid_core::{
  DataElementTag, DataElementValue, DataError, ValueRepresentation,
};

/// A mapping of tags to literal values. An exception always takes priority
/// over the rule table, and is inserted into records that lack the tag.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExceptionTable(BTreeMap<DataElementTag, String>);

impl ExceptionTable {
  pub const fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Parses an exception of the form `GGGGEEEE=value`. The tag may also be
  /// written as `GGGG,EEEE` or `(GGGG,EEEE)`. The value may be empty.
  ///
  pub fn parse_entry(entry: &str) -> Result<(DataElementTag, String), String> {
    let Some((tag, value)) = entry.split_once('=') else {
      return Err(format!("Exception '{entry}' is not of the form TAG=VALUE"));
    };

    let tag = DataElementTag::from_hex_string(tag.trim())
      .map_err(|_| format!("Exception tag '{tag}' is invalid"))?;

    Ok((tag, value.to_string()))
  }

  /// Sets the literal value for a tag, replacing any existing one.
  ///
  pub fn insert(&mut self, tag: DataElementTag, value: impl Into<String>) {
    self.0.insert(tag, value.into());
  }

  pub fn get(&self, tag: DataElementTag) -> Option<&str> {
    self.0.get(&tag).map(String::as_str)
  }

  pub fn contains(&self, tag: DataElementTag) -> bool {
    self.0.contains_key(&tag)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (DataElementTag, &str)> {
    self.0.iter().map(|(tag, value)| (*tag, value.as_str()))
  }
}

/// Converts an exception's literal text to a value of the given VR. String
/// VRs store the text verbatim. Binary number and attribute tag VRs parse
/// backslash-separated values from it.
///
/// Text that isn't valid for the VR, and any literal for a sequence, is
/// stored verbatim as `UN`.
///
pub fn literal_value(
  vr: ValueRepresentation,
  literal: &str,
) -> DataElementValue {
  if vr != ValueRepresentation::Sequence {
    if let Ok(value) = typed_literal_value(vr, literal) {
      return value;
    }
  }

  let vr = ValueRepresentation::Unknown;
  DataElementValue::new_binary_unchecked(
    vr,
    vr.pad_bytes_to_even_length(literal.as_bytes().to_vec()),
  )
}

fn typed_literal_value(
  vr: ValueRepresentation,
  literal: &str,
) -> Result<DataElementValue, DataError> {
  fn parse_all<T: core::str::FromStr>(
    vr: ValueRepresentation,
    literal: &str,
  ) -> Result<Vec<T>, DataError> {
    if literal.is_empty() {
      return Ok(vec![]);
    }

    literal
      .split('\\')
      .map(|s| {
        s.trim().parse::<T>().map_err(|_| {
          DataError::new_value_invalid(format!("'{s}' is not a valid {vr} value"))
        })
      })
      .collect()
  }

  match vr {
    ValueRepresentation::UnsignedShort => Ok(
      DataElementValue::new_unsigned_short(&parse_all::<u16>(vr, literal)?),
    ),
    ValueRepresentation::SignedShort => {
      Ok(DataElementValue::new_signed_short(&parse_all::<i16>(vr, literal)?))
    }
    ValueRepresentation::UnsignedLong => Ok(
      DataElementValue::new_unsigned_long(&parse_all::<u32>(vr, literal)?),
    ),
    ValueRepresentation::SignedLong => {
      Ok(DataElementValue::new_signed_long(&parse_all::<i32>(vr, literal)?))
    }
    ValueRepresentation::UnsignedVeryLong => Ok(
      DataElementValue::new_unsigned_very_long(&parse_all::<u64>(vr, literal)?),
    ),
    ValueRepresentation::SignedVeryLong => Ok(
      DataElementValue::new_signed_very_long(&parse_all::<i64>(vr, literal)?),
    ),
    ValueRepresentation::FloatingPointSingle => Ok(
      DataElementValue::new_floating_point_single(&parse_all::<f32>(
        vr, literal,
      )?),
    ),
    ValueRepresentation::FloatingPointDouble => Ok(
      DataElementValue::new_floating_point_double(&parse_all::<f64>(
        vr, literal,
      )?),
    ),

    ValueRepresentation::AttributeTag => {
      let tags = literal
        .split('\\')
        .filter(|s| !s.is_empty())
        .map(|s| {
          DataElementTag::from_hex_string(s).map_err(|_| {
            DataError::new_value_invalid(format!("'{s}' is not a valid tag"))
          })
        })
        .collect::<Result<Vec<_>, _>>()?;

      Ok(DataElementValue::new_attribute_tag(&tags))
    }

    _ => DataElementValue::new_binary(vr, literal.as_bytes().to_vec()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dcmdeid_core::dictionary;

  #[test]
  fn parse_entry_test() {
    assert_eq!(
      ExceptionTable::parse_entry("00100010=ANON^PATIENT"),
      Ok((dictionary::PATIENT_NAME.tag, "ANON^PATIENT".to_string()))
    );

    assert_eq!(
      ExceptionTable::parse_entry("(0008,0050)="),
      Ok((dictionary::ACCESSION_NUMBER.tag, "".to_string()))
    );

    assert_eq!(
      ExceptionTable::parse_entry("0020,000D=1.2=3"),
      Ok((dictionary::STUDY_INSTANCE_UID.tag, "1.2=3".to_string()))
    );

    assert!(ExceptionTable::parse_entry("00100010").is_err());
    assert!(ExceptionTable::parse_entry("0010001=X").is_err());
  }

  #[test]
  fn literal_value_test() {
    assert_eq!(
      literal_value(ValueRepresentation::PersonName, "ANON^PATIENT")
        .get_string(),
      Ok("ANON^PATIENT")
    );
    assert_eq!(
      literal_value(ValueRepresentation::CodeString, "A\\B").get_strings(),
      Ok(vec!["A", "B"])
    );
    assert_eq!(
      literal_value(ValueRepresentation::UnsignedShort, "1\\512").get_ints(),
      Ok(vec![1, 512])
    );
    assert_eq!(
      literal_value(ValueRepresentation::AttributeTag, "00100010")
        .get_attribute_tags(),
      Ok(vec![dictionary::PATIENT_NAME.tag])
    );
    assert_eq!(
      literal_value(ValueRepresentation::Sequence, "X").bytes(),
      Ok(&b"X\0"[..])
    );

    // Text that isn't valid for the VR is kept verbatim
    let value = literal_value(ValueRepresentation::UnsignedShort, "-1");
    assert_eq!(value.value_representation(), ValueRepresentation::Unknown);
    assert_eq!(value.bytes(), Ok(&b"-1"[..]));
  }

  #[test]
  fn insert_test() {
    let mut table = ExceptionTable::new();
    table.insert(dictionary::PATIENT_ID.tag, "A");
    table.insert(dictionary::PATIENT_ID.tag, "B");

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(dictionary::PATIENT_ID.tag), Some("B"));
    assert!(!table.contains(dictionary::PATIENT_NAME.tag));
  }
}
