//! DICOM value representations (VRs).
//!
//! Ref: PS3.5 6.2.

/// All DICOM value representations (VRs).
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ValueRepresentation {
  AgeString,
  ApplicationEntity,
  AttributeTag,
  CodeString,
  Date,
  DateTime,
  DecimalString,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  ShortText,
  SignedLong,
  SignedShort,
  SignedVeryLong,
  Time,
  UniqueIdentifier,
  UniversalResourceIdentifier,
  Unknown,
  UnlimitedCharacters,
  UnlimitedText,
  UnsignedLong,
  UnsignedShort,
  UnsignedVeryLong,
}

/// Every value representation, in the order of their two-character codes.
///
pub const ALL: [ValueRepresentation; 34] = [
  ValueRepresentation::ApplicationEntity,
  ValueRepresentation::AgeString,
  ValueRepresentation::AttributeTag,
  ValueRepresentation::CodeString,
  ValueRepresentation::Date,
  ValueRepresentation::DecimalString,
  ValueRepresentation::DateTime,
  ValueRepresentation::FloatingPointDouble,
  ValueRepresentation::FloatingPointSingle,
  ValueRepresentation::IntegerString,
  ValueRepresentation::LongString,
  ValueRepresentation::LongText,
  ValueRepresentation::OtherByteString,
  ValueRepresentation::OtherDoubleString,
  ValueRepresentation::OtherFloatString,
  ValueRepresentation::OtherLongString,
  ValueRepresentation::OtherVeryLongString,
  ValueRepresentation::OtherWordString,
  ValueRepresentation::PersonName,
  ValueRepresentation::ShortString,
  ValueRepresentation::SignedLong,
  ValueRepresentation::Sequence,
  ValueRepresentation::SignedShort,
  ValueRepresentation::ShortText,
  ValueRepresentation::SignedVeryLong,
  ValueRepresentation::Time,
  ValueRepresentation::UnlimitedCharacters,
  ValueRepresentation::UniqueIdentifier,
  ValueRepresentation::UnsignedLong,
  ValueRepresentation::Unknown,
  ValueRepresentation::UniversalResourceIdentifier,
  ValueRepresentation::UnsignedShort,
  ValueRepresentation::UnlimitedText,
  ValueRepresentation::UnsignedVeryLong,
];

impl ValueRepresentation {
  /// Converts a two-character code, e.g. "PN", into a value representation.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ()> {
    match bytes {
      b"AE" => Ok(Self::ApplicationEntity),
      b"AS" => Ok(Self::AgeString),
      b"AT" => Ok(Self::AttributeTag),
      b"CS" => Ok(Self::CodeString),
      b"DA" => Ok(Self::Date),
      b"DS" => Ok(Self::DecimalString),
      b"DT" => Ok(Self::DateTime),
      b"FD" => Ok(Self::FloatingPointDouble),
      b"FL" => Ok(Self::FloatingPointSingle),
      b"IS" => Ok(Self::IntegerString),
      b"LO" => Ok(Self::LongString),
      b"LT" => Ok(Self::LongText),
      b"OB" => Ok(Self::OtherByteString),
      b"OD" => Ok(Self::OtherDoubleString),
      b"OF" => Ok(Self::OtherFloatString),
      b"OL" => Ok(Self::OtherLongString),
      b"OV" => Ok(Self::OtherVeryLongString),
      b"OW" => Ok(Self::OtherWordString),
      b"PN" => Ok(Self::PersonName),
      b"SH" => Ok(Self::ShortString),
      b"SL" => Ok(Self::SignedLong),
      b"SQ" => Ok(Self::Sequence),
      b"SS" => Ok(Self::SignedShort),
      b"ST" => Ok(Self::ShortText),
      b"SV" => Ok(Self::SignedVeryLong),
      b"TM" => Ok(Self::Time),
      b"UC" => Ok(Self::UnlimitedCharacters),
      b"UI" => Ok(Self::UniqueIdentifier),
      b"UL" => Ok(Self::UnsignedLong),
      b"UN" => Ok(Self::Unknown),
      b"UR" => Ok(Self::UniversalResourceIdentifier),
      b"US" => Ok(Self::UnsignedShort),
      b"UT" => Ok(Self::UnlimitedText),
      b"UV" => Ok(Self::UnsignedVeryLong),
      _ => Err(()),
    }
  }

  /// Returns the two-character code for a value representation.
  ///
  pub fn to_code(&self) -> &'static str {
    match self {
      Self::AgeString => "AS",
      Self::ApplicationEntity => "AE",
      Self::AttributeTag => "AT",
      Self::CodeString => "CS",
      Self::Date => "DA",
      Self::DateTime => "DT",
      Self::DecimalString => "DS",
      Self::FloatingPointDouble => "FD",
      Self::FloatingPointSingle => "FL",
      Self::IntegerString => "IS",
      Self::LongString => "LO",
      Self::LongText => "LT",
      Self::OtherByteString => "OB",
      Self::OtherDoubleString => "OD",
      Self::OtherFloatString => "OF",
      Self::OtherLongString => "OL",
      Self::OtherVeryLongString => "OV",
      Self::OtherWordString => "OW",
      Self::PersonName => "PN",
      Self::Sequence => "SQ",
      Self::ShortString => "SH",
      Self::ShortText => "ST",
      Self::SignedLong => "SL",
      Self::SignedShort => "SS",
      Self::SignedVeryLong => "SV",
      Self::Time => "TM",
      Self::UniqueIdentifier => "UI",
      Self::UniversalResourceIdentifier => "UR",
      Self::Unknown => "UN",
      Self::UnlimitedCharacters => "UC",
      Self::UnlimitedText => "UT",
      Self::UnsignedLong => "UL",
      Self::UnsignedShort => "US",
      Self::UnsignedVeryLong => "UV",
    }
  }

  /// Returns whether a value representation stores string data.
  ///
  pub fn is_string(&self) -> bool {
    matches!(
      self,
      Self::AgeString
        | Self::ApplicationEntity
        | Self::CodeString
        | Self::Date
        | Self::DateTime
        | Self::DecimalString
        | Self::IntegerString
        | Self::LongString
        | Self::LongText
        | Self::PersonName
        | Self::ShortString
        | Self::ShortText
        | Self::Time
        | Self::UniqueIdentifier
        | Self::UniversalResourceIdentifier
        | Self::UnlimitedCharacters
        | Self::UnlimitedText
    )
  }

  /// Returns whether a string value representation allows multiple values
  /// separated by a backslash. The text VRs and URIs treat the backslash as an
  /// ordinary character.
  ///
  pub fn allows_multiple_string_values(&self) -> bool {
    self.is_string()
      && !matches!(
        self,
        Self::LongText
          | Self::ShortText
          | Self::UnlimitedText
          | Self::UniversalResourceIdentifier
      )
  }

  /// Returns the size in bytes of a single value for value representations
  /// that store fixed-width binary numbers, e.g. 2 for
  /// [`ValueRepresentation::UnsignedShort`].
  ///
  pub fn fixed_value_size(&self) -> Option<usize> {
    match self {
      Self::OtherByteString | Self::Unknown => Some(1),

      Self::OtherWordString | Self::SignedShort | Self::UnsignedShort => {
        Some(2)
      }

      Self::AttributeTag
      | Self::FloatingPointSingle
      | Self::OtherFloatString
      | Self::OtherLongString
      | Self::SignedLong
      | Self::UnsignedLong => Some(4),

      Self::FloatingPointDouble
      | Self::OtherDoubleString
      | Self::OtherVeryLongString
      | Self::SignedVeryLong
      | Self::UnsignedVeryLong => Some(8),

      _ => None,
    }
  }

  /// Returns the byte used to pad values of this VR to an even length.
  ///
  pub fn padding_byte(&self) -> u8 {
    if self.is_string() && *self != Self::UniqueIdentifier {
      b' '
    } else {
      0
    }
  }

  /// Pads bytes to an even length using this VR's padding byte.
  ///
  pub fn pad_bytes_to_even_length(&self, mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.len() % 2 == 1 {
      bytes.push(self.padding_byte());
    }

    bytes
  }
}

impl core::fmt::Display for ValueRepresentation {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    f.write_str(self.to_code())
  }
}

impl core::str::FromStr for ValueRepresentation {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_bytes(s.as_bytes())
      .map_err(|_| format!("Invalid value representation: {s:?}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn code_round_trip_test() {
    for vr in ALL {
      assert_eq!(ValueRepresentation::from_bytes(vr.to_code().as_bytes()), Ok(vr));
    }

    assert_eq!(ValueRepresentation::from_bytes(b"XX"), Err(()));
    assert!("pn".parse::<ValueRepresentation>().is_err());
  }

  #[test]
  fn pad_bytes_to_even_length_test() {
    assert_eq!(
      ValueRepresentation::PersonName.pad_bytes_to_even_length(b"ABC".to_vec()),
      b"ABC ".to_vec()
    );

    assert_eq!(
      ValueRepresentation::UniqueIdentifier
        .pad_bytes_to_even_length(b"1.2.3".to_vec()),
      b"1.2.3\0".to_vec()
    );

    assert_eq!(
      ValueRepresentation::OtherByteString
        .pad_bytes_to_even_length(vec![1, 2]),
      vec![1, 2]
    );
  }

  #[test]
  fn allows_multiple_string_values_test() {
    assert!(ValueRepresentation::UniqueIdentifier.allows_multiple_string_values());
    assert!(!ValueRepresentation::LongText.allows_multiple_string_values());
    assert!(!ValueRepresentation::UnsignedShort.allows_multiple_string_values());
  }
}
