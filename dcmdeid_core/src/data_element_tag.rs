//! A DICOM data element tag, defined as 16-bit `group` and `element` values.

/// A data element tag that is defined by `group` and `element` values, each of
/// which is a 16-bit unsigned integer. Tags order by group, then element.
///
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct DataElementTag {
  pub group: u16,
  pub element: u16,
}

impl DataElementTag {
  /// The zero data element tag, `(0000,0000)`.
  ///
  pub const ZERO: Self = Self::new(0, 0);

  /// Constructs a new data element tag with the given group and element
  /// values.
  ///
  pub const fn new(group: u16, element: u16) -> Self {
    Self { group, element }
  }

  /// Returns whether the tag is private, which is determined by its group
  /// number being odd.
  ///
  pub fn is_private(&self) -> bool {
    self.group % 2 == 1
  }

  /// Returns whether the tag is a group length tag, i.e. its element is zero.
  ///
  pub fn is_group_length(&self) -> bool {
    self.element == 0
  }

  /// Converts a tag to a single 32-bit integer where the group is in the high
  /// 16 bits and the element is in the low 16 bits.
  ///
  pub fn to_int(&self) -> u32 {
    ((self.group as u32) << 16) | (self.element as u32)
  }

  /// Creates a tag from a 32-bit integer where the group is in the high 16
  /// bits and the element is in the low 16 bits.
  ///
  pub fn from_int(value: u32) -> Self {
    Self::new((value >> 16) as u16, (value & 0xFFFF) as u16)
  }

  /// Formats a tag as an 8-character hex string, e.g. `"00100010"`.
  ///
  pub fn to_hex_string(&self) -> String {
    format!("{:04X}{:04X}", self.group, self.element)
  }

  /// Parses a tag from a hex string. Accepts the 8-character form
  /// `"GGGGEEEE"` as well as `"GGGG,EEEE"` and `"(GGGG,EEEE)"`.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_hex_string(s: &str) -> Result<Self, ()> {
    let s = s.trim();
    let s = s
      .strip_prefix('(')
      .and_then(|s| s.strip_suffix(')'))
      .unwrap_or(s);

    let hex: String = s.chars().filter(|c| *c != ',').collect();
    if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(());
    }

    u32::from_str_radix(&hex, 16)
      .map(Self::from_int)
      .map_err(|_| ())
  }
}

impl core::fmt::Display for DataElementTag {
  /// Formats a tag as `"(GGGG,EEEE)"`.
  ///
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "({:04X},{:04X})", self.group, self.element)
  }
}
