//! Parsers for argument values shared by commands.

use dcmdeid::anonymize::ExceptionTable;
use dcmdeid::core::DataElementTag;

pub fn validate_data_element_tag(s: &str) -> Result<DataElementTag, String> {
  DataElementTag::from_hex_string(s)
    .map_err(|_| "Invalid data element tag".to_string())
}

/// Parses a `GGGGEEEE=value` exception argument.
///
pub fn validate_exception(s: &str) -> Result<(DataElementTag, String), String> {
  ExceptionTable::parse_entry(s)
}

/// Parses a date in the `YYYYMMDD` format.
///
pub fn validate_date(s: &str) -> Result<chrono::NaiveDate, String> {
  chrono::NaiveDate::parse_from_str(s, "%Y%m%d")
    .map_err(|_| "Invalid date, expected YYYYMMDD".to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validate_exception_test() {
    assert_eq!(
      validate_exception("00100020=SUBJECT=1"),
      Ok((DataElementTag::new(0x0010, 0x0020), "SUBJECT=1".to_string()))
    );

    assert!(validate_exception("0010002=X").is_err());
    assert!(validate_exception("00100020").is_err());
  }

  #[test]
  fn validate_date_test() {
    assert_eq!(
      validate_date("20240301"),
      Ok(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    );
    assert!(validate_date("2024-03-01").is_err());
  }
}
