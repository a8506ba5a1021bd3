//! Shifting of `DA` values so that intervals between dates are preserved
//! while the absolute dates are hidden.

use chrono::NaiveDate;

/// The date that shifted dates are relative to: a date equal to the
/// reference date becomes `19000101`.
///
pub const SHIFT_ORIGIN: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
  Some(date) => date,
  None => panic!("Invalid date shift origin"),
};

const DATE_FORMAT: &str = "%Y%m%d";

/// Shifts a single `YYYYMMDD` date by the interval between it and the
/// reference date, returning `19000101 + (date - reference_date)`.
///
pub fn shift_date(
  value: &str,
  reference_date: NaiveDate,
) -> Result<String, String> {
  let date = parse_date(value)?;

  SHIFT_ORIGIN
    .checked_add_signed(date.signed_duration_since(reference_date))
    .map(|shifted| shifted.format(DATE_FORMAT).to_string())
    .ok_or_else(|| format!("Shifted date for '{value}' is out of range"))
}

/// Parses a `YYYYMMDD` date string.
///
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
  if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
    return Err(format!("Date '{value}' is not of the form YYYYMMDD"));
  }

  NaiveDate::parse_from_str(value, DATE_FORMAT)
    .map_err(|_| format!("Date '{value}' is not a valid date"))
}
