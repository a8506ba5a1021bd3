//! Work with the DICOM `UniqueIdentifier` value representation.

use std::sync::LazyLock;

use regex::Regex;

static UID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*))*$").unwrap()
});

/// The maximum length of a UID in bytes.
///
pub const MAX_LENGTH: usize = 64;

/// Returns whether the given string is a valid UID: dot-separated numeric
/// components with no leading zeros, at most 64 characters long.
///
pub fn is_valid(uid: &str) -> bool {
  !uid.is_empty() && uid.len() <= MAX_LENGTH && UID_REGEX.is_match(uid)
}

/// Generates a new random UID under the `2.25` root, which is reserved for
/// UIDs derived from a UUID-sized random number. The result is always valid
/// and never collides with UIDs issued under an organization root.
///
/// Ref: PS3.5 B.2.
///
pub fn new_random() -> String {
  format!("2.25.{}", rand::random::<u128>())
}

/// Converts UIDs to bytes for storage in a data element value, joined by
/// backslashes and padded to even length with a null byte.
///
pub fn to_bytes(uids: &[&str]) -> Vec<u8> {
  let mut bytes = uids.join("\\").into_bytes();
  if bytes.len() % 2 == 1 {
    bytes.push(0);
  }

  bytes
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn is_valid_test() {
    assert!(is_valid("1.2.840.10008.1.2"));
    assert!(is_valid("0"));
    assert!(!is_valid(""));
    assert!(!is_valid("1.02"));
    assert!(!is_valid("1..2"));
    assert!(!is_valid("1.2."));
    assert!(!is_valid(&format!("1.{}", "2".repeat(63))));
  }

  #[test]
  fn new_random_test() {
    let a = new_random();
    let b = new_random();

    assert!(is_valid(&a));
    assert!(a.starts_with("2.25."));
    assert_ne!(a, b);
  }

  #[test]
  fn to_bytes_test() {
    assert_eq!(to_bytes(&["1.2"]), b"1.2\0".to_vec());
    assert_eq!(to_bytes(&["1.2", "3.4"]), b"1.2\\3.4\0".to_vec());
    assert_eq!(to_bytes(&["1.23"]), b"1.23".to_vec());
  }
}
