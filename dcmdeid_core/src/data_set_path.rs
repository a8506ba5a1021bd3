//! The location of a data element or sequence item inside a nested data set.

use crate::{DataElementTag, dictionary};

/// A path through a data set to a specific data element or sequence item.
/// Used to give errors and log messages the precise location they relate to.
///
/// As a string, entries are separated by forward slashes, e.g.
/// `"00081140/[1]/00081155"` is the *'(0008,1155) Referenced SOP Instance
/// UID'* in the second item of the *'(0008,1140) Referenced Image Sequence'*.
/// The empty path refers to the root data set.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSetPath(Vec<DataSetPathEntry>);

#[derive(Clone, Copy, Debug, PartialEq)]
enum DataSetPathEntry {
  DataElement { tag: DataElementTag },
  SequenceItem { index: usize },
}

impl DataSetPath {
  /// Constructs an empty path, which refers to the root data set.
  ///
  pub fn new() -> Self {
    Self(vec![])
  }

  /// Constructs a path to a data element in the root data set.
  ///
  pub fn new_with_data_element(tag: DataElementTag) -> Self {
    Self(vec![DataSetPathEntry::DataElement { tag }])
  }

  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns whether the path refers to the root data set or to one of its
  /// data elements.
  ///
  pub fn is_root(&self) -> bool {
    matches!(
      self.0.as_slice(),
      [] | [DataSetPathEntry::DataElement { .. }]
    )
  }

  /// Returns the tag of the last entry when it is a data element.
  ///
  pub fn final_data_element(&self) -> Option<DataElementTag> {
    match self.0.last() {
      Some(DataSetPathEntry::DataElement { tag }) => Some(*tag),
      _ => None,
    }
  }

  /// Appends a data element. Only valid on an empty path or one that ends
  /// with a sequence item.
  ///
  pub fn add_data_element(
    &mut self,
    tag: DataElementTag,
  ) -> Result<(), String> {
    match self.0.last() {
      None | Some(DataSetPathEntry::SequenceItem { .. }) => {
        self.0.push(DataSetPathEntry::DataElement { tag });
        Ok(())
      }

      _ => Err(format!(
        "Invalid data set path entry: {}",
        tag.to_hex_string()
      )),
    }
  }

  /// Appends a sequence item index. Only valid on a path that ends with a
  /// data element.
  ///
  pub fn add_sequence_item(&mut self, index: usize) -> Result<(), String> {
    match self.0.last() {
      Some(DataSetPathEntry::DataElement { .. }) => {
        self.0.push(DataSetPathEntry::SequenceItem { index });
        Ok(())
      }

      _ => Err(format!("Invalid data set path entry: [{index}]")),
    }
  }

  /// Removes the last entry.
  ///
  pub fn pop(&mut self) -> Result<(), String> {
    self
      .0
      .pop()
      .map(|_| ())
      .ok_or_else(|| "Data set path is empty".to_string())
  }

  /// Formats the path with the dictionary name of every data element, e.g.
  /// `"(0008,1140) Referenced Image Sequence / Item 1"`.
  ///
  pub fn to_detailed_string(&self) -> String {
    self
      .0
      .iter()
      .map(|entry| match entry {
        DataSetPathEntry::DataElement { tag } => dictionary::tag_with_name(*tag),
        DataSetPathEntry::SequenceItem { index } => format!("Item {index}"),
      })
      .collect::<Vec<_>>()
      .join(" / ")
  }
}

impl core::fmt::Display for DataSetPath {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    let path = self
      .0
      .iter()
      .map(|entry| match entry {
        DataSetPathEntry::DataElement { tag } => tag.to_hex_string(),
        DataSetPathEntry::SequenceItem { index } => format!("[{index}]"),
      })
      .collect::<Vec<_>>()
      .join("/");

    f.write_str(&path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn build_and_format_test() {
    let mut path = DataSetPath::new();
    assert!(path.is_root());

    path
      .add_data_element(DataElementTag::new(0x0008, 0x1140))
      .unwrap();
    assert!(path.is_root());
    assert_eq!(path.to_string(), "00081140");

    assert_eq!(
      path.add_data_element(DataElementTag::new(0x0008, 0x1155)),
      Err("Invalid data set path entry: 00081155".to_string())
    );

    path.add_sequence_item(1).unwrap();
    path
      .add_data_element(DataElementTag::new(0x0008, 0x1155))
      .unwrap();

    assert!(!path.is_root());
    assert_eq!(path.len(), 3);
    assert_eq!(path.to_string(), "00081140/[1]/00081155");
    assert_eq!(
      path.final_data_element(),
      Some(DataElementTag::new(0x0008, 0x1155))
    );
    assert_eq!(
      path.to_detailed_string(),
      "(0008,1140) Referenced Image Sequence / Item 1 / (0008,1155) \
       Referenced SOP Instance UID"
    );
  }

  #[test]
  fn pop_test() {
    let mut path =
      DataSetPath::new_with_data_element(DataElementTag::new(0x0010, 0x0010));

    assert_eq!(path.pop(), Ok(()));
    assert_eq!(path.pop(), Err("Data set path is empty".to_string()));
    assert_eq!(path.add_sequence_item(0), Err("Invalid data set path entry: [0]".to_string()));
  }
}
