//! A DICOM data set, defined as a map of data element tags to data element
//! values.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::{
  DataElementTag, DataElementValue, DataError, DataSetPath, dictionary,
};

/// A DICOM data set that is a mapping of data element tags to data element
/// values. Iteration is always in ascending tag order.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet(BTreeMap<DataElementTag, DataElementValue>);

impl DataSet {
  /// Returns a new empty data set.
  ///
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Returns the number of data elements in the data set. Data elements in
  /// nested sequences are not counted.
  ///
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns the total number of data elements in the data set, including
  /// those in nested sequence items.
  ///
  pub fn total_data_element_count(&self) -> usize {
    self
      .0
      .values()
      .map(|value| {
        1 + value
          .sequence_items()
          .map(|items| {
            items
              .iter()
              .map(DataSet::total_data_element_count)
              .sum::<usize>()
          })
          .unwrap_or(0)
      })
      .sum()
  }

  /// Returns whether a data element with the given tag exists.
  ///
  pub fn has(&self, tag: DataElementTag) -> bool {
    self.0.contains_key(&tag)
  }

  /// Inserts a data element, replacing any existing value for the tag.
  ///
  pub fn insert(&mut self, tag: DataElementTag, value: DataElementValue) {
    self.0.insert(tag, value);
  }

  /// Inserts a string data element using the VR from the dictionary item.
  ///
  pub fn insert_string_value(
    &mut self,
    item: &dictionary::Item,
    values: &[&str],
  ) -> Result<(), DataError> {
    let value = DataElementValue::new_strings(item.vr, values)
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(item.tag)))?;

    self.insert(item.tag, value);

    Ok(())
  }

  /// Removes a data element and returns its value, if it was present.
  ///
  pub fn delete(&mut self, tag: DataElementTag) -> Option<DataElementValue> {
    self.0.remove(&tag)
  }

  /// Keeps only the data elements that the predicate returns true for.
  ///
  pub fn retain(
    &mut self,
    mut predicate: impl FnMut(DataElementTag, &DataElementValue) -> bool,
  ) {
    self.0.retain(|tag, value| predicate(*tag, value));
  }

  /// Returns the value of a data element.
  ///
  pub fn get_value(
    &self,
    tag: DataElementTag,
  ) -> Result<&DataElementValue, DataError> {
    self.0.get(&tag).ok_or_else(|| {
      DataError::new_value_not_present()
        .with_path(&DataSetPath::new_with_data_element(tag))
    })
  }

  /// Returns the value of a data element for modification.
  ///
  pub fn get_value_mut(
    &mut self,
    tag: DataElementTag,
  ) -> Result<&mut DataElementValue, DataError> {
    self.0.get_mut(&tag).ok_or_else(|| {
      DataError::new_value_not_present()
        .with_path(&DataSetPath::new_with_data_element(tag))
    })
  }

  /// Returns the single string value of a data element.
  ///
  pub fn get_string(&self, tag: DataElementTag) -> Result<&str, DataError> {
    self
      .get_value(tag)?
      .get_string()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the string values of a data element.
  ///
  pub fn get_strings(
    &self,
    tag: DataElementTag,
  ) -> Result<Vec<&str>, DataError> {
    self
      .get_value(tag)?
      .get_strings()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the items of a sequence data element.
  ///
  pub fn get_sequence_items(
    &self,
    tag: DataElementTag,
  ) -> Result<&[DataSet], DataError> {
    self
      .get_value(tag)?
      .sequence_items()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Returns the tags of all data elements in ascending order.
  ///
  pub fn tags(&self) -> Vec<DataElementTag> {
    self.0.keys().copied().collect()
  }

  /// Returns the first tag in the data set, if any.
  ///
  pub fn first_tag(&self) -> Option<DataElementTag> {
    self.0.keys().next().copied()
  }

  /// Returns the next tag after the given one. The given tag doesn't need to be
  /// present, which allows a caller to walk the data set as a cursor while
  /// inserting and deleting data elements along the way.
  ///
  pub fn next_tag_after(&self, tag: DataElementTag) -> Option<DataElementTag> {
    self
      .0
      .range((Bound::Excluded(tag), Bound::Unbounded))
      .next()
      .map(|(tag, _)| *tag)
  }

  /// Returns the first tag after `after` that matches the predicate, or the
  /// first match in the whole data set when `after` is `None`.
  ///
  pub fn next_matching_tag(
    &self,
    after: Option<DataElementTag>,
    predicate: impl Fn(DataElementTag) -> bool,
  ) -> Option<DataElementTag> {
    let lower = match after {
      Some(tag) => Bound::Excluded(tag),
      None => Bound::Unbounded,
    };

    self
      .0
      .range((lower, Bound::Unbounded))
      .map(|(tag, _)| *tag)
      .find(|tag| predicate(*tag))
  }

  /// Iterates over the data elements in ascending tag order.
  ///
  pub fn iter(
    &self,
  ) -> std::collections::btree_map::Iter<'_, DataElementTag, DataElementValue>
  {
    self.0.iter()
  }

  /// Formats the data set as indented lines of text, one per data element and
  /// sequence item, passing each line to the callback.
  ///
  pub fn to_lines(&self, output_width: usize, callback: &mut impl FnMut(String)) {
    self.to_lines_at_depth(0, output_width, callback);
  }

  fn to_lines_at_depth(
    &self,
    depth: usize,
    output_width: usize,
    callback: &mut impl FnMut(String),
  ) {
    let indent = "  ".repeat(depth);

    for (tag, value) in self.iter() {
      let header = format!(
        "{indent}{} {}",
        dictionary::tag_with_name(*tag),
        value.value_representation()
      );

      let remaining = output_width.saturating_sub(header.chars().count() + 1);
      callback(format!("{header} {}", value.to_string(remaining.max(8))));

      if let Ok(items) = value.sequence_items() {
        for (index, item) in items.iter().enumerate() {
          callback(format!("{indent}  Item {index}"));
          item.to_lines_at_depth(depth + 2, output_width, callback);
        }
      }
    }
  }
}

impl FromIterator<(DataElementTag, DataElementValue)> for DataSet {
  fn from_iter<T: IntoIterator<Item = (DataElementTag, DataElementValue)>>(
    iter: T,
  ) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a DataSet {
  type Item = (&'a DataElementTag, &'a DataElementValue);
  type IntoIter =
    std::collections::btree_map::Iter<'a, DataElementTag, DataElementValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ValueRepresentation;

  fn sample_data_set() -> DataSet {
    let mut data_set = DataSet::new();

    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["DOE^JOHN"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::PATIENT_SEX, &["M"])
      .unwrap();
    data_set.insert(
      dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![
        [(
          dictionary::REFERENCED_SOP_INSTANCE_UID.tag,
          DataElementValue::new_unique_identifier(&["1.2.3"]).unwrap(),
        )]
        .into_iter()
        .collect(),
      ]),
    );

    data_set
  }

  #[test]
  fn get_value_test() {
    let data_set = sample_data_set();

    assert_eq!(data_set.get_string(dictionary::PATIENT_SEX.tag), Ok("M"));
    assert_eq!(
      data_set.get_string(dictionary::STUDY_DATE.tag),
      Err(DataError::new_value_not_present().with_path(
        &DataSetPath::new_with_data_element(dictionary::STUDY_DATE.tag)
      ))
    );
    assert_eq!(
      data_set
        .get_sequence_items(dictionary::REFERENCED_IMAGE_SEQUENCE.tag)
        .unwrap()
        .len(),
      1
    );
  }

  #[test]
  fn total_data_element_count_test() {
    let data_set = sample_data_set();

    assert_eq!(data_set.len(), 3);
    assert_eq!(data_set.total_data_element_count(), 4);
  }

  #[test]
  fn cursor_test() {
    let mut data_set = sample_data_set();

    let first = data_set.first_tag().unwrap();
    assert_eq!(first, dictionary::REFERENCED_IMAGE_SEQUENCE.tag);

    // Deleting the current element must not break the walk
    data_set.delete(first);
    assert_eq!(
      data_set.next_tag_after(first),
      Some(dictionary::PATIENT_NAME.tag)
    );

    assert_eq!(
      data_set.next_matching_tag(None, |tag| tag.element == 0x0040),
      Some(dictionary::PATIENT_SEX.tag)
    );
    assert_eq!(
      data_set.next_matching_tag(Some(dictionary::PATIENT_SEX.tag), |_| true),
      None
    );
  }

  #[test]
  fn retain_test() {
    let mut data_set = sample_data_set();
    data_set.insert(
      DataElementTag::new(0x0009, 0x0010),
      DataElementValue::new_string(ValueRepresentation::LongString, "VENDOR")
        .unwrap(),
    );

    data_set.retain(|tag, _| !tag.is_private());

    assert!(!data_set.has(DataElementTag::new(0x0009, 0x0010)));
    assert_eq!(data_set.len(), 3);
  }

  #[test]
  fn to_lines_test() {
    let mut lines = vec![];
    sample_data_set().to_lines(80, &mut |line| lines.push(line));

    assert_eq!(
      lines,
      vec![
        "(0008,1140) Referenced Image Sequence SQ 1 item",
        "  Item 0",
        "    (0008,1155) Referenced SOP Instance UID UI \"1.2.3\"",
        "(0010,0010) Patient's Name PN \"DOE^JOHN\"",
        "(0010,0040) Patient's Sex CS \"M\"",
      ]
    );
  }
}
