//! Anonymization of a single data set, including all nested sequence items.

use dcmdeid_core::{
  DataElementTag, DataElementValue, DataError, DataSet, DataSetPath,
  ValueRepresentation, dictionary,
};

use crate::anonymize_config::AnonymizeConfig;
use crate::anonymize_error::AnonymizeError;
use crate::date_shift;
use crate::dummy_value::dummy_value;
use crate::exception_table::literal_value;
use crate::rule_resolver::{RepeatingGroup, ResolvedAction, RuleResolver};
use crate::uid_registry::UidRegistry;

/// Anonymizes data sets according to an [`AnonymizeConfig`]. UIDs are
/// replaced through the given [`UidRegistry`] so that they stay consistent
/// across all data sets anonymized with it.
///
pub struct DataSetAnonymizer<'a> {
  config: &'a AnonymizeConfig,
  resolver: RuleResolver<'a>,
  uid_registry: &'a mut UidRegistry,
}

impl<'a> DataSetAnonymizer<'a> {
  pub fn new(
    config: &'a AnonymizeConfig,
    uid_registry: &'a mut UidRegistry,
  ) -> Self {
    Self {
      config,
      resolver: RuleResolver::new(
        &config.rule_table,
        &config.exception_table,
        &config.shift_date_tags,
        &config.preserved_private_tags,
      ),
      uid_registry,
    }
  }

  /// Anonymizes a data set in place.
  ///
  /// If an error is returned the data set is left partially anonymized and
  /// must not be stored.
  ///
  pub fn anonymize(
    &mut self,
    data_set: &mut DataSet,
  ) -> Result<(), AnonymizeError> {
    self.anonymize_with_progress(data_set, &mut |_| ())
  }

  /// Anonymizes a data set in place, calling `on_element` after the action
  /// for each data element has been applied.
  ///
  pub fn anonymize_with_progress(
    &mut self,
    data_set: &mut DataSet,
    on_element: &mut dyn FnMut(DataElementTag),
  ) -> Result<(), AnonymizeError> {
    let mut path = DataSetPath::new();

    self.anonymize_data_set(data_set, &mut path, on_element)?;
    self.insert_missing_exceptions(data_set);

    Ok(())
  }

  fn anonymize_data_set(
    &mut self,
    data_set: &mut DataSet,
    path: &mut DataSetPath,
    on_element: &mut dyn FnMut(DataElementTag),
  ) -> Result<(), AnonymizeError> {
    self.remove_private_retired_and_group_length_tags(data_set);
    self.remove_repeating_groups(data_set, on_element);

    // Walk with a cursor because data elements are removed along the way
    let mut cursor = data_set.first_tag();
    while let Some(tag) = cursor {
      path.add_data_element(tag).map_err(path_error)?;

      self.apply_action(data_set, tag, path, on_element)?;

      path.pop().map_err(path_error)?;

      on_element(tag);

      cursor = data_set.next_tag_after(tag);
    }

    Ok(())
  }

  fn remove_private_retired_and_group_length_tags(
    &self,
    data_set: &mut DataSet,
  ) {
    let preserved_private_tags = &self.config.preserved_private_tags;
    let exception_table = &self.config.exception_table;
    let remove_group_lengths = self.config.remove_group_lengths;
    let remove_retired = self.config.remove_retired;

    data_set.retain(|tag, _| {
      if tag.is_private() && !preserved_private_tags.contains(&tag) {
        return false;
      }

      if remove_retired
        && dictionary::is_retired(tag)
        && !exception_table.contains(tag)
      {
        tracing::debug!("Removing retired data element {tag}");
        return false;
      }

      !(remove_group_lengths && tag.is_group_length())
    });
  }

  fn remove_repeating_groups(
    &self,
    data_set: &mut DataSet,
    on_element: &mut dyn FnMut(DataElementTag),
  ) {
    let exception_table = self.resolver.exception_table();

    for group in RepeatingGroup::ALL {
      let mut cursor = None;

      while let Some(tag) =
        group.next_match(data_set, cursor, |tag| exception_table.contains(tag))
      {
        tracing::debug!("Removing repeating group data element {tag}");

        data_set.delete(tag);
        on_element(tag);

        cursor = Some(tag);
      }
    }
  }

  fn apply_action(
    &mut self,
    data_set: &mut DataSet,
    tag: DataElementTag,
    path: &mut DataSetPath,
    on_element: &mut dyn FnMut(DataElementTag),
  ) -> Result<(), AnonymizeError> {
    let value = data_set.get_value(tag).map_err(|e| e.with_path(path))?;
    let vr = value.value_representation();
    let is_sequence = value.sequence_items().is_ok();

    let action = self.resolver.resolve(tag, vr);

    if action != ResolvedAction::Keep {
      tracing::debug!("Applying {action:?} to {}", path.to_detailed_string());
    }

    match action {
      ResolvedAction::Remove => {
        data_set.delete(tag);
      }

      ResolvedAction::ZeroOrDummy | ResolvedAction::Dummy => {
        let new_value = if is_sequence {
          DataElementValue::new_sequence(vec![])
        } else {
          dummy_value(vr, tag).map_err(|e| e.with_path(path))?
        };

        data_set.insert(tag, new_value);
      }

      ResolvedAction::Keep => {
        if is_sequence {
          let items = data_set
            .get_value_mut(tag)
            .and_then(|value| value.sequence_items_mut())
            .map_err(|e| e.with_path(path))?;

          for (index, item) in items.iter_mut().enumerate() {
            path.add_sequence_item(index).map_err(path_error)?;

            self.anonymize_data_set(item, path, on_element)?;

            path.pop().map_err(path_error)?;
          }
        }
      }

      ResolvedAction::Clean => {
        return Err(AnonymizeError::CleanActionUnsupported {
          path: path.clone(),
        });
      }

      ResolvedAction::ReplaceUid => {
        let value = data_set.get_value(tag).map_err(|e| e.with_path(path))?;
        let new_value =
          self.replace_uids(value).map_err(|e| e.with_path(path))?;

        data_set.insert(tag, new_value);
      }

      ResolvedAction::ReplaceWithLiteral(literal) => {
        data_set.insert(tag, literal_value(vr, literal));
      }

      ResolvedAction::ShiftDate => {
        let value = data_set.get_value(tag).map_err(|e| e.with_path(path))?;
        let new_value =
          self.shift_dates(value).map_err(|e| e.with_path(path))?;

        data_set.insert(tag, new_value);
      }
    }

    Ok(())
  }

  /// Replaces each UID in a value through the UID registry. An empty value
  /// gets a single freshly generated UID.
  ///
  fn replace_uids(
    &mut self,
    value: &DataElementValue,
  ) -> Result<DataElementValue, AnonymizeError> {
    let mut uids = value.get_strings()?;
    if uids.is_empty() {
      uids.push("");
    }

    let new_uids: Vec<String> = uids
      .into_iter()
      .map(|uid| self.uid_registry.pseudonymize(uid))
      .collect();

    let new_uids: Vec<&str> = new_uids.iter().map(String::as_str).collect();

    Ok(DataElementValue::new_unique_identifier(&new_uids)?)
  }

  fn shift_dates(
    &self,
    value: &DataElementValue,
  ) -> Result<DataElementValue, AnonymizeError> {
    let shifted_dates = value
      .get_strings()?
      .into_iter()
      .map(|date| date_shift::shift_date(date, self.config.reference_date))
      .collect::<Result<Vec<_>, _>>()
      .map_err(|details| AnonymizeError::DateShiftFailed {
        details,
        path: DataSetPath::new(),
      })?;

    let shifted_dates: Vec<&str> =
      shifted_dates.iter().map(String::as_str).collect();

    Ok(DataElementValue::new_strings(
      ValueRepresentation::Date,
      &shifted_dates,
    )?)
  }

  /// Inserts exception values for tags that aren't present in the root data
  /// set. The VR comes from the dictionary, falling back to `UN`.
  ///
  fn insert_missing_exceptions(&self, data_set: &mut DataSet) {
    for (tag, literal) in self.config.exception_table.iter() {
      if data_set.has(tag) {
        continue;
      }

      if tag.is_private() && !self.config.preserved_private_tags.contains(&tag)
      {
        continue;
      }

      let vr = match dictionary::find(tag) {
        Ok(item) if item.vr != ValueRepresentation::Sequence => item.vr,
        _ => ValueRepresentation::Unknown,
      };

      data_set.insert(tag, literal_value(vr, literal));
    }
  }
}

fn path_error(details: String) -> AnonymizeError {
  AnonymizeError::DataError(DataError::new_value_invalid(details))
}

/// Adds a function to [`DataSet`] to perform anonymization.
///
pub trait DataSetAnonymizeExtensions {
  /// Anonymizes a data set in place using the given config. UIDs are replaced
  /// through the registry.
  ///
  fn anonymize(
    &mut self,
    config: &AnonymizeConfig,
    uid_registry: &mut UidRegistry,
  ) -> Result<(), AnonymizeError>;
}

impl DataSetAnonymizeExtensions for DataSet {
  fn anonymize(
    &mut self,
    config: &AnonymizeConfig,
    uid_registry: &mut UidRegistry,
  ) -> Result<(), AnonymizeError> {
    DataSetAnonymizer::new(config, uid_registry).anonymize(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rule_table::RuleTable;

  fn patient_record(study_uid: &str, sop_uid: &str) -> DataSet {
    let mut data_set = DataSet::new();

    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["DOE^JOHN"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::PATIENT_SEX, &["M"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::ACCESSION_NUMBER, &["AC123"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::ACQUISITION_COMMENTS, &["Patient moved"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::STUDY_DATE, &["20240311"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::MODALITY, &["CT"])
      .unwrap();
    data_set.insert(
      dictionary::STUDY_INSTANCE_UID.tag,
      DataElementValue::new_unique_identifier(&[study_uid]).unwrap(),
    );
    data_set.insert(
      dictionary::SOP_INSTANCE_UID.tag,
      DataElementValue::new_unique_identifier(&[sop_uid]).unwrap(),
    );
    data_set.insert(
      dictionary::ROWS.tag,
      DataElementValue::new_unsigned_short(&[512]),
    );

    data_set
  }

  fn anonymize(
    data_set: &mut DataSet,
    config: &AnonymizeConfig,
    uid_registry: &mut UidRegistry,
  ) -> Result<(), AnonymizeError> {
    DataSetAnonymizer::new(config, uid_registry).anonymize(data_set)
  }

  #[test]
  fn patient_record_test() {
    let config = AnonymizeConfig::default();
    let mut uid_registry = UidRegistry::new();

    let mut data_set = patient_record("1.2.3.4", "1.2.3.4.1");
    anonymize(&mut data_set, &config, &mut uid_registry).unwrap();

    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("ANONYMIZED^ANONYMIZED")
    );
    assert_eq!(data_set.get_string(dictionary::PATIENT_SEX.tag), Ok("O"));
    assert_eq!(
      data_set.get_string(dictionary::ACCESSION_NUMBER.tag),
      Ok("ANONYMIZED")
    );
    assert_eq!(data_set.get_string(dictionary::STUDY_DATE.tag), Ok("19000101"));
    assert!(!data_set.has(dictionary::ACQUISITION_COMMENTS.tag));

    let study_uid =
      data_set.get_string(dictionary::STUDY_INSTANCE_UID.tag).unwrap();
    assert_ne!(study_uid, "1.2.3.4");
    assert_eq!(uid_registry.get("1.2.3.4"), Some(study_uid));

    // Data elements without a rule are kept
    assert_eq!(data_set.get_string(dictionary::MODALITY.tag), Ok("CT"));
    assert_eq!(
      data_set.get_value(dictionary::ROWS.tag).unwrap().get_ints(),
      Ok(vec![512])
    );
  }

  #[test]
  fn removal_completeness_test() {
    let config = AnonymizeConfig::default();
    let mut uid_registry = UidRegistry::new();

    // Every tag whose rule resolves to removal is given a value
    let mut data_set: DataSet = RuleTable::canonical()
      .iter()
      .filter(|(_, code)| code.resolve() == crate::Action::Remove)
      .map(|(tag, _)| {
        (
          *tag,
          DataElementValue::new_binary(ValueRepresentation::Unknown, vec![1, 2])
            .unwrap(),
        )
      })
      .collect();
    assert!(!data_set.is_empty());

    anonymize(&mut data_set, &config, &mut uid_registry).unwrap();

    assert!(data_set.is_empty(), "Remaining: {:?}", data_set.tags());
  }

  #[test]
  fn dummy_determinism_test() {
    let config = AnonymizeConfig::default();
    let mut uid_registry = UidRegistry::new();

    let mut a = patient_record("1.2.3", "1.2.3.1");
    let mut b = patient_record("1.2.3", "1.2.3.1");
    b.insert_string_value(&dictionary::PATIENT_NAME, &["ROE^JANE"])
      .unwrap();
    b.insert_string_value(&dictionary::PATIENT_SEX, &["F"])
      .unwrap();

    anonymize(&mut a, &config, &mut uid_registry).unwrap();
    anonymize(&mut b, &config, &mut uid_registry).unwrap();

    assert_eq!(a, b);
  }

  #[test]
  fn sequence_test() {
    let config = AnonymizeConfig::default();
    let mut uid_registry = UidRegistry::new();

    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::CODE_VALUE, &["113100"])
      .unwrap();
    item
      .insert_string_value(&dictionary::PERSON_NAME, &["SMITH^ANN"])
      .unwrap();
    item.insert(
      DataElementTag::new(0x0011, 0x1010),
      DataElementValue::new_long_string(&["Vendor data"]).unwrap(),
    );

    let mut graphic_item = DataSet::new();
    graphic_item
      .insert_string_value(&dictionary::CODE_MEANING, &["Text"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::CONCEPT_NAME_CODE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item.clone(), item]),
    );
    data_set.insert(
      dictionary::GRAPHIC_ANNOTATION_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![graphic_item]),
    );

    anonymize(&mut data_set, &config, &mut uid_registry).unwrap();

    // Kept sequences have their items anonymized
    let items = data_set
      .get_sequence_items(dictionary::CONCEPT_NAME_CODE_SEQUENCE.tag)
      .unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
      assert_eq!(item.get_string(dictionary::CODE_VALUE.tag), Ok("113100"));
      assert_eq!(
        item.get_string(dictionary::PERSON_NAME.tag),
        Ok("ANONYMIZED^ANONYMIZED")
      );
      assert!(!item.has(DataElementTag::new(0x0011, 0x1010)));
    }

    // Sequences given a dummy value are emptied
    assert_eq!(
      data_set.get_sequence_items(dictionary::GRAPHIC_ANNOTATION_SEQUENCE.tag),
      Ok(&[][..])
    );
  }

  #[test]
  fn nested_uid_consistency_test() {
    let config = AnonymizeConfig::default();
    let mut uid_registry = UidRegistry::new();

    let mut item = DataSet::new();
    item.insert(
      dictionary::REFERENCED_SOP_INSTANCE_UID.tag,
      DataElementValue::new_unique_identifier(&["1.2.3.4.1"]).unwrap(),
    );

    let mut referencing = DataSet::new();
    referencing.insert(
      dictionary::CONCEPT_NAME_CODE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );

    let mut referenced = patient_record("1.2.3.4", "1.2.3.4.1");

    anonymize(&mut referenced, &config, &mut uid_registry).unwrap();
    anonymize(&mut referencing, &config, &mut uid_registry).unwrap();

    let sop_uid =
      referenced.get_string(dictionary::SOP_INSTANCE_UID.tag).unwrap();
    let referenced_uid = referencing
      .get_sequence_items(dictionary::CONCEPT_NAME_CODE_SEQUENCE.tag)
      .unwrap()[0]
      .get_string(dictionary::REFERENCED_SOP_INSTANCE_UID.tag)
      .unwrap();

    assert_eq!(sop_uid, referenced_uid);
    assert_ne!(sop_uid, "1.2.3.4.1");
  }

  #[test]
  fn multi_valued_uid_test() {
    let config = AnonymizeConfig::default();
    let mut uid_registry = UidRegistry::new();

    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::FAILED_SOP_INSTANCE_UID_LIST.tag,
      DataElementValue::new_unique_identifier(&["1.1", "1.2", "1.1"]).unwrap(),
    );

    anonymize(&mut data_set, &config, &mut uid_registry).unwrap();

    let uids = data_set
      .get_strings(dictionary::FAILED_SOP_INSTANCE_UID_LIST.tag)
      .unwrap();
    assert_eq!(uids.len(), 3);
    assert_ne!(uids[0], uids[1]);
    assert_eq!(uids[0], uids[2]);
    assert_eq!(uid_registry.len(), 2);
  }

  #[test]
  fn exception_test() {
    let config = AnonymizeConfig::default()
      .exception(dictionary::PATIENT_NAME.tag, "ANON^PATIENT")
      .exception(dictionary::ACQUISITION_COMMENTS.tag, "None")
      .exception(dictionary::PATIENT_ID.tag, "SUBJECT-01")
      .exception(DataElementTag::new(0x0009, 0x1001), "Ignored");
    let mut uid_registry = UidRegistry::new();

    let mut data_set = patient_record("1.2.3", "1.2.3.1");
    anonymize(&mut data_set, &config, &mut uid_registry).unwrap();

    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("ANON^PATIENT")
    );

    // Exceptions take priority over removal
    assert_eq!(
      data_set.get_string(dictionary::ACQUISITION_COMMENTS.tag),
      Ok("None")
    );

    // Missing exception tags are inserted with their dictionary VR
    assert_eq!(
      data_set
        .get_value(dictionary::PATIENT_ID.tag)
        .unwrap()
        .value_representation(),
      ValueRepresentation::LongString
    );
    assert_eq!(
      data_set.get_string(dictionary::PATIENT_ID.tag),
      Ok("SUBJECT-01")
    );

    // Exceptions on private tags that aren't preserved are ignored
    assert!(!data_set.has(DataElementTag::new(0x0009, 0x1001)));
  }

  #[test]
  fn private_tags_test() {
    let preserved_tag = DataElementTag::new(0x0029, 0x1010);
    let config = AnonymizeConfig::default().preserve_private_tag(preserved_tag);
    let mut uid_registry = UidRegistry::new();

    let mut data_set = patient_record("1.2.3", "1.2.3.1");
    for tag in [
      DataElementTag::new(0x0009, 0x0010),
      DataElementTag::new(0x0009, 0x1001),
      DataElementTag::new(0x0029, 0x0010),
      preserved_tag,
    ] {
      data_set.insert(tag, DataElementValue::new_long_string(&["X"]).unwrap());
    }

    anonymize(&mut data_set, &config, &mut uid_registry).unwrap();

    let private_tags: Vec<_> = data_set
      .tags()
      .into_iter()
      .filter(|tag| tag.is_private())
      .collect();
    assert_eq!(private_tags, vec![preserved_tag]);
  }

  #[test]
  fn group_length_test() {
    let mut data_set = DataSet::new();
    data_set.insert(
      DataElementTag::new(0x0008, 0x0000),
      DataElementValue::new_unsigned_long(&[100]),
    );
    data_set
      .insert_string_value(&dictionary::MODALITY, &["MR"])
      .unwrap();

    let mut kept = data_set.clone();

    anonymize(
      &mut data_set,
      &AnonymizeConfig::default(),
      &mut UidRegistry::new(),
    )
    .unwrap();
    assert_eq!(data_set.tags(), vec![dictionary::MODALITY.tag]);

    anonymize(
      &mut kept,
      &AnonymizeConfig::default().remove_group_lengths(false),
      &mut UidRegistry::new(),
    )
    .unwrap();
    assert_eq!(kept.len(), 2);
  }

  #[test]
  fn retired_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::IDENTIFYING_COMMENTS, &["Ward 4"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::MODALITY, &["MR"])
      .unwrap();
    data_set
      .insert_string_value(
        &dictionary::LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID,
        &["1.2.3.9"],
      )
      .unwrap();

    let mut kept = data_set.clone();
    let mut with_exception = data_set.clone();

    anonymize(
      &mut data_set,
      &AnonymizeConfig::default(),
      &mut UidRegistry::new(),
    )
    .unwrap();
    assert_eq!(data_set.tags(), vec![dictionary::MODALITY.tag]);

    anonymize(
      &mut kept,
      &AnonymizeConfig::default().remove_retired(false),
      &mut UidRegistry::new(),
    )
    .unwrap();

    // Retired data elements that are kept have their rule applied
    let uid = kept
      .get_string(dictionary::LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID.tag)
      .unwrap();
    assert_ne!(uid, "1.2.3.9");
    assert!(!kept.has(dictionary::IDENTIFYING_COMMENTS.tag));

    anonymize(
      &mut with_exception,
      &AnonymizeConfig::default()
        .exception(dictionary::IDENTIFYING_COMMENTS.tag, "None"),
      &mut UidRegistry::new(),
    )
    .unwrap();
    assert_eq!(
      with_exception.get_string(dictionary::IDENTIFYING_COMMENTS.tag),
      Ok("None")
    );
  }

  #[test]
  fn series_description_test() {
    let mut data_set = patient_record("1.2.3", "1.2.3.1");
    data_set
      .insert_string_value(&dictionary::SERIES_DESCRIPTION, &["DOE JOHN knee"])
      .unwrap();

    anonymize(
      &mut data_set,
      &AnonymizeConfig::default(),
      &mut UidRegistry::new(),
    )
    .unwrap();

    assert!(!data_set.has(dictionary::SERIES_DESCRIPTION.tag));
  }

  #[test]
  fn repeating_groups_test() {
    let config = AnonymizeConfig::default()
      .exception(DataElementTag::new(0x6002, 0x4000), "Kept comment");

    let mut data_set = DataSet::new();
    for tag in [
      DataElementTag::new(0x5000, 0x0005),
      DataElementTag::new(0x5000, 0x3000),
      DataElementTag::new(0x5010, 0x3000),
      DataElementTag::new(0x6000, 0x0010),
      DataElementTag::new(0x6000, 0x3000),
      DataElementTag::new(0x6002, 0x4000),
    ] {
      data_set.insert(
        tag,
        DataElementValue::new_binary(ValueRepresentation::Unknown, vec![0, 0])
          .unwrap(),
      );
    }

    anonymize(&mut data_set, &config, &mut UidRegistry::new()).unwrap();

    assert_eq!(
      data_set.tags(),
      vec![
        DataElementTag::new(0x6000, 0x0010),
        DataElementTag::new(0x6002, 0x4000)
      ]
    );
  }

  #[test]
  fn clean_action_test() {
    let rule_table =
      RuleTable::from_entries([(dictionary::ACQUISITION_COMMENTS.tag, "C")])
        .unwrap();
    let config = AnonymizeConfig::default().rule_table(rule_table);

    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::ACQUISITION_COMMENTS, &["Comment"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::CONCEPT_NAME_CODE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );

    let error =
      anonymize(&mut data_set, &config, &mut UidRegistry::new()).unwrap_err();

    assert!(error.is_fatal());
    assert_eq!(
      error.path().map(|path| path.to_string()),
      Some("0040A043/[0]/00184000".to_string())
    );
  }

  #[test]
  fn shift_date_test() {
    let config = AnonymizeConfig::default()
      .shift_date(dictionary::STUDY_DATE.tag)
      .reference_date(crate::date_shift::parse_date("20240301").unwrap());

    let mut data_set = patient_record("1.2.3", "1.2.3.1");
    anonymize(&mut data_set, &config, &mut UidRegistry::new()).unwrap();

    assert_eq!(data_set.get_string(dictionary::STUDY_DATE.tag), Ok("19000111"));

    let mut data_set = patient_record("1.2.3", "1.2.3.1");
    data_set
      .insert_string_value(&dictionary::STUDY_DATE, &["2024-03-11"])
      .unwrap();

    let error =
      anonymize(&mut data_set, &config, &mut UidRegistry::new()).unwrap_err();
    assert!(!error.is_fatal());
    assert!(matches!(error, AnonymizeError::DateShiftFailed { .. }));

    // Failures in sequence items report where they occurred
    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::STUDY_DATE, &["2024-03-11"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::CONCEPT_NAME_CODE_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );

    let error =
      anonymize(&mut data_set, &config, &mut UidRegistry::new()).unwrap_err();
    assert_eq!(
      error.path().map(|path| path.to_string()),
      Some("0040A043/[0]/00080020".to_string())
    );
  }

  #[test]
  fn progress_test() {
    let config = AnonymizeConfig::default();
    let mut uid_registry = UidRegistry::new();
    let mut data_set = patient_record("1.2.3", "1.2.3.1");

    let mut count = 0;
    DataSetAnonymizer::new(&config, &mut uid_registry)
      .anonymize_with_progress(&mut data_set, &mut |_| count += 1)
      .unwrap();

    assert_eq!(count, 9);
  }

  #[test]
  fn extension_trait_test() {
    let mut data_set = patient_record("1.2.3", "1.2.3.1");

    data_set
      .anonymize(&AnonymizeConfig::default(), &mut UidRegistry::new())
      .unwrap();

    assert_eq!(data_set.get_string(dictionary::PATIENT_SEX.tag), Ok("O"));
  }
}
