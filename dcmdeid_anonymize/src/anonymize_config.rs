use std::collections::BTreeSet;

use chrono::NaiveDate;
use dcmdeid_core::DataElementTag;

use crate::date_shift::SHIFT_ORIGIN;
use crate::exception_table::ExceptionTable;
use crate::rule_table::RuleTable;

/// Configuration used when anonymizing data sets and directories of records.
///
#[derive(Clone, Debug, PartialEq)]
pub struct AnonymizeConfig {
  pub(crate) rule_table: RuleTable,
  pub(crate) exception_table: ExceptionTable,
  pub(crate) preserved_private_tags: BTreeSet<DataElementTag>,
  pub(crate) shift_date_tags: BTreeSet<DataElementTag>,
  pub(crate) reference_date: NaiveDate,
  pub(crate) remove_group_lengths: bool,
  pub(crate) remove_retired: bool,
  pub(crate) output_prefix: String,
  pub(crate) output_index_width: usize,
}

impl Default for AnonymizeConfig {
  fn default() -> Self {
    Self {
      rule_table: RuleTable::canonical().clone(),
      exception_table: ExceptionTable::new(),
      preserved_private_tags: BTreeSet::new(),
      shift_date_tags: BTreeSet::new(),
      reference_date: SHIFT_ORIGIN,
      remove_group_lengths: true,
      remove_retired: true,
      output_prefix: "im".to_string(),
      output_index_width: 5,
    }
  }
}

impl AnonymizeConfig {
  /// The rule table that maps tags to action codes.
  ///
  /// By default this is [`RuleTable::canonical()`].
  ///
  pub fn rule_table(mut self, rule_table: RuleTable) -> Self {
    self.rule_table = rule_table;
    self
  }

  /// Removes a tag from the rule table so that it's kept as is. Sequences are
  /// still recursed into.
  ///
  pub fn keep_tag(mut self, tag: DataElementTag) -> Self {
    self.rule_table.remove(tag);
    self
  }

  /// Sets a literal value for a tag that takes priority over the rule table.
  /// The value is also inserted into data sets that don't have the tag.
  ///
  /// Exceptions on private tags only apply if the tag is also preserved with
  /// [`AnonymizeConfig::preserve_private_tag()`].
  ///
  pub fn exception(mut self, tag: DataElementTag, value: &str) -> Self {
    self.exception_table.insert(tag, value);
    self
  }

  /// Keeps a private data element that would otherwise be removed.
  ///
  pub fn preserve_private_tag(mut self, tag: DataElementTag) -> Self {
    self.preserved_private_tags.insert(tag);
    self
  }

  /// Shifts the `DA` value of a tag instead of applying its action code. The
  /// shifted date is `19000101 + (date - reference_date)`.
  ///
  pub fn shift_date(mut self, tag: DataElementTag) -> Self {
    self.shift_date_tags.insert(tag);
    self
  }

  /// The date that shifted dates are made relative to.
  ///
  /// By default this is 1900-01-01, which leaves dates unchanged.
  ///
  pub fn reference_date(mut self, date: NaiveDate) -> Self {
    self.reference_date = date;
    self
  }

  /// Whether to remove group length data elements `(gggg,0000)`. These are
  /// invalidated by anonymization.
  ///
  /// By default group lengths are removed.
  ///
  pub fn remove_group_lengths(mut self, value: bool) -> Self {
    self.remove_group_lengths = value;
    self
  }

  /// Whether to remove data elements that have been retired from the DICOM
  /// standard. Retired data elements with an exception are kept so the
  /// exception's value can be applied.
  ///
  /// By default retired data elements are removed.
  ///
  pub fn remove_retired(mut self, value: bool) -> Self {
    self.remove_retired = value;
    self
  }

  /// The prefix of output file names, which are followed by the input file's
  /// zero-padded index.
  ///
  /// By default the prefix is `"im"`.
  ///
  pub fn output_prefix(mut self, prefix: &str) -> Self {
    self.output_prefix = prefix.to_string();
    self
  }

  /// The number of digits the index in output file names is padded to.
  ///
  /// By default this is 5, giving names such as `im00042`.
  ///
  pub fn output_index_width(mut self, width: usize) -> Self {
    self.output_index_width = width;
    self
  }

  pub fn get_rule_table(&self) -> &RuleTable {
    &self.rule_table
  }

  pub fn get_exception_table(&self) -> &ExceptionTable {
    &self.exception_table
  }

  /// Returns the output file name for the input at the given index.
  ///
  pub fn output_file_name(&self, index: usize) -> String {
    format!(
      "{}{:0width$}",
      self.output_prefix,
      index,
      width = self.output_index_width
    )
  }
}
