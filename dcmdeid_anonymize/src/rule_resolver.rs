//! Resolves the single action to apply to a data element from the exception
//! table, date shift configuration, repeating groups, and the rule table.

use std::collections::BTreeSet;

use dcmdeid_core::{DataElementTag, DataSet, ValueRepresentation};

use crate::action_code::Action;
use crate::exception_table::ExceptionTable;
use crate::rule_table::RuleTable;

/// The action to take on a data element.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedAction<'a> {
  /// Replace the value with a caller-supplied literal.
  ReplaceWithLiteral(&'a str),

  /// Shift the date relative to the configured reference date.
  ShiftDate,

  Remove,
  ZeroOrDummy,
  Dummy,
  Keep,
  Clean,
  ReplaceUid,
}

impl From<Action> for ResolvedAction<'_> {
  fn from(action: Action) -> Self {
    match action {
      Action::Remove => Self::Remove,
      Action::ZeroOrDummy => Self::ZeroOrDummy,
      Action::Dummy => Self::Dummy,
      Action::Keep => Self::Keep,
      Action::Clean => Self::Clean,
      Action::ReplaceUid => Self::ReplaceUid,
    }
  }
}

/// A range of repeating groups, e.g. `(50xx,eeee)`, where the group's low byte
/// varies. Data elements in these groups aren't listed in the rule table and
/// are found by scanning the data set instead.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepeatingGroup {
  base_group: u16,
  elements: Option<&'static [u16]>,
}

impl RepeatingGroup {
  /// Curve data elements `(50xx,eeee)`. Every element in the group matches.
  ///
  pub const CURVE: Self = Self {
    base_group: 0x5000,
    elements: None,
  };

  /// Overlay data `(60xx,3000)` and overlay comments `(60xx,4000)`.
  ///
  pub const OVERLAY: Self = Self {
    base_group: 0x6000,
    elements: Some(&[0x3000, 0x4000]),
  };

  pub const ALL: [Self; 2] = [Self::CURVE, Self::OVERLAY];

  /// Returns whether the tag lies in this repeating group.
  ///
  pub fn contains(&self, tag: DataElementTag) -> bool {
    tag.group & 0xFF00 == self.base_group
      && tag.group % 2 == 0
      && self.elements.is_none_or(|elements| elements.contains(&tag.element))
  }

  /// Returns the next tag in the data set after `after` that lies in this
  /// repeating group and isn't excluded.
  ///
  pub fn next_match(
    &self,
    data_set: &DataSet,
    after: Option<DataElementTag>,
    excluded: impl Fn(DataElementTag) -> bool,
  ) -> Option<DataElementTag> {
    data_set
      .next_matching_tag(after, |tag| self.contains(tag) && !excluded(tag))
  }
}

/// Resolves the action for a data element. The order of precedence is:
///
/// 1. An exception for the tag.
/// 2. Date shifting configured for the tag, if its VR is `DA`.
/// 3. Membership of a repeating curve or overlay group.
/// 4. The tag's action code in the rule table. Compound codes resolve to `X`
///    if present, otherwise `Z`.
/// 5. Removal of private tags that aren't preserved.
/// 6. Otherwise the data element is kept.
///
#[derive(Clone, Copy, Debug)]
pub struct RuleResolver<'a> {
  rule_table: &'a RuleTable,
  exception_table: &'a ExceptionTable,
  shift_date_tags: &'a BTreeSet<DataElementTag>,
  preserved_private_tags: &'a BTreeSet<DataElementTag>,
}

impl<'a> RuleResolver<'a> {
  pub fn new(
    rule_table: &'a RuleTable,
    exception_table: &'a ExceptionTable,
    shift_date_tags: &'a BTreeSet<DataElementTag>,
    preserved_private_tags: &'a BTreeSet<DataElementTag>,
  ) -> Self {
    Self {
      rule_table,
      exception_table,
      shift_date_tags,
      preserved_private_tags,
    }
  }

  pub fn resolve(
    &self,
    tag: DataElementTag,
    vr: ValueRepresentation,
  ) -> ResolvedAction<'a> {
    if let Some(value) = self.exception_table.get(tag) {
      return ResolvedAction::ReplaceWithLiteral(value);
    }

    if vr == ValueRepresentation::Date && self.shift_date_tags.contains(&tag) {
      return ResolvedAction::ShiftDate;
    }

    if RepeatingGroup::ALL.iter().any(|group| group.contains(tag)) {
      return ResolvedAction::Remove;
    }

    if let Some(action_code) = self.rule_table.get(tag) {
      return action_code.resolve().into();
    }

    if tag.is_private() && !self.preserved_private_tags.contains(&tag) {
      return ResolvedAction::Remove;
    }

    ResolvedAction::Keep
  }

  pub fn exception_table(&self) -> &'a ExceptionTable {
    self.exception_table
  }
}
