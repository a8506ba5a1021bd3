//! The rule table that maps data element tags to their de-identification
//! action codes. The canonical table follows the Basic Application Level
//! Confidentiality Profile of DICOM PS3.15 Annex E.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use dcmdeid_core::{DataElementTag, DcmdeidError, dictionary};

use crate::action_code::{ActionCode, ActionCodeError};

/// A mapping of data element tags to action codes. Private tags and the
/// repeating curve and overlay groups are handled separately and don't appear
/// in the canonical table.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable(BTreeMap<DataElementTag, ActionCode>);

/// Occurs when a rule table can't be built from its entries.
///
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RuleTableError {
  #[error("Invalid action code '{code}' for tag {tag}: {details}")]
  InvalidActionCode {
    tag: DataElementTag,
    code: String,
    details: String,
  },

  #[error("Invalid rule table line {line}: {details}")]
  InvalidLine { line: usize, details: String },
}

impl DcmdeidError for RuleTableError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("Rule table error {task_description}"),
      "".to_string(),
    ];

    match self {
      Self::InvalidActionCode { tag, code, details } => {
        lines.push(format!("  Tag: {}", dictionary::tag_with_name(*tag)));
        lines.push(format!("  Action code: {code}"));
        lines.push(format!("  Details: {details}"));
      }

      Self::InvalidLine { line, details } => {
        lines.push(format!("  Line: {line}"));
        lines.push(format!("  Details: {details}"));
      }
    }

    lines
  }
}

static CANONICAL_RULE_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
  match RuleTable::from_entries(CANONICAL_RULES.iter().copied()) {
    Ok(table) => table,
    Err(e) => panic!("Canonical rule table is invalid: {e}"),
  }
});

impl RuleTable {
  /// Returns a new empty rule table.
  ///
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Returns the canonical rule table. It is parsed once on first use.
  ///
  pub fn canonical() -> &'static RuleTable {
    &CANONICAL_RULE_TABLE
  }

  /// Builds a rule table from tags and their action code strings.
  ///
  pub fn from_entries<'a>(
    entries: impl IntoIterator<Item = (DataElementTag, &'a str)>,
  ) -> Result<Self, RuleTableError> {
    let mut table = Self::new();

    for (tag, code) in entries {
      let action_code = ActionCode::parse(code).map_err(
        |ActionCodeError { code, details }| RuleTableError::InvalidActionCode {
          tag,
          code,
          details,
        },
      )?;

      table.insert(tag, action_code);
    }

    Ok(table)
  }

  /// Parses a rule table from CSV text where each line has the form
  /// `code,group,element`, e.g. `X/Z,0008,0020`. Blank lines and lines
  /// starting with `#` are ignored.
  ///
  pub fn from_csv(text: &str) -> Result<Self, RuleTableError> {
    let mut table = Self::new();

    for (index, line) in text.lines().enumerate() {
      let line_number = index + 1;
      let line = line.trim();

      if line.is_empty() || line.starts_with('#') {
        continue;
      }

      let invalid_line = |details: String| RuleTableError::InvalidLine {
        line: line_number,
        details,
      };

      let fields: Vec<&str> = line.split(',').map(str::trim).collect();
      let [code, group, element] = fields.as_slice() else {
        return Err(invalid_line(format!(
          "Expected 3 fields but found {}",
          fields.len()
        )));
      };

      let parse_hex = |s: &str| {
        u16::from_str_radix(s, 16)
          .map_err(|_| invalid_line(format!("'{s}' is not a hex number")))
      };

      let tag = DataElementTag::new(parse_hex(group)?, parse_hex(element)?);

      let action_code =
        ActionCode::parse(code).map_err(|e| RuleTableError::InvalidActionCode {
          tag,
          code: e.code,
          details: e.details,
        })?;

      table.insert(tag, action_code);
    }

    Ok(table)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, tag: DataElementTag) -> Option<&ActionCode> {
    self.0.get(&tag)
  }

  /// Sets the action code for a tag, replacing any existing one.
  ///
  pub fn insert(&mut self, tag: DataElementTag, action_code: ActionCode) {
    self.0.insert(tag, action_code);
  }

  /// Removes a tag from the table so that it is no longer de-identified.
  ///
  pub fn remove(&mut self, tag: DataElementTag) -> Option<ActionCode> {
    self.0.remove(&tag)
  }

  pub fn iter(
    &self,
  ) -> std::collections::btree_map::Iter<'_, DataElementTag, ActionCode> {
    self.0.iter()
  }
}

const CANONICAL_RULES: [(DataElementTag, &str); 243] = [
  (dictionary::AFFECTED_SOP_INSTANCE_UID.tag, "X"),
  (dictionary::REQUESTED_SOP_INSTANCE_UID.tag, "U"),
  (dictionary::MEDIA_STORAGE_SOP_INSTANCE_UID.tag, "U"),
  (dictionary::REFERENCED_SOP_INSTANCE_UID_IN_FILE.tag, "U"),
  (dictionary::INSTANCE_CREATOR_UID.tag, "U"),
  (dictionary::SOP_INSTANCE_UID.tag, "U"),
  (dictionary::STUDY_DATE.tag, "Z"),
  (dictionary::SERIES_DATE.tag, "X/D"),
  (dictionary::ACQUISITION_DATE.tag, "X/Z"),
  (dictionary::CONTENT_DATE.tag, "Z/D"),
  (dictionary::OVERLAY_DATE.tag, "X"),
  (dictionary::CURVE_DATE.tag, "X"),
  (dictionary::ACQUISITION_DATETIME.tag, "X/D"),
  (dictionary::STUDY_TIME.tag, "Z"),
  (dictionary::SERIES_TIME.tag, "X/D"),
  (dictionary::ACQUISITION_TIME.tag, "X/Z"),
  (dictionary::CONTENT_TIME.tag, "Z/D"),
  (dictionary::OVERLAY_TIME.tag, "X"),
  (dictionary::CURVE_TIME.tag, "X"),
  (dictionary::ACCESSION_NUMBER.tag, "Z"),
  (dictionary::FAILED_SOP_INSTANCE_UID_LIST.tag, "U"),
  (dictionary::INSTITUTION_NAME.tag, "X/Z/D"),
  (dictionary::INSTITUTION_ADDRESS.tag, "X"),
  (dictionary::INSTITUTION_CODE_SEQUENCE.tag, "X/Z/D"),
  (dictionary::REFERRING_PHYSICIAN_NAME.tag, "Z"),
  (dictionary::REFERRING_PHYSICIAN_ADDRESS.tag, "X"),
  (dictionary::REFERRING_PHYSICIAN_TELEPHONE_NUMBERS.tag, "X"),
  (dictionary::REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE.tag, "X"),
  (dictionary::CONTEXT_GROUP_EXTENSION_CREATOR_UID.tag, "U"),
  (dictionary::TIMEZONE_OFFSET_FROM_UTC.tag, "X"),
  (dictionary::STATION_NAME.tag, "X/Z/D"),
  (dictionary::STUDY_DESCRIPTION.tag, "X"),
  (dictionary::SERIES_DESCRIPTION.tag, "X"),
  (dictionary::INSTITUTIONAL_DEPARTMENT_NAME.tag, "X"),
  (dictionary::PHYSICIANS_OF_RECORD.tag, "X"),
  (dictionary::PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE.tag, "X"),
  (dictionary::PERFORMING_PHYSICIAN_NAME.tag, "X"),
  (dictionary::PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE.tag, "X"),
  (dictionary::NAME_OF_PHYSICIANS_READING_STUDY.tag, "X"),
  (dictionary::PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE.tag, "X"),
  (dictionary::OPERATORS_NAME.tag, "X/Z/D"),
  (dictionary::OPERATORS_IDENTIFICATION_SEQUENCE.tag, "X/D"),
  (dictionary::ADMITTING_DIAGNOSES_DESCRIPTION.tag, "X"),
  (dictionary::ADMITTING_DIAGNOSES_CODE_SEQUENCE.tag, "X"),
  (dictionary::REFERENCED_STUDY_SEQUENCE.tag, "X/Z"),
  (dictionary::REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE.tag, "X/Z/D"),
  (dictionary::REFERENCED_PATIENT_SEQUENCE.tag, "X"),
  (dictionary::REFERENCED_IMAGE_SEQUENCE.tag, "X/Z/U*"),
  (dictionary::REFERENCED_SOP_INSTANCE_UID.tag, "U"),
  (dictionary::TRANSACTION_UID.tag, "U"),
  (dictionary::DERIVATION_DESCRIPTION.tag, "X"),
  (dictionary::SOURCE_IMAGE_SEQUENCE.tag, "X/Z/U*"),
  (dictionary::IRRADIATION_EVENT_UID.tag, "U"),
  (dictionary::IDENTIFYING_COMMENTS.tag, "X"),
  (dictionary::CREATOR_VERSION_UID.tag, "U"),
  (dictionary::PATIENT_NAME.tag, "Z"),
  (dictionary::PATIENT_ID.tag, "Z"),
  (dictionary::ISSUER_OF_PATIENT_ID.tag, "X"),
  (dictionary::PATIENT_BIRTH_DATE.tag, "Z"),
  (dictionary::PATIENT_BIRTH_TIME.tag, "X"),
  (dictionary::PATIENT_SEX.tag, "Z"),
  (dictionary::PATIENT_INSURANCE_PLAN_CODE_SEQUENCE.tag, "X"),
  (dictionary::PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE.tag, "X"),
  (dictionary::PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE.tag, "X"),
  (dictionary::OTHER_PATIENT_IDS.tag, "X"),
  (dictionary::OTHER_PATIENT_NAMES.tag, "X"),
  (dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag, "X"),
  (dictionary::PATIENT_BIRTH_NAME.tag, "X"),
  (dictionary::PATIENT_AGE.tag, "X"),
  (dictionary::PATIENT_SIZE.tag, "X"),
  (dictionary::PATIENT_WEIGHT.tag, "X"),
  (dictionary::PATIENT_ADDRESS.tag, "X"),
  (dictionary::INSURANCE_PLAN_IDENTIFICATION.tag, "X"),
  (dictionary::PATIENT_MOTHER_BIRTH_NAME.tag, "X"),
  (dictionary::MILITARY_RANK.tag, "X"),
  (dictionary::BRANCH_OF_SERVICE.tag, "X"),
  (dictionary::MEDICAL_RECORD_LOCATOR.tag, "X"),
  (dictionary::MEDICAL_ALERTS.tag, "X"),
  (dictionary::ALLERGIES.tag, "X"),
  (dictionary::COUNTRY_OF_RESIDENCE.tag, "X"),
  (dictionary::REGION_OF_RESIDENCE.tag, "X"),
  (dictionary::PATIENT_TELEPHONE_NUMBERS.tag, "X"),
  (dictionary::ETHNIC_GROUP.tag, "X"),
  (dictionary::OCCUPATION.tag, "X"),
  (dictionary::SMOKING_STATUS.tag, "X"),
  (dictionary::ADDITIONAL_PATIENT_HISTORY.tag, "X"),
  (dictionary::PREGNANCY_STATUS.tag, "X"),
  (dictionary::LAST_MENSTRUAL_DATE.tag, "X"),
  (dictionary::PATIENT_RELIGIOUS_PREFERENCE.tag, "X"),
  (dictionary::PATIENT_SEX_NEUTERED.tag, "X/Z"),
  (dictionary::RESPONSIBLE_PERSON.tag, "X"),
  (dictionary::RESPONSIBLE_ORGANIZATION.tag, "X"),
  (dictionary::PATIENT_COMMENTS.tag, "X"),
  (dictionary::CONTRAST_BOLUS_AGENT.tag, "Z/D"),
  (dictionary::DEVICE_SERIAL_NUMBER.tag, "X/Z/D"),
  (dictionary::DEVICE_UID.tag, "U"),
  (dictionary::PLATE_ID.tag, "X"),
  (dictionary::GENERATOR_ID.tag, "X"),
  (dictionary::CASSETTE_ID.tag, "X"),
  (dictionary::GANTRY_ID.tag, "X"),
  (dictionary::PROTOCOL_NAME.tag, "X/D"),
  (dictionary::ACQUISITION_DEVICE_PROCESSING_DESCRIPTION.tag, "X/D"),
  (dictionary::ACQUISITION_COMMENTS.tag, "X"),
  (dictionary::DETECTOR_ID.tag, "X"),
  (dictionary::ACQUISITION_PROTOCOL_DESCRIPTION.tag, "X"),
  (dictionary::CONTRIBUTION_DESCRIPTION.tag, "X"),
  (dictionary::STUDY_INSTANCE_UID.tag, "U"),
  (dictionary::SERIES_INSTANCE_UID.tag, "U"),
  (dictionary::STUDY_ID.tag, "Z"),
  (dictionary::FRAME_OF_REFERENCE_UID.tag, "U"),
  (dictionary::SYNCHRONIZATION_FRAME_OF_REFERENCE_UID.tag, "U"),
  (dictionary::MODIFYING_DEVICE_ID.tag, "X"),
  (dictionary::MODIFYING_DEVICE_MANUFACTURER.tag, "X"),
  (dictionary::MODIFIED_IMAGE_DESCRIPTION.tag, "X"),
  (dictionary::IMAGE_COMMENTS.tag, "X"),
  (dictionary::FRAME_COMMENTS.tag, "X"),
  (dictionary::CONCATENATION_UID.tag, "U"),
  (dictionary::DIMENSION_ORGANIZATION_UID.tag, "U"),
  (dictionary::PALETTE_COLOR_LOOKUP_TABLE_UID.tag, "U"),
  (dictionary::LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID.tag, "U"),
  (dictionary::IMAGE_PRESENTATION_COMMENTS.tag, "X"),
  (dictionary::STUDY_ID_ISSUER.tag, "X"),
  (dictionary::SCHEDULED_STUDY_LOCATION.tag, "X"),
  (dictionary::SCHEDULED_STUDY_LOCATION_AE_TITLE.tag, "X"),
  (dictionary::REASON_FOR_STUDY.tag, "X"),
  (dictionary::REQUESTING_PHYSICIAN.tag, "X"),
  (dictionary::REQUESTING_SERVICE.tag, "X"),
  (dictionary::REQUESTED_PROCEDURE_DESCRIPTION.tag, "X/Z"),
  (dictionary::REQUESTED_CONTRAST_AGENT.tag, "X"),
  (dictionary::STUDY_COMMENTS.tag, "X"),
  (dictionary::ADMISSION_ID.tag, "X"),
  (dictionary::ISSUER_OF_ADMISSION_ID.tag, "X"),
  (dictionary::SCHEDULED_PATIENT_INSTITUTION_RESIDENCE.tag, "X"),
  (dictionary::ADMITTING_DATE.tag, "X"),
  (dictionary::ADMITTING_TIME.tag, "X"),
  (dictionary::DISCHARGE_DIAGNOSIS_DESCRIPTION.tag, "X"),
  (dictionary::SPECIAL_NEEDS.tag, "X"),
  (dictionary::SERVICE_EPISODE_ID.tag, "X"),
  (dictionary::ISSUER_OF_SERVICE_EPISODE_ID.tag, "X"),
  (dictionary::SERVICE_EPISODE_DESCRIPTION.tag, "X"),
  (dictionary::CURRENT_PATIENT_LOCATION.tag, "X"),
  (dictionary::PATIENT_INSTITUTION_RESIDENCE.tag, "X"),
  (dictionary::PATIENT_STATE.tag, "X"),
  (dictionary::REFERENCED_PATIENT_ALIAS_SEQUENCE.tag, "X"),
  (dictionary::VISIT_COMMENTS.tag, "X"),
  (dictionary::SCHEDULED_STATION_AE_TITLE.tag, "X"),
  (dictionary::SCHEDULED_PROCEDURE_STEP_START_DATE.tag, "X"),
  (dictionary::SCHEDULED_PROCEDURE_STEP_START_TIME.tag, "X"),
  (dictionary::SCHEDULED_PROCEDURE_STEP_END_DATE.tag, "X"),
  (dictionary::SCHEDULED_PROCEDURE_STEP_END_TIME.tag, "X"),
  (dictionary::SCHEDULED_PERFORMING_PHYSICIAN_NAME.tag, "X"),
  (dictionary::SCHEDULED_PROCEDURE_STEP_DESCRIPTION.tag, "X"),
  (dictionary::SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE.tag, "X"),
  (dictionary::SCHEDULED_STATION_NAME.tag, "X"),
  (dictionary::SCHEDULED_PROCEDURE_STEP_LOCATION.tag, "X"),
  (dictionary::PRE_MEDICATION.tag, "X"),
  (dictionary::PERFORMED_STATION_AE_TITLE.tag, "X"),
  (dictionary::PERFORMED_STATION_NAME.tag, "X"),
  (dictionary::PERFORMED_LOCATION.tag, "X"),
  (dictionary::PERFORMED_PROCEDURE_STEP_START_DATE.tag, "X"),
  (dictionary::PERFORMED_PROCEDURE_STEP_START_TIME.tag, "X"),
  (dictionary::PERFORMED_STATION_NAME_CODE_SEQUENCE.tag, "X"),
  (dictionary::PERFORMED_PROCEDURE_STEP_ID.tag, "X"),
  (dictionary::PERFORMED_PROCEDURE_STEP_DESCRIPTION.tag, "X"),
  (dictionary::REQUEST_ATTRIBUTES_SEQUENCE.tag, "X"),
  (dictionary::COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP.tag, "X"),
  (dictionary::ACQUISITION_CONTEXT_SEQUENCE.tag, "X"),
  (dictionary::REQUESTED_PROCEDURE_ID.tag, "X"),
  (dictionary::PATIENT_TRANSPORT_ARRANGEMENTS.tag, "X"),
  (dictionary::REQUESTED_PROCEDURE_LOCATION.tag, "X"),
  (dictionary::NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS.tag, "X"),
  (dictionary::INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE.tag, "X"),
  (dictionary::PERSON_IDENTIFICATION_CODE_SEQUENCE.tag, "D"),
  (dictionary::PERSON_ADDRESS.tag, "X"),
  (dictionary::PERSON_TELEPHONE_NUMBERS.tag, "X"),
  (dictionary::REQUESTED_PROCEDURE_COMMENTS.tag, "X"),
  (dictionary::REASON_FOR_THE_IMAGING_SERVICE_REQUEST.tag, "X"),
  (dictionary::ORDER_ENTERED_BY.tag, "X"),
  (dictionary::ORDER_ENTERER_LOCATION.tag, "X"),
  (dictionary::ORDER_CALLBACK_PHONE_NUMBER.tag, "X"),
  (dictionary::PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST.tag, "Z"),
  (dictionary::FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST.tag, "Z"),
  (dictionary::IMAGING_SERVICE_REQUEST_COMMENTS.tag, "X"),
  (dictionary::CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION.tag, "X"),
  (dictionary::REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID.tag, "U"),
  (dictionary::SCHEDULED_STATION_NAME_CODE_SEQUENCE.tag, "X"),
  (dictionary::SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE.tag, "X"),
  (dictionary::PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE.tag, "X"),
  (dictionary::SCHEDULED_HUMAN_PERFORMERS_SEQUENCE.tag, "X"),
  (dictionary::ACTUAL_HUMAN_PERFORMERS_SEQUENCE.tag, "X"),
  (dictionary::HUMAN_PERFORMER_ORGANIZATION.tag, "X"),
  (dictionary::HUMAN_PERFORMER_NAME.tag, "X"),
  (dictionary::VERIFYING_ORGANIZATION.tag, "X"),
  (dictionary::VERIFYING_OBSERVER_SEQUENCE.tag, "D"),
  (dictionary::VERIFYING_OBSERVER_NAME.tag, "D"),
  (dictionary::AUTHOR_OBSERVER_SEQUENCE.tag, "X"),
  (dictionary::PARTICIPANT_SEQUENCE.tag, "X"),
  (dictionary::CUSTODIAL_ORGANIZATION_SEQUENCE.tag, "X"),
  (dictionary::VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE.tag, "Z"),
  (dictionary::PERSON_NAME.tag, "D"),
  (dictionary::UID.tag, "U"),
  (dictionary::CONTENT_SEQUENCE.tag, "X"),
  (dictionary::TEMPLATE_EXTENSION_ORGANIZATION_UID.tag, "U"),
  (dictionary::TEMPLATE_EXTENSION_CREATOR_UID.tag, "U"),
  (dictionary::GRAPHIC_ANNOTATION_SEQUENCE.tag, "D"),
  (dictionary::CONTENT_CREATOR_NAME.tag, "Z"),
  (dictionary::CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE.tag, "X"),
  (dictionary::FIDUCIAL_UID.tag, "U"),
  (dictionary::STORAGE_MEDIA_FILE_SET_UID.tag, "U"),
  (dictionary::ICON_IMAGE_SEQUENCE.tag, "X"),
  (dictionary::TOPIC_TITLE.tag, "X"),
  (dictionary::TOPIC_SUBJECT.tag, "X"),
  (dictionary::TOPIC_AUTHOR.tag, "X"),
  (dictionary::TOPIC_KEYWORDS.tag, "X"),
  (dictionary::DIGITAL_SIGNATURE_UID.tag, "X"),
  (dictionary::REFERENCED_DIGITAL_SIGNATURE_SEQUENCE.tag, "X"),
  (dictionary::REFERENCED_SOP_INSTANCE_MAC_SEQUENCE.tag, "X"),
  (dictionary::MAC.tag, "X"),
  (dictionary::MODIFIED_ATTRIBUTES_SEQUENCE.tag, "X"),
  (dictionary::ORIGINAL_ATTRIBUTES_SEQUENCE.tag, "X"),
  (dictionary::TEXT_STRING.tag, "X"),
  (dictionary::REFERENCED_FRAME_OF_REFERENCE_UID.tag, "U"),
  (dictionary::RELATED_FRAME_OF_REFERENCE_UID.tag, "U"),
  (dictionary::DOSE_REFERENCE_UID.tag, "U"),
  (dictionary::REVIEWER_NAME.tag, "X/Z"),
  (dictionary::ARBITRARY.tag, "X"),
  (dictionary::TEXT_COMMENTS.tag, "X"),
  (dictionary::RESULTS_ID_ISSUER.tag, "X"),
  (dictionary::INTERPRETATION_RECORDER.tag, "X"),
  (dictionary::INTERPRETATION_TRANSCRIBER.tag, "X"),
  (dictionary::INTERPRETATION_TEXT.tag, "X"),
  (dictionary::INTERPRETATION_AUTHOR.tag, "X"),
  (dictionary::INTERPRETATION_APPROVER_SEQUENCE.tag, "X"),
  (dictionary::PHYSICIAN_APPROVING_INTERPRETATION.tag, "X"),
  (dictionary::INTERPRETATION_DIAGNOSIS_DESCRIPTION.tag, "X"),
  (dictionary::RESULTS_DISTRIBUTION_LIST_SEQUENCE.tag, "X"),
  (dictionary::DISTRIBUTION_NAME.tag, "X"),
  (dictionary::DISTRIBUTION_ADDRESS.tag, "X"),
  (dictionary::INTERPRETATION_ID_ISSUER.tag, "X"),
  (dictionary::IMPRESSIONS.tag, "X"),
  (dictionary::RESULTS_COMMENTS.tag, "X"),
  (dictionary::DIGITAL_SIGNATURES_SEQUENCE.tag, "X"),
  (dictionary::DATA_SET_TRAILING_PADDING.tag, "X"),
];
