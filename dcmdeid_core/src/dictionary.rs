//! The DICOM data element dictionary. Covers every data element that
//! de-identification has a rule for, plus the common structural elements a
//! data set needs to remain meaningful.
//!
//! Ref: PS3.6.

use crate::{DataElementTag, ValueRepresentation};

/// A single data element in the dictionary.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
  pub tag: DataElementTag,
  pub name: &'static str,
  pub vr: ValueRepresentation,
  pub is_retired: bool,
}

/// Looks up a data element in the dictionary. Tags in the curve (50xx) and
/// overlay (60xx) repeating groups are matched against their `5000`/`6000`
/// dictionary entries.
///
#[allow(clippy::result_unit_err)]
pub fn find(tag: DataElementTag) -> Result<&'static Item, ()> {
  let tag = match tag.group & 0xFF00 {
    0x5000 | 0x6000 if !tag.is_private() => {
      DataElementTag::new(tag.group & 0xFF00, tag.element)
    }
    _ => tag,
  };

  ITEMS
    .binary_search_by(|item| item.tag.cmp(&tag))
    .map(|index| ITEMS[index])
    .map_err(|_| ())
}

/// Returns the name of a data element, or a placeholder for private and
/// unrecognized tags.
///
pub fn tag_name(tag: DataElementTag) -> &'static str {
  match find(tag) {
    Ok(item) => item.name,
    Err(()) if tag.is_private() => "Private tag",
    Err(()) => "Unknown tag",
  }
}

/// Formats a tag with its name, e.g. `"(0010,0010) Patient's Name"`.
///
pub fn tag_with_name(tag: DataElementTag) -> String {
  format!("{} {}", tag, tag_name(tag))
}

/// Returns whether a data element has been retired from the DICOM standard.
/// Tags not in the dictionary aren't considered retired.
///
pub fn is_retired(tag: DataElementTag) -> bool {
  find(tag).is_ok_and(|item| item.is_retired)
}

/// Returns the VR for a data element, falling back to
/// [`ValueRepresentation::Unknown`] for tags not in the dictionary.
///
pub fn value_representation(tag: DataElementTag) -> ValueRepresentation {
  find(tag)
    .map(|item| item.vr)
    .unwrap_or(ValueRepresentation::Unknown)
}

static ITEMS: [&Item; 287] = [
  &AFFECTED_SOP_INSTANCE_UID,
  &REQUESTED_SOP_INSTANCE_UID,
  &FILE_META_INFORMATION_GROUP_LENGTH,
  &MEDIA_STORAGE_SOP_CLASS_UID,
  &MEDIA_STORAGE_SOP_INSTANCE_UID,
  &TRANSFER_SYNTAX_UID,
  &REFERENCED_SOP_INSTANCE_UID_IN_FILE,
  &SPECIFIC_CHARACTER_SET,
  &IMAGE_TYPE,
  &INSTANCE_CREATION_DATE,
  &INSTANCE_CREATION_TIME,
  &INSTANCE_CREATOR_UID,
  &SOP_CLASS_UID,
  &SOP_INSTANCE_UID,
  &STUDY_DATE,
  &SERIES_DATE,
  &ACQUISITION_DATE,
  &CONTENT_DATE,
  &OVERLAY_DATE,
  &CURVE_DATE,
  &ACQUISITION_DATETIME,
  &STUDY_TIME,
  &SERIES_TIME,
  &ACQUISITION_TIME,
  &CONTENT_TIME,
  &OVERLAY_TIME,
  &CURVE_TIME,
  &ACCESSION_NUMBER,
  &RETRIEVE_AE_TITLE,
  &FAILED_SOP_INSTANCE_UID_LIST,
  &MODALITY,
  &MANUFACTURER,
  &INSTITUTION_NAME,
  &INSTITUTION_ADDRESS,
  &INSTITUTION_CODE_SEQUENCE,
  &REFERRING_PHYSICIAN_NAME,
  &REFERRING_PHYSICIAN_ADDRESS,
  &REFERRING_PHYSICIAN_TELEPHONE_NUMBERS,
  &REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE,
  &CODE_VALUE,
  &CODE_MEANING,
  &CONTEXT_GROUP_EXTENSION_CREATOR_UID,
  &TIMEZONE_OFFSET_FROM_UTC,
  &STATION_NAME,
  &STUDY_DESCRIPTION,
  &SERIES_DESCRIPTION,
  &INSTITUTIONAL_DEPARTMENT_NAME,
  &PHYSICIANS_OF_RECORD,
  &PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE,
  &PERFORMING_PHYSICIAN_NAME,
  &PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE,
  &NAME_OF_PHYSICIANS_READING_STUDY,
  &PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE,
  &OPERATORS_NAME,
  &OPERATORS_IDENTIFICATION_SEQUENCE,
  &ADMITTING_DIAGNOSES_DESCRIPTION,
  &ADMITTING_DIAGNOSES_CODE_SEQUENCE,
  &MANUFACTURER_MODEL_NAME,
  &REFERENCED_STUDY_SEQUENCE,
  &REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE,
  &REFERENCED_PATIENT_SEQUENCE,
  &REFERENCED_IMAGE_SEQUENCE,
  &REFERENCED_SOP_CLASS_UID,
  &REFERENCED_SOP_INSTANCE_UID,
  &TRANSACTION_UID,
  &DERIVATION_DESCRIPTION,
  &SOURCE_IMAGE_SEQUENCE,
  &IRRADIATION_EVENT_UID,
  &IDENTIFYING_COMMENTS,
  &CREATOR_VERSION_UID,
  &PATIENT_NAME,
  &PATIENT_ID,
  &ISSUER_OF_PATIENT_ID,
  &PATIENT_BIRTH_DATE,
  &PATIENT_BIRTH_TIME,
  &PATIENT_SEX,
  &PATIENT_INSURANCE_PLAN_CODE_SEQUENCE,
  &PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE,
  &PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE,
  &OTHER_PATIENT_IDS,
  &OTHER_PATIENT_NAMES,
  &OTHER_PATIENT_IDS_SEQUENCE,
  &PATIENT_BIRTH_NAME,
  &PATIENT_AGE,
  &PATIENT_SIZE,
  &PATIENT_WEIGHT,
  &PATIENT_ADDRESS,
  &INSURANCE_PLAN_IDENTIFICATION,
  &PATIENT_MOTHER_BIRTH_NAME,
  &MILITARY_RANK,
  &BRANCH_OF_SERVICE,
  &MEDICAL_RECORD_LOCATOR,
  &MEDICAL_ALERTS,
  &ALLERGIES,
  &COUNTRY_OF_RESIDENCE,
  &REGION_OF_RESIDENCE,
  &PATIENT_TELEPHONE_NUMBERS,
  &ETHNIC_GROUP,
  &OCCUPATION,
  &SMOKING_STATUS,
  &ADDITIONAL_PATIENT_HISTORY,
  &PREGNANCY_STATUS,
  &LAST_MENSTRUAL_DATE,
  &PATIENT_RELIGIOUS_PREFERENCE,
  &PATIENT_SEX_NEUTERED,
  &RESPONSIBLE_PERSON,
  &RESPONSIBLE_ORGANIZATION,
  &PATIENT_COMMENTS,
  &CONTRAST_BOLUS_AGENT,
  &BODY_PART_EXAMINED,
  &SLICE_THICKNESS,
  &KVP,
  &DEVICE_SERIAL_NUMBER,
  &DEVICE_UID,
  &PLATE_ID,
  &GENERATOR_ID,
  &CASSETTE_ID,
  &GANTRY_ID,
  &SOFTWARE_VERSIONS,
  &PROTOCOL_NAME,
  &X_RAY_TUBE_CURRENT,
  &ACQUISITION_DEVICE_PROCESSING_DESCRIPTION,
  &ACQUISITION_COMMENTS,
  &SEQUENCE_OF_ULTRASOUND_REGIONS,
  &DETECTOR_ID,
  &CONTENT_QUALIFICATION,
  &ACQUISITION_PROTOCOL_DESCRIPTION,
  &CONTRIBUTION_DESCRIPTION,
  &STUDY_INSTANCE_UID,
  &SERIES_INSTANCE_UID,
  &STUDY_ID,
  &SERIES_NUMBER,
  &INSTANCE_NUMBER,
  &IMAGE_POSITION_PATIENT,
  &IMAGE_ORIENTATION_PATIENT,
  &FRAME_OF_REFERENCE_UID,
  &LATERALITY,
  &SYNCHRONIZATION_FRAME_OF_REFERENCE_UID,
  &MODIFYING_DEVICE_ID,
  &MODIFYING_DEVICE_MANUFACTURER,
  &MODIFIED_IMAGE_DESCRIPTION,
  &IMAGE_COMMENTS,
  &FRAME_COMMENTS,
  &CONCATENATION_UID,
  &DIMENSION_ORGANIZATION_UID,
  &SAMPLES_PER_PIXEL,
  &ROWS,
  &COLUMNS,
  &PIXEL_SPACING,
  &BITS_ALLOCATED,
  &RESCALE_INTERCEPT,
  &RESCALE_SLOPE,
  &PALETTE_COLOR_LOOKUP_TABLE_UID,
  &LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID,
  &IMAGE_PRESENTATION_COMMENTS,
  &PIXEL_MEASURES_SEQUENCE,
  &STUDY_ID_ISSUER,
  &SCHEDULED_STUDY_LOCATION,
  &SCHEDULED_STUDY_LOCATION_AE_TITLE,
  &REASON_FOR_STUDY,
  &REQUESTING_PHYSICIAN,
  &REQUESTING_SERVICE,
  &REQUESTED_PROCEDURE_DESCRIPTION,
  &REQUESTED_CONTRAST_AGENT,
  &STUDY_COMMENTS,
  &ADMISSION_ID,
  &ISSUER_OF_ADMISSION_ID,
  &SCHEDULED_PATIENT_INSTITUTION_RESIDENCE,
  &ADMITTING_DATE,
  &ADMITTING_TIME,
  &DISCHARGE_DIAGNOSIS_DESCRIPTION,
  &SPECIAL_NEEDS,
  &SERVICE_EPISODE_ID,
  &ISSUER_OF_SERVICE_EPISODE_ID,
  &SERVICE_EPISODE_DESCRIPTION,
  &CURRENT_PATIENT_LOCATION,
  &PATIENT_INSTITUTION_RESIDENCE,
  &PATIENT_STATE,
  &REFERENCED_PATIENT_ALIAS_SEQUENCE,
  &VISIT_COMMENTS,
  &SCHEDULED_STATION_AE_TITLE,
  &SCHEDULED_PROCEDURE_STEP_START_DATE,
  &SCHEDULED_PROCEDURE_STEP_START_TIME,
  &SCHEDULED_PROCEDURE_STEP_END_DATE,
  &SCHEDULED_PROCEDURE_STEP_END_TIME,
  &SCHEDULED_PERFORMING_PHYSICIAN_NAME,
  &SCHEDULED_PROCEDURE_STEP_DESCRIPTION,
  &SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE,
  &SCHEDULED_STATION_NAME,
  &SCHEDULED_PROCEDURE_STEP_LOCATION,
  &PRE_MEDICATION,
  &PERFORMED_STATION_AE_TITLE,
  &PERFORMED_STATION_NAME,
  &PERFORMED_LOCATION,
  &PERFORMED_PROCEDURE_STEP_START_DATE,
  &PERFORMED_PROCEDURE_STEP_START_TIME,
  &PERFORMED_STATION_NAME_CODE_SEQUENCE,
  &PERFORMED_PROCEDURE_STEP_ID,
  &PERFORMED_PROCEDURE_STEP_DESCRIPTION,
  &REQUEST_ATTRIBUTES_SEQUENCE,
  &COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP,
  &ACQUISITION_CONTEXT_SEQUENCE,
  &REQUESTED_PROCEDURE_ID,
  &PATIENT_TRANSPORT_ARRANGEMENTS,
  &REQUESTED_PROCEDURE_LOCATION,
  &NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS,
  &INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE,
  &PERSON_IDENTIFICATION_CODE_SEQUENCE,
  &PERSON_ADDRESS,
  &PERSON_TELEPHONE_NUMBERS,
  &REQUESTED_PROCEDURE_COMMENTS,
  &REASON_FOR_THE_IMAGING_SERVICE_REQUEST,
  &ORDER_ENTERED_BY,
  &ORDER_ENTERER_LOCATION,
  &ORDER_CALLBACK_PHONE_NUMBER,
  &PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST,
  &FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST,
  &IMAGING_SERVICE_REQUEST_COMMENTS,
  &CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION,
  &REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID,
  &SCHEDULED_STATION_NAME_CODE_SEQUENCE,
  &SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE,
  &PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE,
  &SCHEDULED_HUMAN_PERFORMERS_SEQUENCE,
  &ACTUAL_HUMAN_PERFORMERS_SEQUENCE,
  &HUMAN_PERFORMER_ORGANIZATION,
  &HUMAN_PERFORMER_NAME,
  &VERIFYING_ORGANIZATION,
  &VALUE_TYPE,
  &CONCEPT_NAME_CODE_SEQUENCE,
  &VERIFYING_OBSERVER_SEQUENCE,
  &VERIFYING_OBSERVER_NAME,
  &AUTHOR_OBSERVER_SEQUENCE,
  &PARTICIPANT_SEQUENCE,
  &CUSTODIAL_ORGANIZATION_SEQUENCE,
  &VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE,
  &PERSON_NAME,
  &UID,
  &NUMERIC_VALUE,
  &CONTENT_SEQUENCE,
  &TEMPLATE_EXTENSION_ORGANIZATION_UID,
  &TEMPLATE_EXTENSION_CREATOR_UID,
  &GRAPHIC_ANNOTATION_SEQUENCE,
  &CONTENT_CREATOR_NAME,
  &CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE,
  &FIDUCIAL_UID,
  &STORAGE_MEDIA_FILE_SET_UID,
  &ICON_IMAGE_SEQUENCE,
  &TOPIC_TITLE,
  &TOPIC_SUBJECT,
  &TOPIC_AUTHOR,
  &TOPIC_KEYWORDS,
  &DIGITAL_SIGNATURE_UID,
  &REFERENCED_DIGITAL_SIGNATURE_SEQUENCE,
  &REFERENCED_SOP_INSTANCE_MAC_SEQUENCE,
  &MAC,
  &MODIFIED_ATTRIBUTES_SEQUENCE,
  &ORIGINAL_ATTRIBUTES_SEQUENCE,
  &TEXT_STRING,
  &REFERENCED_FRAME_OF_REFERENCE_UID,
  &RELATED_FRAME_OF_REFERENCE_UID,
  &DOSE_REFERENCE_UID,
  &REVIEWER_NAME,
  &ARBITRARY,
  &TEXT_COMMENTS,
  &RESULTS_ID_ISSUER,
  &INTERPRETATION_RECORDER,
  &INTERPRETATION_TRANSCRIBER,
  &INTERPRETATION_TEXT,
  &INTERPRETATION_AUTHOR,
  &INTERPRETATION_APPROVER_SEQUENCE,
  &PHYSICIAN_APPROVING_INTERPRETATION,
  &INTERPRETATION_DIAGNOSIS_DESCRIPTION,
  &RESULTS_DISTRIBUTION_LIST_SEQUENCE,
  &DISTRIBUTION_NAME,
  &DISTRIBUTION_ADDRESS,
  &INTERPRETATION_ID_ISSUER,
  &IMPRESSIONS,
  &RESULTS_COMMENTS,
  &CURVE_DIMENSIONS,
  &CURVE_DATA,
  &OVERLAY_ROWS,
  &OVERLAY_DATA,
  &OVERLAY_COMMENTS,
  &PIXEL_DATA,
  &DIGITAL_SIGNATURES_SEQUENCE,
  &DATA_SET_TRAILING_PADDING,
];

pub const ACCESSION_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0050),
  name: "Accession Number",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const ACQUISITION_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x4000),
  name: "Acquisition Comments",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const ACQUISITION_CONTEXT_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0555),
  name: "Acquisition Context Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const ACQUISITION_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0022),
  name: "Acquisition Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const ACQUISITION_DATETIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x002A),
  name: "Acquisition DateTime",
  vr: ValueRepresentation::DateTime,
  is_retired: false,
};

pub const ACQUISITION_DEVICE_PROCESSING_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1400),
  name: "Acquisition Device Processing Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const ACQUISITION_PROTOCOL_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0018, 0x9424),
  name: "Acquisition Protocol Description",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const ACQUISITION_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0032),
  name: "Acquisition Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const ACTUAL_HUMAN_PERFORMERS_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4035),
  name: "Actual Human Performers Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const ADDITIONAL_PATIENT_HISTORY: Item = Item {
  tag: DataElementTag::new(0x0010, 0x21B0),
  name: "Additional Patient History",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const ADMISSION_ID: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0010),
  name: "Admission ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const ADMITTING_DATE: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0020),
  name: "Admitting Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1084),
  name: "Admitting Diagnoses Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const ADMITTING_DIAGNOSES_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1080),
  name: "Admitting Diagnoses Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const ADMITTING_TIME: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0021),
  name: "Admitting Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const AFFECTED_SOP_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0000, 0x1000),
  name: "Affected SOP Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const ALLERGIES: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2110),
  name: "Allergies",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const ARBITRARY: Item = Item {
  tag: DataElementTag::new(0x4000, 0x0010),
  name: "Arbitrary",
  vr: ValueRepresentation::LongText,
  is_retired: true,
};

pub const AUTHOR_OBSERVER_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA078),
  name: "Author Observer Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const BITS_ALLOCATED: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0100),
  name: "Bits Allocated",
  vr: ValueRepresentation::UnsignedShort,
  is_retired: false,
};

pub const BODY_PART_EXAMINED: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0015),
  name: "Body Part Examined",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const BRANCH_OF_SERVICE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1081),
  name: "Branch of Service",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const CASSETTE_ID: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1007),
  name: "Cassette ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const CODE_MEANING: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0104),
  name: "Code Meaning",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const CODE_VALUE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0100),
  name: "Code Value",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const COLUMNS: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0011),
  name: "Columns",
  vr: ValueRepresentation::UnsignedShort,
  is_retired: false,
};

pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0280),
  name: "Comments on the Performed Procedure Step",
  vr: ValueRepresentation::ShortText,
  is_retired: false,
};

pub const CONCATENATION_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x9161),
  name: "Concatenation UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const CONCEPT_NAME_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA043),
  name: "Concept Name Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x3001),
  name: "Confidentiality Constraint on Patient Data Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0070, 0x0086),
  name: "Content Creator's Identification Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const CONTENT_CREATOR_NAME: Item = Item {
  tag: DataElementTag::new(0x0070, 0x0084),
  name: "Content Creator's Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const CONTENT_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0023),
  name: "Content Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const CONTENT_QUALIFICATION: Item = Item {
  tag: DataElementTag::new(0x0018, 0x9004),
  name: "Content Qualification",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const CONTENT_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA730),
  name: "Content Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const CONTENT_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0033),
  name: "Content Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const CONTEXT_GROUP_EXTENSION_CREATOR_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x010D),
  name: "Context Group Extension Creator UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const CONTRAST_BOLUS_AGENT: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0010),
  name: "Contrast/Bolus Agent",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const CONTRIBUTION_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0018, 0xA003),
  name: "Contribution Description",
  vr: ValueRepresentation::ShortText,
  is_retired: false,
};

pub const COUNTRY_OF_RESIDENCE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2150),
  name: "Country of Residence",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const CREATOR_VERSION_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x9123),
  name: "Creator-Version UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const CURRENT_PATIENT_LOCATION: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0300),
  name: "Current Patient Location",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const CURVE_DATA: Item = Item {
  tag: DataElementTag::new(0x5000, 0x3000),
  name: "Curve Data",
  vr: ValueRepresentation::OtherByteString,
  is_retired: true,
};

pub const CURVE_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0025),
  name: "Curve Date",
  vr: ValueRepresentation::Date,
  is_retired: true,
};

pub const CURVE_DIMENSIONS: Item = Item {
  tag: DataElementTag::new(0x5000, 0x0005),
  name: "Curve Dimensions",
  vr: ValueRepresentation::UnsignedShort,
  is_retired: true,
};

pub const CURVE_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0035),
  name: "Curve Time",
  vr: ValueRepresentation::Time,
  is_retired: true,
};

pub const CUSTODIAL_ORGANIZATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA07C),
  name: "Custodial Organization Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const DATA_SET_TRAILING_PADDING: Item = Item {
  tag: DataElementTag::new(0xFFFC, 0xFFFC),
  name: "Data Set Trailing Padding",
  vr: ValueRepresentation::OtherByteString,
  is_retired: false,
};

pub const DERIVATION_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0008, 0x2111),
  name: "Derivation Description",
  vr: ValueRepresentation::ShortText,
  is_retired: false,
};

pub const DETECTOR_ID: Item = Item {
  tag: DataElementTag::new(0x0018, 0x700A),
  name: "Detector ID",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const DEVICE_SERIAL_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1000),
  name: "Device Serial Number",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const DEVICE_UID: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1002),
  name: "Device UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const DIGITAL_SIGNATURES_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0xFFFA, 0xFFFA),
  name: "Digital Signatures Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const DIGITAL_SIGNATURE_UID: Item = Item {
  tag: DataElementTag::new(0x0400, 0x0100),
  name: "Digital Signature UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const DIMENSION_ORGANIZATION_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x9164),
  name: "Dimension Organization UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const DISCHARGE_DIAGNOSIS_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0040),
  name: "Discharge Diagnosis Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const DISTRIBUTION_ADDRESS: Item = Item {
  tag: DataElementTag::new(0x4008, 0x011A),
  name: "Distribution Address",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const DISTRIBUTION_NAME: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0119),
  name: "Distribution Name",
  vr: ValueRepresentation::PersonName,
  is_retired: true,
};

pub const DOSE_REFERENCE_UID: Item = Item {
  tag: DataElementTag::new(0x300A, 0x0013),
  name: "Dose Reference UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const ETHNIC_GROUP: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2160),
  name: "Ethnic Group",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const FAILED_SOP_INSTANCE_UID_LIST: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0058),
  name: "Failed SOP Instance UID List",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const FIDUCIAL_UID: Item = Item {
  tag: DataElementTag::new(0x0070, 0x031A),
  name: "Fiducial UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const FILE_META_INFORMATION_GROUP_LENGTH: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0000),
  name: "File Meta Information Group Length",
  vr: ValueRepresentation::UnsignedLong,
  is_retired: false,
};

pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Item = Item {
  tag: DataElementTag::new(0x0040, 0x2017),
  name: "Filler Order Number / Imaging Service Request",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const FRAME_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0020, 0x9158),
  name: "Frame Comments",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const FRAME_OF_REFERENCE_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0052),
  name: "Frame of Reference UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const GANTRY_ID: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1008),
  name: "Gantry ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const GENERATOR_ID: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1005),
  name: "Generator ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const GRAPHIC_ANNOTATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0070, 0x0001),
  name: "Graphic Annotation Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const HUMAN_PERFORMER_NAME: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4037),
  name: "Human Performer's Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const HUMAN_PERFORMER_ORGANIZATION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4036),
  name: "Human Performer's Organization",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const ICON_IMAGE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0088, 0x0200),
  name: "Icon Image Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const IDENTIFYING_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0008, 0x4000),
  name: "Identifying Comments",
  vr: ValueRepresentation::LongText,
  is_retired: true,
};

pub const IMAGE_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0020, 0x4000),
  name: "Image Comments",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const IMAGE_ORIENTATION_PATIENT: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0037),
  name: "Image Orientation (Patient)",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const IMAGE_POSITION_PATIENT: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0032),
  name: "Image Position (Patient)",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const IMAGE_PRESENTATION_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0028, 0x4000),
  name: "Image Presentation Comments",
  vr: ValueRepresentation::LongText,
  is_retired: true,
};

pub const IMAGE_TYPE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0008),
  name: "Image Type",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const IMAGING_SERVICE_REQUEST_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0040, 0x2400),
  name: "Imaging Service Request Comments",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const IMPRESSIONS: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0300),
  name: "Impressions",
  vr: ValueRepresentation::ShortText,
  is_retired: true,
};

pub const INSTANCE_CREATION_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0012),
  name: "Instance Creation Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const INSTANCE_CREATION_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0013),
  name: "Instance Creation Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const INSTANCE_CREATOR_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0014),
  name: "Instance Creator UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const INSTANCE_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0013),
  name: "Instance Number",
  vr: ValueRepresentation::IntegerString,
  is_retired: false,
};

pub const INSTITUTIONAL_DEPARTMENT_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1040),
  name: "Institutional Department Name",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const INSTITUTION_ADDRESS: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0081),
  name: "Institution Address",
  vr: ValueRepresentation::ShortText,
  is_retired: false,
};

pub const INSTITUTION_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0082),
  name: "Institution Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const INSTITUTION_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0080),
  name: "Institution Name",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const INSURANCE_PLAN_IDENTIFICATION: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1050),
  name: "Insurance Plan Identification",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1011),
  name: "Intended Recipients of Results Identification Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const INTERPRETATION_APPROVER_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0111),
  name: "Interpretation Approver Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: true,
};

pub const INTERPRETATION_AUTHOR: Item = Item {
  tag: DataElementTag::new(0x4008, 0x010C),
  name: "Interpretation Author",
  vr: ValueRepresentation::PersonName,
  is_retired: true,
};

pub const INTERPRETATION_DIAGNOSIS_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0115),
  name: "Interpretation Diagnosis Description",
  vr: ValueRepresentation::LongText,
  is_retired: true,
};

pub const INTERPRETATION_ID_ISSUER: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0202),
  name: "Interpretation ID Issuer",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const INTERPRETATION_RECORDER: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0102),
  name: "Interpretation Recorder",
  vr: ValueRepresentation::PersonName,
  is_retired: true,
};

pub const INTERPRETATION_TEXT: Item = Item {
  tag: DataElementTag::new(0x4008, 0x010B),
  name: "Interpretation Text",
  vr: ValueRepresentation::ShortText,
  is_retired: true,
};

pub const INTERPRETATION_TRANSCRIBER: Item = Item {
  tag: DataElementTag::new(0x4008, 0x010A),
  name: "Interpretation Transcriber",
  vr: ValueRepresentation::PersonName,
  is_retired: true,
};

pub const IRRADIATION_EVENT_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x3010),
  name: "Irradiation Event UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const ISSUER_OF_ADMISSION_ID: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0011),
  name: "Issuer of Admission ID",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const ISSUER_OF_PATIENT_ID: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0021),
  name: "Issuer of Patient ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const ISSUER_OF_SERVICE_EPISODE_ID: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0061),
  name: "Issuer of Service Episode ID",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const KVP: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0060),
  name: "KVP",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID: Item = Item {
  tag: DataElementTag::new(0x0028, 0x1214),
  name: "Large Palette Color Lookup Table UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: true,
};

pub const LAST_MENSTRUAL_DATE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x21D0),
  name: "Last Menstrual Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const LATERALITY: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0060),
  name: "Laterality",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const MAC: Item = Item {
  tag: DataElementTag::new(0x0400, 0x0404),
  name: "MAC",
  vr: ValueRepresentation::OtherByteString,
  is_retired: false,
};

pub const MANUFACTURER: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0070),
  name: "Manufacturer",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const MANUFACTURER_MODEL_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1090),
  name: "Manufacturer's Model Name",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const MEDIA_STORAGE_SOP_CLASS_UID: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0002),
  name: "Media Storage SOP Class UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0003),
  name: "Media Storage SOP Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const MEDICAL_ALERTS: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2000),
  name: "Medical Alerts",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const MEDICAL_RECORD_LOCATOR: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1090),
  name: "Medical Record Locator",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const MILITARY_RANK: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1080),
  name: "Military Rank",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const MODALITY: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0060),
  name: "Modality",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const MODIFIED_ATTRIBUTES_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0400, 0x0550),
  name: "Modified Attributes Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const MODIFIED_IMAGE_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0020, 0x3406),
  name: "Modified Image Description",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const MODIFYING_DEVICE_ID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x3401),
  name: "Modifying Device ID",
  vr: ValueRepresentation::CodeString,
  is_retired: true,
};

pub const MODIFYING_DEVICE_MANUFACTURER: Item = Item {
  tag: DataElementTag::new(0x0020, 0x3404),
  name: "Modifying Device Manufacturer",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1010),
  name: "Names of Intended Recipients of Results",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const NAME_OF_PHYSICIANS_READING_STUDY: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1060),
  name: "Name of Physician(s) Reading Study",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const NUMERIC_VALUE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA30A),
  name: "Numeric Value",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const OCCUPATION: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2180),
  name: "Occupation",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const OPERATORS_IDENTIFICATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1072),
  name: "Operators' Identification Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const OPERATORS_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1070),
  name: "Operators' Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const ORDER_CALLBACK_PHONE_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0040, 0x2010),
  name: "Order Callback Phone Number",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const ORDER_ENTERED_BY: Item = Item {
  tag: DataElementTag::new(0x0040, 0x2008),
  name: "Order Entered By",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const ORDER_ENTERER_LOCATION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x2009),
  name: "Order Enterer's Location",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0400, 0x0561),
  name: "Original Attributes Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const OTHER_PATIENT_IDS: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1000),
  name: "Other Patient IDs",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const OTHER_PATIENT_IDS_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1002),
  name: "Other Patient IDs Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const OTHER_PATIENT_NAMES: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1001),
  name: "Other Patient Names",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const OVERLAY_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x6000, 0x4000),
  name: "Overlay Comments",
  vr: ValueRepresentation::LongText,
  is_retired: true,
};

pub const OVERLAY_DATA: Item = Item {
  tag: DataElementTag::new(0x6000, 0x3000),
  name: "Overlay Data",
  vr: ValueRepresentation::OtherWordString,
  is_retired: false,
};

pub const OVERLAY_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0024),
  name: "Overlay Date",
  vr: ValueRepresentation::Date,
  is_retired: true,
};

pub const OVERLAY_ROWS: Item = Item {
  tag: DataElementTag::new(0x6000, 0x0010),
  name: "Overlay Rows",
  vr: ValueRepresentation::UnsignedShort,
  is_retired: false,
};

pub const OVERLAY_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0034),
  name: "Overlay Time",
  vr: ValueRepresentation::Time,
  is_retired: true,
};

pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Item = Item {
  tag: DataElementTag::new(0x0028, 0x1199),
  name: "Palette Color Lookup Table UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const PARTICIPANT_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA07A),
  name: "Participant Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PATIENT_ADDRESS: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1040),
  name: "Patient's Address",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PATIENT_AGE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1010),
  name: "Patient's Age",
  vr: ValueRepresentation::AgeString,
  is_retired: false,
};

pub const PATIENT_BIRTH_DATE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0030),
  name: "Patient's Birth Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const PATIENT_BIRTH_NAME: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1005),
  name: "Patient's Birth Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const PATIENT_BIRTH_TIME: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0032),
  name: "Patient's Birth Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const PATIENT_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0010, 0x4000),
  name: "Patient Comments",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const PATIENT_ID: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0020),
  name: "Patient ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PATIENT_INSTITUTION_RESIDENCE: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0400),
  name: "Patient's Institution Residence",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0050),
  name: "Patient's Insurance Plan Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PATIENT_MOTHER_BIRTH_NAME: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1060),
  name: "Patient's Mother's Birth Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const PATIENT_NAME: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0010),
  name: "Patient's Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0101),
  name: "Patient's Primary Language Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0102),
  name: "Patient's Primary Language Modifier Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PATIENT_RELIGIOUS_PREFERENCE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x21F0),
  name: "Patient's Religious Preference",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PATIENT_SEX: Item = Item {
  tag: DataElementTag::new(0x0010, 0x0040),
  name: "Patient's Sex",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const PATIENT_SEX_NEUTERED: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2203),
  name: "Patient's Sex Neutered",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const PATIENT_SIZE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1020),
  name: "Patient's Size",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const PATIENT_STATE: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0500),
  name: "Patient State",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PATIENT_TELEPHONE_NUMBERS: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2154),
  name: "Patient's Telephone Numbers",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const PATIENT_TRANSPORT_ARRANGEMENTS: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1004),
  name: "Patient Transport Arrangements",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PATIENT_WEIGHT: Item = Item {
  tag: DataElementTag::new(0x0010, 0x1030),
  name: "Patient's Weight",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const PERFORMED_LOCATION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0243),
  name: "Performed Location",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0254),
  name: "Performed Procedure Step Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PERFORMED_PROCEDURE_STEP_ID: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0253),
  name: "Performed Procedure Step ID",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const PERFORMED_PROCEDURE_STEP_START_DATE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0244),
  name: "Performed Procedure Step Start Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const PERFORMED_PROCEDURE_STEP_START_TIME: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0245),
  name: "Performed Procedure Step Start Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const PERFORMED_STATION_AE_TITLE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0241),
  name: "Performed Station AE Title",
  vr: ValueRepresentation::ApplicationEntity,
  is_retired: false,
};

pub const PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4030),
  name: "Performed Station Geographic Location Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PERFORMED_STATION_NAME: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0242),
  name: "Performed Station Name",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const PERFORMED_STATION_NAME_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0248),
  name: "Performed Station Name Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1052),
  name: "Performing Physician Identification Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PERFORMING_PHYSICIAN_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1050),
  name: "Performing Physician's Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const PERSON_ADDRESS: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1102),
  name: "Person's Address",
  vr: ValueRepresentation::ShortText,
  is_retired: false,
};

pub const PERSON_IDENTIFICATION_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1101),
  name: "Person Identification Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PERSON_NAME: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA123),
  name: "Person Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const PERSON_TELEPHONE_NUMBERS: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1103),
  name: "Person's Telephone Numbers",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PHYSICIANS_OF_RECORD: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1048),
  name: "Physician(s) of Record",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1049),
  name: "Physician(s) of Record Identification Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1062),
  name: "Physician(s) Reading Study Identification Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PHYSICIAN_APPROVING_INTERPRETATION: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0114),
  name: "Physician Approving Interpretation",
  vr: ValueRepresentation::PersonName,
  is_retired: true,
};

pub const PIXEL_DATA: Item = Item {
  tag: DataElementTag::new(0x7FE0, 0x0010),
  name: "Pixel Data",
  vr: ValueRepresentation::OtherWordString,
  is_retired: false,
};

pub const PIXEL_MEASURES_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0028, 0x9110),
  name: "Pixel Measures Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const PIXEL_SPACING: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0030),
  name: "Pixel Spacing",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Item = Item {
  tag: DataElementTag::new(0x0040, 0x2016),
  name: "Placer Order Number / Imaging Service Request",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PLATE_ID: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1004),
  name: "Plate ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PREGNANCY_STATUS: Item = Item {
  tag: DataElementTag::new(0x0010, 0x21C0),
  name: "Pregnancy Status",
  vr: ValueRepresentation::UnsignedShort,
  is_retired: false,
};

pub const PRE_MEDICATION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0012),
  name: "Pre-Medication",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const PROTOCOL_NAME: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1030),
  name: "Protocol Name",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const REASON_FOR_STUDY: Item = Item {
  tag: DataElementTag::new(0x0032, 0x1030),
  name: "Reason for Study",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const REASON_FOR_THE_IMAGING_SERVICE_REQUEST: Item = Item {
  tag: DataElementTag::new(0x0040, 0x2001),
  name: "Reason for the Imaging Service Request",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const REFERENCED_DIGITAL_SIGNATURE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0400, 0x0402),
  name: "Referenced Digital Signature Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERENCED_FRAME_OF_REFERENCE_UID: Item = Item {
  tag: DataElementTag::new(0x3006, 0x0024),
  name: "Referenced Frame of Reference UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4023),
  name: "Referenced General Purpose Scheduled Procedure Step Transaction UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const REFERENCED_IMAGE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1140),
  name: "Referenced Image Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERENCED_PATIENT_ALIAS_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0038, 0x1234),
  name: "Referenced Patient Alias Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERENCED_PATIENT_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1120),
  name: "Referenced Patient Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1111),
  name: "Referenced Performed Procedure Step Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERENCED_SOP_CLASS_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1150),
  name: "Referenced SOP Class UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const REFERENCED_SOP_INSTANCE_MAC_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0400, 0x0403),
  name: "Referenced SOP Instance MAC Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERENCED_SOP_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1155),
  name: "Referenced SOP Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Item = Item {
  tag: DataElementTag::new(0x0004, 0x1511),
  name: "Referenced SOP Instance UID in File",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const REFERENCED_STUDY_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1110),
  name: "Referenced Study Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERRING_PHYSICIAN_ADDRESS: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0092),
  name: "Referring Physician's Address",
  vr: ValueRepresentation::ShortText,
  is_retired: false,
};

pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0096),
  name: "Referring Physician Identification Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const REFERRING_PHYSICIAN_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0090),
  name: "Referring Physician's Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0094),
  name: "Referring Physician's Telephone Numbers",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const REGION_OF_RESIDENCE: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2152),
  name: "Region of Residence",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const RELATED_FRAME_OF_REFERENCE_UID: Item = Item {
  tag: DataElementTag::new(0x3006, 0x00C2),
  name: "Related Frame of Reference UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const REQUESTED_CONTRAST_AGENT: Item = Item {
  tag: DataElementTag::new(0x0032, 0x1070),
  name: "Requested Contrast Agent",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const REQUESTED_PROCEDURE_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1400),
  name: "Requested Procedure Comments",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const REQUESTED_PROCEDURE_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0032, 0x1060),
  name: "Requested Procedure Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const REQUESTED_PROCEDURE_ID: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1001),
  name: "Requested Procedure ID",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const REQUESTED_PROCEDURE_LOCATION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x1005),
  name: "Requested Procedure Location",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const REQUESTED_SOP_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0000, 0x1001),
  name: "Requested SOP Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const REQUESTING_PHYSICIAN: Item = Item {
  tag: DataElementTag::new(0x0032, 0x1032),
  name: "Requesting Physician",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const REQUESTING_SERVICE: Item = Item {
  tag: DataElementTag::new(0x0032, 0x1033),
  name: "Requesting Service",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const REQUEST_ATTRIBUTES_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0275),
  name: "Request Attributes Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const RESCALE_INTERCEPT: Item = Item {
  tag: DataElementTag::new(0x0028, 0x1052),
  name: "Rescale Intercept",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const RESCALE_SLOPE: Item = Item {
  tag: DataElementTag::new(0x0028, 0x1053),
  name: "Rescale Slope",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const RESPONSIBLE_ORGANIZATION: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2299),
  name: "Responsible Organization",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const RESPONSIBLE_PERSON: Item = Item {
  tag: DataElementTag::new(0x0010, 0x2297),
  name: "Responsible Person",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const RESULTS_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x4008, 0x4000),
  name: "Results Comments",
  vr: ValueRepresentation::ShortText,
  is_retired: true,
};

pub const RESULTS_DISTRIBUTION_LIST_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0118),
  name: "Results Distribution List Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: true,
};

pub const RESULTS_ID_ISSUER: Item = Item {
  tag: DataElementTag::new(0x4008, 0x0042),
  name: "Results ID Issuer",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const RETRIEVE_AE_TITLE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0054),
  name: "Retrieve AE Title",
  vr: ValueRepresentation::ApplicationEntity,
  is_retired: false,
};

pub const REVIEWER_NAME: Item = Item {
  tag: DataElementTag::new(0x300E, 0x0008),
  name: "Reviewer Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const ROWS: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0010),
  name: "Rows",
  vr: ValueRepresentation::UnsignedShort,
  is_retired: false,
};

pub const SAMPLES_PER_PIXEL: Item = Item {
  tag: DataElementTag::new(0x0028, 0x0002),
  name: "Samples per Pixel",
  vr: ValueRepresentation::UnsignedShort,
  is_retired: false,
};

pub const SCHEDULED_HUMAN_PERFORMERS_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4034),
  name: "Scheduled Human Performers Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const SCHEDULED_PATIENT_INSTITUTION_RESIDENCE: Item = Item {
  tag: DataElementTag::new(0x0038, 0x001E),
  name: "Scheduled Patient Institution Residence",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x000B),
  name: "Scheduled Performing Physician Identification Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0006),
  name: "Scheduled Performing Physician's Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0007),
  name: "Scheduled Procedure Step Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const SCHEDULED_PROCEDURE_STEP_END_DATE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0004),
  name: "Scheduled Procedure Step End Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const SCHEDULED_PROCEDURE_STEP_END_TIME: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0005),
  name: "Scheduled Procedure Step End Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const SCHEDULED_PROCEDURE_STEP_LOCATION: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0011),
  name: "Scheduled Procedure Step Location",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0002),
  name: "Scheduled Procedure Step Start Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0003),
  name: "Scheduled Procedure Step Start Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const SCHEDULED_STATION_AE_TITLE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0001),
  name: "Scheduled Station AE Title",
  vr: ValueRepresentation::ApplicationEntity,
  is_retired: false,
};

pub const SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4027),
  name: "Scheduled Station Geographic Location Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const SCHEDULED_STATION_NAME: Item = Item {
  tag: DataElementTag::new(0x0040, 0x0010),
  name: "Scheduled Station Name",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const SCHEDULED_STATION_NAME_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0x4025),
  name: "Scheduled Station Name Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const SCHEDULED_STUDY_LOCATION: Item = Item {
  tag: DataElementTag::new(0x0032, 0x1020),
  name: "Scheduled Study Location",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const SCHEDULED_STUDY_LOCATION_AE_TITLE: Item = Item {
  tag: DataElementTag::new(0x0032, 0x1021),
  name: "Scheduled Study Location AE Title",
  vr: ValueRepresentation::ApplicationEntity,
  is_retired: true,
};

pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x6011),
  name: "Sequence of Ultrasound Regions",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const SERIES_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0021),
  name: "Series Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const SERIES_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0008, 0x103E),
  name: "Series Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const SERIES_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x000E),
  name: "Series Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const SERIES_NUMBER: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0011),
  name: "Series Number",
  vr: ValueRepresentation::IntegerString,
  is_retired: false,
};

pub const SERIES_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0031),
  name: "Series Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const SERVICE_EPISODE_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0062),
  name: "Service Episode Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const SERVICE_EPISODE_ID: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0060),
  name: "Service Episode ID",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const SLICE_THICKNESS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x0050),
  name: "Slice Thickness",
  vr: ValueRepresentation::DecimalString,
  is_retired: false,
};

pub const SMOKING_STATUS: Item = Item {
  tag: DataElementTag::new(0x0010, 0x21A0),
  name: "Smoking Status",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const SOFTWARE_VERSIONS: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1020),
  name: "Software Versions",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const SOP_CLASS_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0016),
  name: "SOP Class UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const SOP_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0018),
  name: "SOP Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const SOURCE_IMAGE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x2112),
  name: "Source Image Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const SPECIAL_NEEDS: Item = Item {
  tag: DataElementTag::new(0x0038, 0x0050),
  name: "Special Needs",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const SPECIFIC_CHARACTER_SET: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0005),
  name: "Specific Character Set",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const STATION_NAME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1010),
  name: "Station Name",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const STORAGE_MEDIA_FILE_SET_UID: Item = Item {
  tag: DataElementTag::new(0x0088, 0x0140),
  name: "Storage Media File-set UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const STUDY_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0032, 0x4000),
  name: "Study Comments",
  vr: ValueRepresentation::LongText,
  is_retired: true,
};

pub const STUDY_DATE: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0020),
  name: "Study Date",
  vr: ValueRepresentation::Date,
  is_retired: false,
};

pub const STUDY_DESCRIPTION: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1030),
  name: "Study Description",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const STUDY_ID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0010),
  name: "Study ID",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const STUDY_ID_ISSUER: Item = Item {
  tag: DataElementTag::new(0x0032, 0x0012),
  name: "Study ID Issuer",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const STUDY_INSTANCE_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x000D),
  name: "Study Instance UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const STUDY_TIME: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0030),
  name: "Study Time",
  vr: ValueRepresentation::Time,
  is_retired: false,
};

pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Item = Item {
  tag: DataElementTag::new(0x0020, 0x0200),
  name: "Synchronization Frame of Reference UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const TEMPLATE_EXTENSION_CREATOR_UID: Item = Item {
  tag: DataElementTag::new(0x0040, 0xDB0D),
  name: "Template Extension Creator UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: true,
};

pub const TEMPLATE_EXTENSION_ORGANIZATION_UID: Item = Item {
  tag: DataElementTag::new(0x0040, 0xDB0C),
  name: "Template Extension Organization UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: true,
};

pub const TEXT_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x4000, 0x4000),
  name: "Text Comments",
  vr: ValueRepresentation::LongText,
  is_retired: true,
};

pub const TEXT_STRING: Item = Item {
  tag: DataElementTag::new(0x2030, 0x0020),
  name: "Text String",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const TIMEZONE_OFFSET_FROM_UTC: Item = Item {
  tag: DataElementTag::new(0x0008, 0x0201),
  name: "Timezone Offset From UTC",
  vr: ValueRepresentation::ShortString,
  is_retired: false,
};

pub const TOPIC_AUTHOR: Item = Item {
  tag: DataElementTag::new(0x0088, 0x0910),
  name: "Topic Author",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const TOPIC_KEYWORDS: Item = Item {
  tag: DataElementTag::new(0x0088, 0x0912),
  name: "Topic Keywords",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const TOPIC_SUBJECT: Item = Item {
  tag: DataElementTag::new(0x0088, 0x0906),
  name: "Topic Subject",
  vr: ValueRepresentation::ShortText,
  is_retired: true,
};

pub const TOPIC_TITLE: Item = Item {
  tag: DataElementTag::new(0x0088, 0x0904),
  name: "Topic Title",
  vr: ValueRepresentation::LongString,
  is_retired: true,
};

pub const TRANSACTION_UID: Item = Item {
  tag: DataElementTag::new(0x0008, 0x1195),
  name: "Transaction UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const TRANSFER_SYNTAX_UID: Item = Item {
  tag: DataElementTag::new(0x0002, 0x0010),
  name: "Transfer Syntax UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const UID: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA124),
  name: "UID",
  vr: ValueRepresentation::UniqueIdentifier,
  is_retired: false,
};

pub const VALUE_TYPE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA040),
  name: "Value Type",
  vr: ValueRepresentation::CodeString,
  is_retired: false,
};

pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA088),
  name: "Verifying Observer Identification Code Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const VERIFYING_OBSERVER_NAME: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA075),
  name: "Verifying Observer Name",
  vr: ValueRepresentation::PersonName,
  is_retired: false,
};

pub const VERIFYING_OBSERVER_SEQUENCE: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA073),
  name: "Verifying Observer Sequence",
  vr: ValueRepresentation::Sequence,
  is_retired: false,
};

pub const VERIFYING_ORGANIZATION: Item = Item {
  tag: DataElementTag::new(0x0040, 0xA027),
  name: "Verifying Organization",
  vr: ValueRepresentation::LongString,
  is_retired: false,
};

pub const VISIT_COMMENTS: Item = Item {
  tag: DataElementTag::new(0x0038, 0x4000),
  name: "Visit Comments",
  vr: ValueRepresentation::LongText,
  is_retired: false,
};

pub const X_RAY_TUBE_CURRENT: Item = Item {
  tag: DataElementTag::new(0x0018, 0x1151),
  name: "X-Ray Tube Current",
  vr: ValueRepresentation::IntegerString,
  is_retired: false,
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn items_are_sorted_test() {
    assert!(ITEMS.windows(2).all(|pair| pair[0].tag < pair[1].tag));
  }

  #[test]
  fn find_test() {
    assert_eq!(find(PATIENT_NAME.tag), Ok(&PATIENT_NAME));
    assert_eq!(find(DataElementTag::new(0x0011, 0x0010)), Err(()));

    assert_eq!(find(DataElementTag::new(0x6002, 0x3000)), Ok(&OVERLAY_DATA));
    assert_eq!(find(DataElementTag::new(0x501E, 0x3000)), Ok(&CURVE_DATA));
  }

  #[test]
  fn tag_with_name_test() {
    assert_eq!(
      tag_with_name(PATIENT_SEX.tag),
      "(0010,0040) Patient's Sex".to_string()
    );
    assert_eq!(
      tag_with_name(DataElementTag::new(0x0009, 0x1001)),
      "(0009,1001) Private tag".to_string()
    );
    assert_eq!(
      value_representation(DataElementTag::new(0x0009, 0x1001)),
      ValueRepresentation::Unknown
    );
  }

  #[test]
  fn is_retired_test() {
    assert!(is_retired(IDENTIFYING_COMMENTS.tag));
    assert!(is_retired(DataElementTag::new(0x6002, 0x4000)));
    assert!(!is_retired(PATIENT_NAME.tag));
    assert!(!is_retired(DataElementTag::new(0x0009, 0x1001)));
  }
}
