//! De-identification of DICOM data sets.
//!
//! Data elements are redacted, replaced with dummy values, or pseudonymized
//! according to a rule table, with caller-supplied exceptions taking
//! precedence over it. UIDs are replaced consistently across all records
//! anonymized with the same [`UidRegistry`], so references between records
//! are preserved.

pub mod action_code;
pub mod anonymize_config;
pub mod anonymize_error;
pub mod anonymize_session;
pub mod archive_export;
pub mod data_set_anonymizer;
pub mod date_shift;
pub mod dummy_value;
pub mod exception_table;
pub mod progress;
pub mod record_codec;
pub mod record_files;
pub mod rule_resolver;
pub mod rule_table;
pub mod uid_registry;

pub use action_code::{Action, ActionCode, ActionCodeError};
pub use anonymize_config::AnonymizeConfig;
pub use anonymize_error::{AnonymizeError, AnonymizeSessionError, RecordError};
pub use anonymize_session::{AnonymizeReport, AnonymizeSession, SessionState};
pub use archive_export::{ArchiveError, ArchiveWriter, export_archive};
pub use data_set_anonymizer::{DataSetAnonymizeExtensions, DataSetAnonymizer};
pub use dummy_value::dummy_value;
pub use exception_table::ExceptionTable;
pub use progress::{NoProgress, ProgressObserver, ScaledProgress};
#[cfg(feature = "json")]
pub use record_codec::DicomJsonCodec;
pub use record_codec::{RecordCodec, assign_dictionary_vrs};
pub use record_files::list_record_files;
pub use rule_resolver::{RepeatingGroup, ResolvedAction, RuleResolver};
pub use rule_table::{RuleTable, RuleTableError};
pub use uid_registry::{
  RandomUidGenerator, SharedUidRegistry, UidGenerator, UidRegistry,
};
