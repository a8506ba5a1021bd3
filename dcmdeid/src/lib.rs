//! dcmdeid de-identifies DICOM data sets, either one at a time or as a batch
//! of records stored in a directory.
//!
//! This crate re-exports the individual dcmdeid crates:
//!
//! - [`core`]: the DICOM data model and data element dictionary.
//! - [`json`]: conversion to and from the DICOM JSON Model.
//! - [`anonymize`]: rule tables, UID pseudonymization, and batch sessions.

pub use dcmdeid_anonymize as anonymize;
pub use dcmdeid_core as core;
pub use dcmdeid_json as json;
