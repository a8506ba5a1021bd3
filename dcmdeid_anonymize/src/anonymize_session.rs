//! Anonymization of a directory of records as a single session, with UIDs
//! replaced consistently across all of its records.
//!
//! The input directory is first moved aside into a staging directory created
//! next to it, and an empty directory is created in its place. Each staged
//! record is then read, anonymized, and written into the original location
//! under a new name, and its staged copy is deleted. Finally the staging
//! directory is removed.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tempfile::TempDir;

use crate::anonymize_config::AnonymizeConfig;
use crate::anonymize_error::{AnonymizeSessionError, RecordError};
use crate::data_set_anonymizer::DataSetAnonymizer;
use crate::progress::{ProgressCounter, ProgressObserver};
use crate::record_codec::RecordCodec;
use crate::record_files::list_record_files;
use crate::uid_registry::UidRegistry;

/// The stages of an anonymization session.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
  Idle,
  Staging,
  Processing,
  Finalizing,
  Done,
  Failed,
}

/// The outcome of an anonymization session.
///
#[derive(Debug, Default)]
pub struct AnonymizeReport {
  /// The anonymized files that were written, in processing order.
  pub written_files: Vec<PathBuf>,

  /// The records that were skipped, along with the reason for each.
  pub skipped_records: Vec<RecordError>,

  /// Whether the session was cancelled before all records were processed.
  pub cancelled: bool,

  /// The staging directory, if it was kept. This happens when the session is
  /// cancelled, and holds the records that weren't processed.
  pub retained_staging_path: Option<PathBuf>,
}

/// Anonymizes all records in a directory. A session owns the [`UidRegistry`]
/// used for its records, which can be taken back afterwards with
/// [`AnonymizeSession::into_uid_registry()`] and passed to a later session.
///
#[derive(Debug)]
pub struct AnonymizeSession {
  config: AnonymizeConfig,
  uid_registry: UidRegistry,
  state: SessionState,
  cancel_flag: Arc<AtomicBool>,
}

impl AnonymizeSession {
  pub fn new(config: AnonymizeConfig) -> Self {
    Self::with_uid_registry(config, UidRegistry::new())
  }

  /// Creates a session that continues from an existing UID registry.
  ///
  pub fn with_uid_registry(
    config: AnonymizeConfig,
    uid_registry: UidRegistry,
  ) -> Self {
    Self {
      config,
      uid_registry,
      state: SessionState::Idle,
      cancel_flag: Arc::new(AtomicBool::new(false)),
    }
  }

  pub fn state(&self) -> SessionState {
    self.state
  }

  /// Returns a flag that cancels the session when set. It's checked before
  /// each record, so a record is always either fully written or not written.
  ///
  pub fn cancel_flag(&self) -> Arc<AtomicBool> {
    self.cancel_flag.clone()
  }

  pub fn uid_registry(&self) -> &UidRegistry {
    &self.uid_registry
  }

  pub fn into_uid_registry(self) -> UidRegistry {
    self.uid_registry
  }

  /// Anonymizes every record under a directory in place. Output files are
  /// named with the configured prefix followed by the index of the input file
  /// in the sorted listing, e.g. `im00000`, `im00001`, so records that fail
  /// leave gaps in the numbering.
  ///
  /// Records that can't be read, decoded, anonymized, encoded, or written are
  /// skipped and listed in the returned report.
  ///
  pub fn anonymize_directory<C: RecordCodec>(
    &mut self,
    directory: &Path,
    codec: &C,
    observer: &mut dyn ProgressObserver,
  ) -> Result<AnonymizeReport, AnonymizeSessionError> {
    if self.state != SessionState::Idle {
      return Err(AnonymizeSessionError::AlreadyRun);
    }

    self.state = SessionState::Staging;
    tracing::info!("Staging \"{}\"", directory.display());

    let (staging_dir, staged_input) = match stage_directory(directory) {
      Ok(staged) => staged,
      Err(e) => {
        self.state = SessionState::Failed;
        return Err(e);
      }
    };

    self.state = SessionState::Processing;

    let report =
      match self.process_records(directory, &staged_input, codec, observer) {
        Ok(report) => report,
        Err(e) => {
          self.state = SessionState::Failed;

          let staging_path = staging_dir.keep();
          tracing::error!(
            "Anonymization stopped, staged input kept at \"{}\"",
            staging_path.display()
          );

          return Err(e);
        }
      };

    if report.cancelled {
      let staging_path = staging_dir.keep();
      tracing::info!(
        "Anonymization cancelled, unprocessed input kept at \"{}\"",
        staging_path.display()
      );

      self.state = SessionState::Done;

      return Ok(AnonymizeReport {
        retained_staging_path: Some(staging_path),
        ..report
      });
    }

    self.state = SessionState::Finalizing;
    tracing::info!("Removing staging directory");

    let staging_path = staging_dir.path().to_path_buf();
    if let Err(error) = staging_dir.close() {
      self.state = SessionState::Failed;
      return Err(AnonymizeSessionError::Finalizing {
        staging_path,
        error,
      });
    }

    observer.on_progress(1.0, "Anonymization complete");
    self.state = SessionState::Done;

    tracing::info!(
      "Anonymized {} records, skipped {}",
      report.written_files.len(),
      report.skipped_records.len()
    );

    Ok(report)
  }

  fn process_records<C: RecordCodec>(
    &mut self,
    directory: &Path,
    staged_input: &Path,
    codec: &C,
    observer: &mut dyn ProgressObserver,
  ) -> Result<AnonymizeReport, AnonymizeSessionError> {
    let files = list_record_files(staged_input).map_err(|e| {
      AnonymizeSessionError::Listing {
        staging_path: staged_input.to_path_buf(),
        details: e.to_string(),
      }
    })?;

    tracing::info!("Anonymizing {} records", files.len());

    let mut progress = ProgressCounter::new(
      self.config.rule_table.len().saturating_mul(files.len()),
    );

    let mut report = AnonymizeReport::default();

    for (index, file) in files.iter().enumerate() {
      if self.cancel_flag.load(Ordering::SeqCst) {
        report.cancelled = true;
        break;
      }

      let output_path = directory.join(self.config.output_file_name(index));
      let message =
        format!("Anonymizing record {} of {}", index + 1, files.len());

      let result = self.process_record(file, &output_path, codec, &mut |count| {
        observer.on_progress(progress.advance(count), &message);
      });

      match result {
        Ok(()) => report.written_files.push(output_path),

        Err(RecordError::Anonymize { error, .. }) if error.is_fatal() => {
          return Err(AnonymizeSessionError::Fatal {
            staging_path: staged_input.to_path_buf(),
            file: file.clone(),
            error,
          });
        }

        Err(e) => {
          tracing::warn!("Skipping record: {e}");
          report.skipped_records.push(e);
        }
      }
    }

    Ok(report)
  }

  fn process_record<C: RecordCodec>(
    &mut self,
    file: &Path,
    output_path: &Path,
    codec: &C,
    on_progress: &mut dyn FnMut(usize),
  ) -> Result<(), RecordError> {
    let bytes = fs::read(file).map_err(|error| RecordError::Read {
      path: file.to_path_buf(),
      error,
    })?;

    let mut data_set =
      codec.decode(&bytes).map_err(|e| RecordError::Decode {
        path: file.to_path_buf(),
        details: e.to_string(),
      })?;

    DataSetAnonymizer::new(&self.config, &mut self.uid_registry)
      .anonymize_with_progress(&mut data_set, &mut |_| on_progress(1))
      .map_err(|error| RecordError::Anonymize {
        path: file.to_path_buf(),
        error,
      })?;

    let output = codec.encode(&data_set).map_err(|e| RecordError::Encode {
      path: file.to_path_buf(),
      details: e.to_string(),
    })?;

    fs::write(output_path, output).map_err(|error| RecordError::Write {
      path: file.to_path_buf(),
      error,
    })?;

    if let Err(error) = fs::remove_file(file) {
      let _ = fs::remove_file(output_path);

      return Err(RecordError::RemoveStaged {
        path: file.to_path_buf(),
        error,
      });
    }

    tracing::debug!(
      "Anonymized \"{}\" to \"{}\"",
      file.display(),
      output_path.display()
    );

    Ok(())
  }
}

/// Moves a directory into a new staging directory created alongside it, and
/// creates an empty directory in its place. Returns the staging directory and
/// the staged location of the input.
///
fn stage_directory(
  directory: &Path,
) -> Result<(TempDir, PathBuf), AnonymizeSessionError> {
  let staging_error = |details: String| AnonymizeSessionError::Staging {
    input: directory.to_path_buf(),
    details,
  };

  if !directory.is_dir() {
    return Err(staging_error("Not a directory".to_string()));
  }

  let parent = match directory.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let staging_dir = tempfile::Builder::new()
    .prefix(".dcmdeid-staging-")
    .tempdir_in(parent)
    .map_err(|e| {
      staging_error(format!("Failed creating staging directory: {e}"))
    })?;

  let staged_input = staging_dir.path().join("input");

  fs::rename(directory, &staged_input)
    .map_err(|e| staging_error(format!("Failed moving input: {e}")))?;

  if let Err(e) = fs::create_dir(directory) {
    if let Err(rollback_error) = fs::rename(&staged_input, directory) {
      let staging_path = staging_dir.keep();

      return Err(staging_error(format!(
        "Failed recreating input directory: {e}, and failed restoring it from \
         \"{}\": {rollback_error}",
        staging_path.display()
      )));
    }

    return Err(staging_error(format!(
      "Failed recreating input directory: {e}"
    )));
  }

  Ok((staging_dir, staged_input))
}

#[cfg(all(test, feature = "json"))]
mod tests {
  use super::*;
  use crate::DicomJsonCodec;
  use crate::progress::NoProgress;

  const RECORD_A: &str = r#"{
    "00080050": { "vr": "SH", "Value": ["AC1"] },
    "00100010": { "vr": "PN", "Value": [{ "Alphabetic": "DOE^JOHN" }] },
    "00100040": { "vr": "CS", "Value": ["M"] },
    "00184000": { "vr": "LT", "Value": ["Comment"] },
    "0020000D": { "vr": "UI", "Value": ["1.2.826.1"] }
  }"#;

  const RECORD_B: &str = r#"{
    "00100010": { "vr": "PN", "Value": [{ "Alphabetic": "DOE^JOHN" }] },
    "0020000D": { "vr": "UI", "Value": ["1.2.826.1"] }
  }"#;

  const CLEAN_RULES: &str = "C,0010,0010\n";

  fn create_input(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("input");

    for (name, content) in files {
      let path = input.join(name);
      fs::create_dir_all(path.parent().unwrap()).unwrap();
      fs::write(path, content).unwrap();
    }

    (temp_dir, input)
  }

  fn read_output(path: &Path) -> dcmdeid_core::DataSet {
    DicomJsonCodec::default()
      .decode(&fs::read(path).unwrap())
      .unwrap()
  }

  fn staging_dirs(temp_dir: &TempDir) -> Vec<PathBuf> {
    fs::read_dir(temp_dir.path())
      .unwrap()
      .map(|entry| entry.unwrap().path())
      .filter(|path| {
        path
          .file_name()
          .is_some_and(|name| name.to_string_lossy().starts_with(".dcmdeid"))
      })
      .collect()
  }

  #[test]
  fn anonymize_directory_test() {
    let (temp_dir, input) =
      create_input(&[("a.json", RECORD_A), ("sub/b.json", RECORD_B)]);

    let mut session = AnonymizeSession::new(AnonymizeConfig::default());
    let report = session
      .anonymize_directory(&input, &DicomJsonCodec::default(), &mut NoProgress)
      .unwrap();

    assert_eq!(session.state(), SessionState::Done);
    assert!(report.skipped_records.is_empty());
    assert_eq!(
      report.written_files,
      vec![input.join("im00000"), input.join("im00001")]
    );

    let mut entries: Vec<_> = fs::read_dir(&input)
      .unwrap()
      .map(|entry| entry.unwrap().file_name())
      .collect();
    entries.sort();
    assert_eq!(entries, vec!["im00000", "im00001"]);

    let a = read_output(&input.join("im00000"));
    let b = read_output(&input.join("im00001"));

    let study_uid = dcmdeid_core::dictionary::STUDY_INSTANCE_UID.tag;
    assert_eq!(a.get_string(study_uid), b.get_string(study_uid));
    assert_ne!(a.get_string(study_uid), Ok("1.2.826.1"));

    assert!(staging_dirs(&temp_dir).is_empty());
    assert_eq!(session.into_uid_registry().len(), 1);
  }

  #[test]
  fn fault_tolerance_test() {
    let (_temp_dir, input) = create_input(&[
      ("1.json", RECORD_A),
      ("2.json", "not json"),
      ("3.json", RECORD_B),
    ]);

    let mut session = AnonymizeSession::new(AnonymizeConfig::default());
    let report = session
      .anonymize_directory(&input, &DicomJsonCodec::default(), &mut NoProgress)
      .unwrap();

    assert_eq!(
      report.written_files,
      vec![input.join("im00000"), input.join("im00002")]
    );
    assert_eq!(report.skipped_records.len(), 1);
    assert!(matches!(
      report.skipped_records[0],
      RecordError::Decode { .. }
    ));
    assert!(!input.join("im00001").exists());
  }

  #[test]
  fn fatal_error_test() {
    let (temp_dir, input) = create_input(&[("a.json", RECORD_A)]);

    let config = AnonymizeConfig::default()
      .rule_table(crate::RuleTable::from_csv(CLEAN_RULES).unwrap());

    let mut session = AnonymizeSession::new(config);
    let error = session
      .anonymize_directory(&input, &DicomJsonCodec::default(), &mut NoProgress)
      .unwrap_err();

    assert_eq!(session.state(), SessionState::Failed);

    let AnonymizeSessionError::Fatal { staging_path, .. } = error else {
      panic!("Unexpected error: {error}");
    };

    // The source record is kept in the staging directory
    assert!(staging_path.join("a.json").is_file());
    assert_eq!(staging_dirs(&temp_dir).len(), 1);
    assert_eq!(fs::read_dir(&input).unwrap().count(), 0);
  }

  #[test]
  fn cancel_test() {
    let (_temp_dir, input) =
      create_input(&[("a.json", RECORD_A), ("b.json", RECORD_B)]);

    let mut session = AnonymizeSession::new(AnonymizeConfig::default());
    let cancel_flag = session.cancel_flag();

    let mut observer =
      |_: f64, _: &str| cancel_flag.store(true, Ordering::SeqCst);

    let report = session
      .anonymize_directory(&input, &DicomJsonCodec::default(), &mut observer)
      .unwrap();

    assert!(report.cancelled);
    assert_eq!(report.written_files, vec![input.join("im00000")]);

    let staging_path = report.retained_staging_path.unwrap();
    assert!(staging_path.join("input/b.json").is_file());
  }

  #[test]
  fn progress_test() {
    let (_temp_dir, input) =
      create_input(&[("a.json", RECORD_A), ("b.json", RECORD_B)]);

    let mut fractions = vec![];
    let mut observer = |fraction: f64, _: &str| fractions.push(fraction);

    AnonymizeSession::new(AnonymizeConfig::default())
      .anonymize_directory(&input, &DicomJsonCodec::default(), &mut observer)
      .unwrap();

    assert!(!fractions.is_empty());
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
    assert!(fractions.iter().all(|f| (0.0..=1.0).contains(f)));
    assert_eq!(fractions.last(), Some(&1.0));
  }

  #[test]
  fn already_run_test() {
    let (_temp_dir, input) = create_input(&[("a.json", RECORD_B)]);

    let mut session = AnonymizeSession::new(AnonymizeConfig::default());
    let codec = DicomJsonCodec::default();

    session
      .anonymize_directory(&input, &codec, &mut NoProgress)
      .unwrap();

    assert!(matches!(
      session.anonymize_directory(&input, &codec, &mut NoProgress),
      Err(AnonymizeSessionError::AlreadyRun)
    ));
  }

  #[test]
  fn missing_directory_test() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut session = AnonymizeSession::new(AnonymizeConfig::default());
    let result = session.anonymize_directory(
      &temp_dir.path().join("missing"),
      &DicomJsonCodec::default(),
      &mut NoProgress,
    );

    assert!(matches!(result, Err(AnonymizeSessionError::Staging { .. })));
    assert_eq!(session.state(), SessionState::Failed);
  }
}
