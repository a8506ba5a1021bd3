use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::Args;

use dcmdeid::anonymize::*;
use dcmdeid::core::{DataElementTag, DcmdeidError};
use dcmdeid::json::DicomJsonConfig;

use crate::args::{validate_data_element_tag, validate_date, validate_exception};
use crate::utils::FileError;
use crate::zip_archive_writer::{ZipArchiveWriter, ZipCompressionMethod};

pub const ABOUT: &str = "De-identifies a directory of DICOM JSON records in \
  place, replacing its content with anonymized records";

#[derive(Args)]
pub struct AnonymizeArgs {
  #[clap(
    help = "The directory of DICOM JSON records to anonymize. Files in nested \
      directories are included. The directory's content is replaced by the \
      anonymized records."
  )]
  directory: PathBuf,

  #[arg(
    long = "exception",
    help_heading = "Rules",
    help = "A literal value to use for a data element in every record, in the \
      form GGGGEEEE=VALUE. This overrides the rule table, and the data \
      element is added to records that don't have it. Specify this argument \
      multiple times to set more than one value.",
    value_parser = validate_exception,
  )]
  exceptions: Vec<(DataElementTag, String)>,

  #[arg(
    long = "keep",
    help_heading = "Rules",
    help = "The tag of a data element to leave unchanged, removing it from the \
      rule table. Specify this argument multiple times to keep more than one \
      data element.",
    value_parser = validate_data_element_tag,
  )]
  keep_tags: Vec<DataElementTag>,

  #[arg(
    long = "preserve-private-tag",
    help_heading = "Rules",
    help = "The tag of a private data element to keep. All other private data \
      elements are removed.",
    value_parser = validate_data_element_tag,
  )]
  preserved_private_tags: Vec<DataElementTag>,

  #[arg(
    long = "shift-date",
    help_heading = "Rules",
    help = "The tag of a DA data element whose dates are shifted so they're \
      relative to 1900-01-01 instead of to the reference date, rather than \
      being replaced.",
    value_parser = validate_data_element_tag,
  )]
  shift_date_tags: Vec<DataElementTag>,

  #[arg(
    long,
    help_heading = "Rules",
    help = "The date, as YYYYMMDD, that shifted dates are made relative to.",
    value_parser = validate_date,
  )]
  reference_date: Option<chrono::NaiveDate>,

  #[arg(
    long,
    help_heading = "Rules",
    help = "A CSV file to use instead of the built-in rule table. Each line \
      has the form ACTION,GGGG,EEEE. Lines starting with '#' are ignored."
  )]
  rule_table: Option<PathBuf>,

  #[arg(
    long,
    help_heading = "Rules",
    help = "Whether to keep group length data elements.",
    default_value_t = false
  )]
  keep_group_lengths: bool,

  #[arg(
    long,
    help_heading = "Rules",
    help = "Whether to keep data elements that have been retired from the \
      DICOM standard.",
    default_value_t = false
  )]
  keep_retired: bool,

  #[arg(
    long,
    help_heading = "UIDs",
    help = "A JSON file mapping original UIDs to replacement UIDs. When it \
      exists, its mappings are used so that UIDs stay consistent with earlier \
      runs. It's updated with any new mappings afterwards."
  )]
  uid_map: Option<PathBuf>,

  #[arg(
    long,
    help_heading = "Output",
    help = "The prefix for the names of anonymized records.",
    default_value = "im"
  )]
  output_prefix: String,

  #[arg(
    long,
    help_heading = "Output",
    help = "The number of digits in the names of anonymized records.",
    default_value_t = 5
  )]
  output_index_width: usize,

  #[arg(
    long,
    help_heading = "Output",
    help = "Whether to format the output DICOM JSON for readability.",
    default_value_t = false
  )]
  pretty_print: bool,

  #[arg(
    long,
    help_heading = "Archive",
    help = "A ZIP file to write the anonymized records into once anonymization \
      is complete. It must not be inside the anonymized directory."
  )]
  archive: Option<PathBuf>,

  #[arg(
    long,
    help_heading = "Archive",
    help = "The compression method to use for the ZIP file.",
    default_value_t = ZipCompressionMethod::Deflate
  )]
  zip_compression_method: ZipCompressionMethod,
}

pub fn run(args: &AnonymizeArgs) -> Result<(), ()> {
  let task_description =
    format!("anonymizing \"{}\"", args.directory.display());

  if let Some(archive) = &args.archive {
    if is_inside_directory(archive, &args.directory) {
      FileError::new(
        "Checking archive path",
        archive,
        "The archive can't be inside the anonymized directory",
      )
      .print(&task_description);
      return Err(());
    }
  }

  let config = match build_config(args) {
    Ok(config) => config,
    Err(e) => {
      e.print(&task_description);
      return Err(());
    }
  };

  let uid_registry = match &args.uid_map {
    Some(path) if path.exists() => match read_uid_map(path) {
      Ok(uid_registry) => uid_registry,
      Err(e) => {
        e.print(&task_description);
        return Err(());
      }
    },
    _ => UidRegistry::new(),
  };

  let codec = DicomJsonCodec::new(
    DicomJsonConfig::default().pretty_print(args.pretty_print),
  );

  let mut reporter = ProgressReporter::default();
  let mut session = AnonymizeSession::with_uid_registry(config, uid_registry);

  let result = {
    let anonymize_end = if args.archive.is_some() { 0.5 } else { 1.0 };
    let mut progress = ScaledProgress::new(&mut reporter, 0.0, anonymize_end);

    session.anonymize_directory(&args.directory, &codec, &mut progress)
  };

  // Mappings are saved even when the session fails, as records written before
  // the failure use them
  if let Some(path) = &args.uid_map {
    if let Err(e) = write_uid_map(path, session.uid_registry()) {
      e.print(&task_description);
      return Err(());
    }
  }

  let report = match result {
    Ok(report) => report,
    Err(e) => {
      e.print(&task_description);
      return Err(());
    }
  };

  println!(
    "Anonymized {} records, skipped {}",
    report.written_files.len(),
    report.skipped_records.len()
  );

  for error in report.skipped_records.iter() {
    error.print(&task_description);
  }

  if let Some(archive) = &args.archive {
    let mut progress = ScaledProgress::new(&mut reporter, 0.5, 1.0);
    write_archive(args, archive, &mut progress)?;

    println!("Wrote archive \"{}\"", archive.display());
  }

  Ok(())
}

/// Either of the errors that can occur loading the anonymization config.
///
enum ConfigError {
  File(FileError),
  RuleTable(RuleTableError),
}

impl DcmdeidError for ConfigError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      Self::File(e) => e.to_lines(task_description),
      Self::RuleTable(e) => e.to_lines(task_description),
    }
  }
}

fn build_config(args: &AnonymizeArgs) -> Result<AnonymizeConfig, ConfigError> {
  let mut config = AnonymizeConfig::default()
    .remove_group_lengths(!args.keep_group_lengths)
    .remove_retired(!args.keep_retired)
    .output_prefix(&args.output_prefix)
    .output_index_width(args.output_index_width);

  if let Some(path) = &args.rule_table {
    let csv = std::fs::read_to_string(path).map_err(|e| {
      ConfigError::File(FileError::new("Reading rule table", path, e))
    })?;

    let rule_table =
      RuleTable::from_csv(&csv).map_err(ConfigError::RuleTable)?;

    config = config.rule_table(rule_table);
  }

  for tag in args.keep_tags.iter() {
    config = config.keep_tag(*tag);
  }

  for (tag, value) in args.exceptions.iter() {
    config = config.exception(*tag, value);
  }

  for tag in args.preserved_private_tags.iter() {
    config = config.preserve_private_tag(*tag);
  }

  for tag in args.shift_date_tags.iter() {
    config = config.shift_date(*tag);
  }

  if let Some(reference_date) = args.reference_date {
    config = config.reference_date(reference_date);
  }

  Ok(config)
}

fn read_uid_map(path: &Path) -> Result<UidRegistry, FileError> {
  let json = std::fs::read_to_string(path)
    .map_err(|e| FileError::new("Reading UID map", path, e))?;

  let mappings: BTreeMap<String, String> = serde_json::from_str(&json)
    .map_err(|e| FileError::new("Parsing UID map", path, e))?;

  tracing::info!("Loaded {} UID mappings", mappings.len());

  Ok(UidRegistry::from_mappings(mappings))
}

fn write_uid_map(
  path: &Path,
  uid_registry: &UidRegistry,
) -> Result<(), FileError> {
  let mappings: BTreeMap<&str, &str> =
    uid_registry.mappings().into_iter().collect();

  let json = serde_json::to_string_pretty(&mappings)
    .map_err(|e| FileError::new("Serializing UID map", path, e))?;

  std::fs::write(path, json)
    .map_err(|e| FileError::new("Writing UID map", path, e))
}

fn write_archive(
  args: &AnonymizeArgs,
  archive: &Path,
  progress: &mut dyn ProgressObserver,
) -> Result<(), ()> {
  let task_description = format!("writing archive \"{}\"", archive.display());

  let mut writer =
    ZipArchiveWriter::create(archive, args.zip_compression_method).map_err(
      |e| {
        FileError::new("Creating archive", archive, e).print(&task_description)
      },
    )?;

  let count = export_archive(&args.directory, &mut writer, progress)
    .map_err(|e| e.print(&task_description))?;

  writer.finish().map_err(|e| {
    FileError::new("Finishing archive", archive, e).print(&task_description)
  })?;

  tracing::info!("Archived {count} records");

  Ok(())
}

fn is_inside_directory(path: &Path, directory: &Path) -> bool {
  let Ok(directory) = directory.canonicalize() else {
    return false;
  };

  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  parent
    .canonicalize()
    .is_ok_and(|parent| parent.starts_with(directory))
}

/// Logs progress each time it passes another tenth of the total.
///
#[derive(Default)]
struct ProgressReporter {
  last_decile: Option<u32>,
}

impl ProgressObserver for ProgressReporter {
  fn on_progress(&mut self, fraction: f64, message: &str) {
    let decile = (fraction * 10.0).floor() as u32;

    if self.last_decile.is_none_or(|last| decile > last) {
      self.last_decile = Some(decile);
      tracing::info!("{:.0}% complete, {message}", fraction * 100.0);
    }
  }
}
