use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use dcmdeid::anonymize::{DicomJsonCodec, RecordCodec};
use dcmdeid::core::DcmdeidError;

use crate::utils::FileError;

pub const ABOUT: &str = "Prints the content of a DICOM JSON record";

#[derive(Args)]
pub struct PrintArgs {
  #[clap(help = "The name of the DICOM JSON file to print the content of.")]
  input_filename: PathBuf,

  #[arg(
    long,
    short,
    help = "The maximum width in characters of the printed output.",
    default_value_t = 80,
    value_parser = clap::value_parser!(u32).range(0..10000),
  )]
  max_width: u32,
}

pub fn run(args: &PrintArgs) -> Result<(), ()> {
  let task_description =
    format!("printing file \"{}\"", args.input_filename.display());

  let bytes = match std::fs::read(&args.input_filename) {
    Ok(bytes) => bytes,
    Err(e) => {
      FileError::new("Reading file", &args.input_filename, e)
        .print(&task_description);
      return Err(());
    }
  };

  let data_set = match DicomJsonCodec::default().decode(&bytes) {
    Ok(data_set) => data_set,
    Err(e) => {
      e.print(&task_description);
      return Err(());
    }
  };

  let mut stdout = std::io::stdout().lock();
  let mut write_result = Ok(());

  data_set.to_lines(args.max_width as usize, &mut |line| {
    if write_result.is_ok() {
      write_result = writeln!(stdout, "{line}");
    }
  });

  write_result.map_err(|e| {
    FileError::new("Writing to stdout", &args.input_filename, e)
      .print(&task_description);
  })
}
