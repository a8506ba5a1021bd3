//! Entry point for dcmdeid's CLI tool.

mod args;
mod commands;
mod logging;
mod utils;
mod zip_archive_writer;

use clap::{Parser, Subcommand};

use commands::{anonymize_command, print_command};

#[derive(Parser)]
#[command(
  name = "dcmdeid",
  bin_name = "dcmdeid",
  version = env!("CARGO_PKG_VERSION"),
  about = "dcmdeid is a CLI tool for de-identifying DICOM data sets",
  max_term_width = 80
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[command(flatten)]
  logging: logging::LoggingArgs,
}

#[derive(Subcommand)]
enum Commands {
  #[command(about = anonymize_command::ABOUT)]
  Anonymize(anonymize_command::AnonymizeArgs),

  #[command(about = print_command::ABOUT)]
  Print(print_command::PrintArgs),
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  logging::init(&cli.logging);

  match cli.command {
    Commands::Anonymize(args) => anonymize_command::run(&args),
    Commands::Print(args) => print_command::run(&args),
  }
}
