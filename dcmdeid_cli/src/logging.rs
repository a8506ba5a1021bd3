//! Log output to stderr using `tracing-subscriber`.

use clap::{Args, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Args)]
pub struct LoggingArgs {
  #[arg(
    long,
    short,
    global = true,
    action = clap::ArgAction::Count,
    help = "Increase the log level. Specify once for debug output and twice \
      for trace output. Ignored when the RUST_LOG environment variable is set."
  )]
  verbose: u8,

  #[arg(
    long,
    short,
    global = true,
    default_value_t = false,
    help = "Only log errors. Ignored when the RUST_LOG environment variable is \
      set."
  )]
  quiet: bool,

  #[arg(
    long,
    global = true,
    help = "The format of log output.",
    default_value_t = LogFormat::Text
  )]
  log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum LogFormat {
  Text,
  Json,
}

impl core::fmt::Display for LogFormat {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::Text => write!(f, "text"),
      Self::Json => write!(f, "json"),
    }
  }
}

impl LoggingArgs {
  fn default_directive(&self) -> &'static str {
    if self.quiet {
      return "error";
    }

    match self.verbose {
      0 => "warn,dcmdeid_anonymize=info",
      1 => "debug",
      _ => "trace",
    }
  }
}

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over
/// the log level arguments.
///
pub fn init(args: &LoggingArgs) {
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(args.default_directive()));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .with_target(false);

  let _ = match args.log_format {
    LogFormat::Text => builder.try_init(),
    LogFormat::Json => builder.json().try_init(),
  };
}
