use std::path::{Path, PathBuf};

use assert_cmd::{Command, assert::Assert, cargo::cargo_bin_cmd};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn dcmdeid_cli() -> Command {
  let mut cmd = cargo_bin_cmd!("dcmdeid");

  // Keep stderr deterministic regardless of the caller's environment
  cmd.env_remove("RUST_LOG");

  cmd
}

fn temp_dir() -> PathBuf {
  if let Ok(t) = std::env::var("RUNNER_TEMP") {
    PathBuf::from(t)
  } else {
    std::env::temp_dir()
  }
}

#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
  TempDir::new_in(temp_dir()).unwrap()
}

/// Writes records into a new `input` directory inside the given directory.
///
#[allow(dead_code)]
pub fn write_input_dir(parent: &Path, records: &[(&str, &str)]) -> PathBuf {
  let input = parent.join("input");

  for (name, content) in records {
    let path = input.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
  }

  input
}

#[allow(dead_code)]
pub fn get_stdout(assert: Assert) -> String {
  String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
  serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
