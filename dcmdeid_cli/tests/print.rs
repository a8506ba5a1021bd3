mod utils;

use predicates::prelude::*;
use utils::{create_temp_dir, dcmdeid_cli, get_stdout};

#[test]
fn print() {
  let temp_dir = create_temp_dir();
  let path = temp_dir.path().join("record.json");
  std::fs::write(
    &path,
    r#"{
      "00100010": { "vr": "PN", "Value": [{ "Alphabetic": "DOE^JOHN" }] },
      "00100040": { "vr": "CS", "Value": ["M"] }
    }"#,
  )
  .unwrap();

  let assert = dcmdeid_cli().arg("print").arg(&path).assert().success();

  assert_eq!(
    get_stdout(assert),
    "(0010,0010) Patient's Name PN \"DOE^JOHN\"\n\
     (0010,0040) Patient's Sex CS \"M\"\n"
  );
}

#[test]
fn print_invalid_json() {
  let temp_dir = create_temp_dir();
  let path = temp_dir.path().join("record.json");
  std::fs::write(&path, "[").unwrap();

  dcmdeid_cli()
    .arg("print")
    .arg(&path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("printing file"));
}

#[test]
fn print_missing_file() {
  dcmdeid_cli()
    .arg("print")
    .arg("missing.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("File error printing file"));
}
