mod utils;

use predicates::prelude::*;
use utils::{create_temp_dir, dcmdeid_cli, read_json, write_input_dir};

const RECORD: &str = r#"{
  "00080050": { "vr": "SH", "Value": ["AC1"] },
  "00100010": { "vr": "PN", "Value": [{ "Alphabetic": "DOE^JOHN" }] },
  "00100020": { "vr": "LO", "Value": ["MRN-1"] },
  "00100040": { "vr": "CS", "Value": ["M"] },
  "00184000": { "vr": "LT", "Value": ["Patient moved"] },
  "0020000D": { "vr": "UI", "Value": ["1.2.826.0.1.1"] }
}"#;

#[test]
fn anonymize_directory() {
  let temp_dir = create_temp_dir();
  let input = write_input_dir(
    temp_dir.path(),
    &[("a.json", RECORD), ("b/c.json", RECORD), ("d.json", "{")],
  );

  dcmdeid_cli()
    .arg("anonymize")
    .arg(&input)
    .assert()
    .success()
    .stdout(predicate::str::contains("Anonymized 2 records, skipped 1"));

  assert!(!input.join("im00002").exists());

  let record = read_json(&input.join("im00000"));

  assert_eq!(
    record["00100010"]["Value"][0]["Alphabetic"],
    "ANONYMIZED^ANONYMIZED"
  );
  assert_eq!(record["00100040"]["Value"][0], "O");
  assert_eq!(record["00080050"]["Value"][0], "ANONYMIZED");
  assert!(record.get("00184000").is_none());

  let study_uid = record["0020000D"]["Value"][0].as_str().unwrap();
  assert_ne!(study_uid, "1.2.826.0.1.1");

  let other = read_json(&input.join("im00001"));
  assert_eq!(other["0020000D"]["Value"][0], study_uid);
}

#[test]
fn anonymize_with_options() {
  let temp_dir = create_temp_dir();
  let input = write_input_dir(temp_dir.path(), &[("a.json", RECORD)]);

  dcmdeid_cli()
    .arg("anonymize")
    .arg(&input)
    .arg("--exception")
    .arg("00100020=SUBJECT-1")
    .arg("--keep")
    .arg("00080050")
    .arg("--output-prefix")
    .arg("record_")
    .arg("--output-index-width")
    .arg("2")
    .assert()
    .success();

  let record = read_json(&input.join("record_00"));

  assert_eq!(record["00100020"]["Value"][0], "SUBJECT-1");
  assert_eq!(record["00080050"]["Value"][0], "AC1");
}

#[test]
fn anonymize_with_uid_map() {
  let temp_dir = create_temp_dir();
  let uid_map = temp_dir.path().join("uid_map.json");
  std::fs::write(&uid_map, r#"{ "1.2.826.0.1.1": "2.25.1234" }"#).unwrap();

  let input = write_input_dir(temp_dir.path(), &[("a.json", RECORD)]);

  dcmdeid_cli()
    .arg("anonymize")
    .arg(&input)
    .arg("--uid-map")
    .arg(&uid_map)
    .assert()
    .success();

  let record = read_json(&input.join("im00000"));
  assert_eq!(record["0020000D"]["Value"][0], "2.25.1234");

  assert_eq!(read_json(&uid_map)["1.2.826.0.1.1"], "2.25.1234");
}

#[test]
fn anonymize_to_archive() {
  let temp_dir = create_temp_dir();
  let input =
    write_input_dir(temp_dir.path(), &[("a.json", RECORD), ("b.json", RECORD)]);
  let archive = temp_dir.path().join("output.zip");

  dcmdeid_cli()
    .arg("anonymize")
    .arg(&input)
    .arg("--archive")
    .arg(&archive)
    .assert()
    .success()
    .stdout(predicate::str::contains("Wrote archive"));

  let zip = std::fs::read(&archive).unwrap();
  assert!(zip.starts_with(b"PK\x03\x04"));
  assert!(zip.windows(7).any(|w| w == b"im00001"));
}

#[test]
fn archive_inside_directory_is_rejected() {
  let temp_dir = create_temp_dir();
  let input = write_input_dir(temp_dir.path(), &[("a.json", RECORD)]);

  dcmdeid_cli()
    .arg("anonymize")
    .arg(&input)
    .arg("--archive")
    .arg(input.join("output.zip"))
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "The archive can't be inside the anonymized directory",
    ));

  // The input is untouched
  assert!(input.join("a.json").is_file());
}

#[test]
fn invalid_rule_table() {
  let temp_dir = create_temp_dir();
  let rule_table = temp_dir.path().join("rules.csv");
  std::fs::write(&rule_table, "# Rules\nQ,0010,0010\n").unwrap();

  let input = write_input_dir(temp_dir.path(), &[("a.json", RECORD)]);

  dcmdeid_cli()
    .arg("anonymize")
    .arg(&input)
    .arg("--rule-table")
    .arg(&rule_table)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Rule table error"));

  assert!(input.join("a.json").is_file());
}

#[test]
fn invalid_exception_argument() {
  dcmdeid_cli()
    .arg("anonymize")
    .arg("input")
    .arg("--exception")
    .arg("0010=X")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Exception tag '0010' is invalid"));
}

#[test]
fn anonymize_keep_retired() {
  let retired_record = r#"{
    "00080060": { "vr": "CS", "Value": ["MR"] },
    "00281214": { "vr": "UI", "Value": ["1.2.826.0.1.9"] }
  }"#;

  let temp_dir = create_temp_dir();
  let input = write_input_dir(
    temp_dir.path(),
    &[("a.json", retired_record), ("b.json", retired_record)],
  );

  dcmdeid_cli().arg("anonymize").arg(&input).assert().success();

  let record = read_json(&input.join("im00000"));
  assert_eq!(record["00080060"]["Value"][0], "MR");
  assert!(record.get("00281214").is_none());

  let temp_dir = create_temp_dir();
  let input = write_input_dir(temp_dir.path(), &[("a.json", retired_record)]);

  dcmdeid_cli()
    .arg("anonymize")
    .arg(&input)
    .arg("--keep-retired")
    .assert()
    .success();

  let record = read_json(&input.join("im00000"));
  assert_ne!(record["00281214"]["Value"][0], "1.2.826.0.1.9");
  assert!(record["00281214"]["Value"][0].is_string());
}
