use assert_cmd::cargo::{self};
use predicates::str::contains;
use std::io::Write;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("formui");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("formui"))
        .stdout(contains("--form"));
}

#[test]
fn rejects_unknown_document_extension() {
    let mut cmd = cargo::cargo_bin_cmd!("formui");
    cmd.args(["--form", "contact.ini"])
        .assert()
        .failure()
        .stderr(contains("unsupported form document extension"));
}

#[test]
fn rejects_document_with_unknown_editor() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temp file");
    write!(
        file,
        r#"{{"action":"http://localhost:3000/api","fields":[{{"id":"name","editor":"slider"}}]}}"#
    )
    .expect("write document");

    let mut cmd = cargo::cargo_bin_cmd!("formui");
    cmd.arg("--form")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(contains("slider"));
}
