use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn srafetch() -> Command {
    Command::cargo_bin("srafetch").unwrap()
}

#[test]
fn requires_input_and_outdir() {
    srafetch()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn unreadable_manifest_exits_2() {
    let temp = TempDir::new().unwrap();
    srafetch()
        .arg("-i")
        .arg(temp.path().join("nope.csv"))
        .arg("-o")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("failed to read manifest"));
}

#[test]
fn missing_name_column_aborts_before_any_work() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("manifest.csv");
    std::fs::write(&manifest, "SRA_ID\nSRR001\n").unwrap();
    let outdir = temp.path().join("out");

    srafetch()
        .arg("-i")
        .arg(&manifest)
        .arg("-o")
        .arg(&outdir)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("SRA_NAME"));

    // aborted before the output layout was touched
    assert!(!outdir.exists());
}

#[test]
fn missing_tool_exits_3() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("manifest.csv");
    std::fs::write(&manifest, "SRA_ID,SRA_NAME\nSRR001,SampleA\n").unwrap();
    let empty_path = TempDir::new().unwrap();

    srafetch()
        .arg("-i")
        .arg(&manifest)
        .arg("-o")
        .arg(temp.path().join("out"))
        .env("PATH", empty_path.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("parallel-fastq-dump"));
}
