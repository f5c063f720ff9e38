//! Integration tests for the cloudstatus binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".cloudstatus");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

/// Command with prerequisites pinned so results don't depend on the host.
fn cloudstatus(temp: &TempDir, aws: &str, azure: &str) -> Command {
    let mut cmd = Command::new(cargo_bin("cloudstatus"));
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env("CLOUDSTATUS_PREREQ_AWS", aws)
        .env("CLOUDSTATUS_PREREQ_AZURE", azure);
    cmd
}

const CONFIG: &str = r#"
status:
  providers:
    - key: aws-reporter
      provider_type: aws
      required: true
    - key: azure-reporter
      provider_type: Azure
      required: true
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("cloudstatus"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("status provider"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("cloudstatus"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_succeeds_when_prereqs_present() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    cloudstatus(&temp, "1", "1")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Completed"))
        .stdout(predicate::str::contains("Ready: aws, azure"));
    Ok(())
}

#[test]
fn check_fails_when_required_prereq_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    cloudstatus(&temp, "1", "0")
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Status: Error"))
        .stderr(predicate::str::contains("'azure' is missing its prerequisite"));
    Ok(())
}

#[test]
fn no_subcommand_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    cloudstatus(&temp, "1", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Completed"));
    Ok(())
}

#[test]
fn check_reports_schema_violations() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
status:
  providers:
    - key: k1
      provider_type: aws
      required: "yes"
"#,
    );
    cloudstatus(&temp, "1", "1")
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("required value is not a bool"));
    Ok(())
}

#[test]
fn check_without_config_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cloudstatus(&temp, "1", "1")
        .arg("check")
        .arg("--config")
        .arg(temp.path().join("absent.yml"))
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    let output = cloudstatus(&temp, "0", "1")
        .args(["check", "--json"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let body: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(body["report"]["status"], "ERROR");
    assert_eq!(body["report"]["required_missing_prereqs"], serde_json::json!(["aws"]));
    Ok(())
}

#[test]
fn providers_lists_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cloudstatus(&temp, "1", "0")
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("aws (prerequisite found)"))
        .stdout(predicate::str::contains("azure (prerequisite missing)"));
    Ok(())
}

#[test]
fn status_label_prints_label() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cloudstatus(&temp, "1", "1")
        .args(["status-label", "RUNNING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running"));
    Ok(())
}
