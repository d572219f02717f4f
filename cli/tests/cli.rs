#[macro_use]
mod common;

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::Command; // Run programs

const RUN: [&str; 7] = [
    "run",
    "default",
    "bucket/in",
    "bucket/out/",
    "bucket/err/",
    "bucket/logs",
    "deploy-key",
];

#[test]
fn dry_run_prints_the_job_flow() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("sparkjob")?
        .args(RUN)
        .args(["--dry-run", "--region", "eu-west-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Region: eu-west-1"))
        .stdout(predicate::str::contains("Install Spark"))
        .stdout(predicate::str::contains("Install Hive"))
        .stdout(predicate::str::contains("Run SchemaDeriveJob"));

    Ok(())
}

#[test]
fn dry_run_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::cargo_bin("sparkjob")?
        .args(RUN)
        .args(["--dry-run", "--json", "--region", "USWest2"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["region"], "us-west-2");
    assert_eq!(json["job_flow"]["log_uri"], "s3://bucket/logs");
    assert_eq!(json["job_flow"]["ec2_key_name"], "deploy-key");

    let steps = json["job_flow"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    let args = steps[1]["args"].as_array().unwrap();
    assert_eq!(args.last().unwrap(), "s3n://bucket/in");
    assert_eq!(args[args.len() - 2], "s3n://bucket/out/");
    assert_eq!(args[args.len() - 4], "s3n://bucket/err/");

    Ok(())
}

#[test]
fn region_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("sparkjob")?
        .args(RUN)
        .arg("--dry-run")
        .env("SPARKJOB_REGION", "sa-east-1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Region: sa-east-1"));

    Ok(())
}

#[test]
fn missing_trailing_slash_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("sparkjob")?
        .args(["run", "p", "b/in", "b/out", "b/err", "b/logs", "key"])
        .args(["--dry-run", "--region", "us-east-1"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("s3n://b/out"))
        .stderr(predicate::str::contains(
            "output path \"b/out\" has no trailing slash",
        ))
        .stderr(predicate::str::contains(
            "errors path \"b/err\" has no trailing slash",
        ));

    Ok(())
}

#[test]
fn trailing_slashes_are_quiet() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("sparkjob")?
        .args(RUN)
        .args(["--dry-run", "--region", "us-east-1"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("trailing slash").not());

    Ok(())
}

mod usage {
    use assert_cmd::prelude::*;

    cli_test!(no_subcommand: []; should fail with "Usage");
    cli_test!(run_without_paths: ["run", "default"]; should fail with "<INPUT>");
    cli_test!(json_needs_dry_run: [
        "run", "p", "b/in", "b/out/", "b/err/", "b/logs", "key", "--json"
    ]; should fail with "--dry-run");
    cli_test!(upload_without_bucket: ["upload", "default"]; should fail with "<BUCKET>");
}

mod regions {
    use assert_cmd::prelude::*;

    cli_test!(unknown_region: [
        "run", "p", "b/in", "b/out/", "b/err/", "b/logs", "key", "--dry-run", "--region", "mars-1"
    ]; should fail with "mars-1 is not a known AWS location");
    cli_test!(unknown_region_lists_choices: [
        "run", "p", "b/in", "b/out/", "b/err/", "b/logs", "key", "--dry-run", "--region", "mars-1"
    ]; should fail with "  *ap-southeast-2");
    cli_test!(SPARKJOB_REGION="CNNorth1";
          token_without_region: [
        "run", "p", "b/in", "b/out/", "b/err/", "b/logs", "key", "--dry-run"
    ]; should fail with "no AWS region is known for location CNNorth1");
}

mod sbt {
    use assert_cmd::prelude::*;

    cli_test!(SPARKJOB_PROJECT_DIR="/nonexistent/sparkjob";
          test_outside_a_project: ["test"]; should fail with "sbt test failed");
    cli_test!(package_outside_a_project: [
        "package", "--project-dir", "/nonexistent/sparkjob"
    ]; should fail with "sbt assembly failed");
}
