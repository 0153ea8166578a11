//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kiln() -> Command {
    let mut cmd = Command::cargo_bin("kiln").unwrap();
    cmd.env_remove("BRANCH_NAME");
    cmd
}

#[test]
fn compile_succeeds_without_manifests() {
    let temp = TempDir::new().unwrap();
    kiln()
        .arg("compile")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success();
}

#[test]
fn deploy_runs_the_full_dependency_chain() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("app")).unwrap();
    fs::write(temp.path().join("app/demo.dproj"), "program Demo;").unwrap();
    fs::write(
        temp.path().join("kiln.json"),
        "{\n  // demo project\n  \"projects\": [\"app/demo.dproj\"]\n}",
    )
    .unwrap();

    kiln()
        .arg("deploy")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success();
}

#[test]
fn unknown_variant_exits_nonzero_and_names_it() {
    let temp = TempDir::new().unwrap();
    kiln()
        .args(["compile", "--variant", "Release_arm", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Release_arm"));
}

#[test]
fn malformed_manifest_exits_nonzero_and_names_the_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kiln.json"), "{ not json").unwrap();

    kiln()
        .args(["set-build-info", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("kiln.json"));
}

#[test]
fn unknown_operation_is_a_usage_error() {
    kiln().arg("package").assert().failure();
}
