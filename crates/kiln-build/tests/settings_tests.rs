//! Build-space loading integration tests

use kiln_build::Settings;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch_project(root: &Path, name: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "program Demo;").unwrap();
}

#[test]
fn load_merges_primary_and_local_manifests() {
    let temp = TempDir::new().unwrap();
    touch_project(temp.path(), "core/core.dproj");
    touch_project(temp.path(), "app/app.dproj");
    fs::write(
        temp.path().join("kiln.json"),
        r#"{ "projects": ["core/core.dproj"] }"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("kiln.local.json"),
        "{\n  // developer override\n  \"projects\": [\"app/app.dproj\", \"core/core.dproj\"]\n}",
    )
    .unwrap();

    let settings = Settings::load(temp.path(), "master").unwrap();

    assert_eq!(settings.projects.len(), 2);
    assert_eq!(settings.catalog.len(), 4);
}

#[test]
fn load_without_manifests_yields_an_empty_project_set() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::load(temp.path(), "master").unwrap();
    assert!(settings.projects.is_empty());
}

#[test]
fn load_fails_on_a_malformed_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kiln.json"), "{ not json").unwrap();

    let err = Settings::load(temp.path(), "master").unwrap_err();

    assert!(err.to_string().contains("kiln.json"));
}
