//! CLI integration tests for the m5pack binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn default_run_packages_the_builtin_catalog() {
    let workdir = tempfile::tempdir().unwrap();
    let output = workdir.path().join("packages");

    Command::cargo_bin("m5pack")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated 5 packages"))
        .stdout(predicate::str::contains("com.m5stack.alarms-v1.0.0.m5app"))
        .stdout(predicate::str::contains("com.m5stack.contacts-v1.0.0.m5app"));

    for id in [
        "com.m5stack.contacts",
        "com.m5stack.tasks",
        "com.m5stack.voice",
        "com.m5stack.basicapps",
        "com.m5stack.alarms",
    ] {
        assert!(output.join(format!("{id}-v1.0.0.m5app")).is_file());
    }
}

#[test]
fn custom_catalog_file_is_honored() {
    let workdir = tempfile::tempdir().unwrap();
    let catalog = workdir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{
          "applications": [
            {
              "id": "com.example.notes",
              "name": "Quick Notes",
              "version": "2.1.0",
              "category": "productivity",
              "description": "Scratchpad for short notes.",
              "author": "Example",
              "email": "dev@example.com",
              "website": "https://example.com/notes",
              "source_files": ["quick_notes_app.h"],
              "memory": { "ram": 2048, "flash": 4096, "psram": 0 },
              "permissions": ["STORAGE_READ"],
              "tags": ["notes"],
              "factory_function": "createQuickNotesApp"
            }
          ]
        }"#,
    )
    .unwrap();
    let output = workdir.path().join("dist");

    Command::cargo_bin("m5pack")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated 1 packages"));

    assert!(output.join("com.example.notes-v2.1.0.m5app").is_file());
}

#[test]
fn missing_catalog_file_fails_with_nonzero_exit() {
    Command::cargo_bin("m5pack")
        .unwrap()
        .arg("--catalog")
        .arg("/no/such/catalog.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog file not found"));
}

#[test]
fn invalid_descriptor_aborts_the_run() {
    let workdir = tempfile::tempdir().unwrap();
    let catalog = workdir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{
          "applications": [
            {
              "id": "com.example.broken",
              "name": "Broken",
              "version": "not-a-version",
              "category": "misc",
              "description": "Bad version field.",
              "author": "Example",
              "email": "dev@example.com",
              "website": "https://example.com",
              "source_files": ["broken.h"],
              "memory": { "ram": 1024, "flash": 1024, "psram": 0 },
              "permissions": [],
              "tags": [],
              "factory_function": "createBroken"
            }
          ]
        }"#,
    )
    .unwrap();

    Command::cargo_bin("m5pack")
        .unwrap()
        .arg("--catalog")
        .arg(&catalog)
        .arg("--output")
        .arg(workdir.path().join("dist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid descriptor"));
}
