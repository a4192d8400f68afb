//! End-to-end tests for the variantgen binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use variantgen::registry::{REGISTRY, TEMPLATE_PATH};

/// Project root with templates and destination directories laid out
/// the way the binary expects them relative to its working directory.
fn project_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join(TEMPLATE_PATH);
    fs::create_dir_all(&templates).unwrap();
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_PATH);
    for entry in &REGISTRY {
        let name = format!("{}.template", entry.template);
        fs::copy(source.join(&name), templates.join(&name)).unwrap();
        fs::create_dir_all(dir.path().join(entry.output_dir)).unwrap();
    }
    dir
}

#[test]
fn test_cli_generates_all_sources() {
    let root = project_root();

    let mut cmd = Command::cargo_bin("variantgen").unwrap();
    cmd.current_dir(root.path()).assert().success();

    for entry in &REGISTRY {
        for arity in 1..=8u8 {
            let name = variantgen::registry::output_file_name(entry.template, arity);
            assert!(
                root.path().join(entry.output_dir).join(&name).exists(),
                "missing {name}"
            );
        }
    }
}

#[test]
fn test_cli_is_idempotent() {
    let root = project_root();

    Command::cargo_bin("variantgen")
        .unwrap()
        .current_dir(root.path())
        .assert()
        .success();
    let before = fs::read_to_string(root.path().join("src/com/vladris/poke/Variant5.java")).unwrap();

    Command::cargo_bin("variantgen")
        .unwrap()
        .current_dir(root.path())
        .assert()
        .success();
    let after = fs::read_to_string(root.path().join("src/com/vladris/poke/Variant5.java")).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_cli_rejects_arguments() {
    let root = project_root();

    Command::cargo_bin("variantgen")
        .unwrap()
        .current_dir(root.path())
        .arg("--output-dir=elsewhere")
        .assert()
        .failure();

    // nothing generated by the rejected invocation
    assert!(
        !root
            .path()
            .join("src/com/vladris/poke/Variant1.java")
            .exists()
    );
}

#[test]
fn test_cli_fails_without_templates() {
    let empty = TempDir::new().unwrap();

    Command::cargo_bin("variantgen")
        .unwrap()
        .current_dir(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("template load error"));
}
