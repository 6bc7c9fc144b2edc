//! Integration tests for the wikilint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VALID_PAGE: &str = r#"---
title: "Build Setup"
description: "How to build the app"
category: development
audience: developers
status: active
difficulty: beginner
last_updated: 2024-05-01
tags: [ios, build]
---

[Home](/) > [Development](/Development/) > [Ios](/Development/ios/) > Build Setup

# Build Setup

Run the build.
"#;

const STALE_BREADCRUMB: &str = r#"---
title: "Style Guide"
description: "Writing rules"
category: meta
audience: all
status: active
---

[Home](/) > [Meta](/Meta/) > ---

# Style Guide
"#;

const WARNINGS_ONLY: &str = r#"---
title: "Overview"
description: "Reference overview"
category: technical-reference
audience: developers
status: draft
---
[Home](/) > [Technical Reference](/Technical-Reference/) > Overview
# Overview
"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn docs_tree(pages: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("Development")).unwrap();
    for (relative, content) in pages {
        write(temp.path(), relative, content);
    }
    temp
}

fn wikilint(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("wikilint"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    wikilint(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validate every page of a documentation tree"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    wikilint(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_valid_tree_exits_zero_and_saves_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[
        ("Development/ios/build-setup.md", VALID_PAGE),
        ("Development/README.md", "not validated"),
        ("notes.md", "outside the included directories"),
    ]);

    wikilint(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 markdown files"))
        .stdout(predicate::str::contains("Total files validated: 1"))
        .stdout(predicate::str::contains("All 1 files are valid"));

    let report = fs::read_to_string(temp.path().join("validation-report.txt"))?;
    assert!(report.starts_with("====="));
    assert!(report.lines().nth(3).unwrap().starts_with("Generated: "));
    assert!(report.contains("Documentation Migration Validation Report"));
    assert!(!report.contains('\u{1b}'));
    Ok(())
}

#[test]
fn no_subcommand_checks_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[("Development/ios/build-setup.md", VALID_PAGE)]);
    wikilint(temp.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid files: 1"));
    Ok(())
}

#[test]
fn check_invalid_tree_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[
        ("Development/ios/build-setup.md", VALID_PAGE),
        ("Meta/style-guide.md", STALE_BREADCRUMB),
    ]);

    wikilint(temp.path())
        .args(["check", "--no-save"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Files with Issues:"))
        .stdout(predicate::str::contains("Meta/style-guide.md"))
        .stdout(predicate::str::contains("Breadcrumb ends with '> ---'"))
        .stderr(predicate::str::contains("1 of 2 files have errors"));

    assert!(!temp.path().join("validation-report.txt").exists());
    Ok(())
}

#[test]
fn check_outside_docs_root_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    wikilint(temp.path())
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a documentation repository root"));
    Ok(())
}

#[test]
fn check_accepts_root_argument() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(
        temp.path(),
        "wiki/Development/ios/build-setup.md",
        VALID_PAGE,
    );

    wikilint(temp.path())
        .args(["check", "wiki", "--output", "reports/latest.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"));

    assert!(temp.path().join("reports/latest.txt").exists());
    assert!(!temp.path().join("wiki/validation-report.txt").exists());
    Ok(())
}

#[test]
fn strict_fails_on_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[("Technical-Reference/overview.md", WARNINGS_ONLY)]);

    wikilint(temp.path())
        .args(["check", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files with Warnings (No Errors):"));

    wikilint(temp.path())
        .args(["check", "--no-save", "--strict"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn quiet_prints_only_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[("Development/ios/build-setup.md", VALID_PAGE)]);
    wikilint(temp.path())
        .args(["check", "--no-save", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 files are valid"))
        .stdout(predicate::str::contains("Summary:").not());
    Ok(())
}

#[test]
fn json_output_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[
        ("Development/ios/build-setup.md", VALID_PAGE),
        ("Meta/style-guide.md", STALE_BREADCRUMB),
    ]);

    let output = wikilint(temp.path())
        .args(["check", "--format", "json", "--no-save"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["summary"]["total"], 2);
    assert_eq!(parsed["summary"]["invalid"], 1);
    assert_eq!(parsed["files"][1]["path"], "Meta/style-guide.md");
    Ok(())
}

#[test]
fn sarif_output_lists_rules() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[("Meta/style-guide.md", STALE_BREADCRUMB)]);

    let output = wikilint(temp.path())
        .args(["check", "--format", "sarif", "--no-save"])
        .output()?;

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["version"], "2.1.0");
    let rules = parsed["runs"][0]["tool"]["driver"]["rules"]
        .as_array()
        .unwrap();
    assert!(rules.iter().any(|r| r["id"] == "breadcrumb"));
    Ok(())
}

#[test]
fn unknown_format_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[]);
    wikilint(temp.path())
        .args(["check", "--format", "xml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown output format: 'xml'"));
    Ok(())
}

#[test]
fn config_file_changes_included_dirs() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[
        ("Development/ios/build-setup.md", VALID_PAGE),
        ("Meta/style-guide.md", STALE_BREADCRUMB),
    ]);
    fs::write(
        temp.path().join(".wikilint.yml"),
        "scan:\n  include_dirs: [Development]\n",
    )?;

    wikilint(temp.path())
        .args(["check", "--no-save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files validated: 1"));
    Ok(())
}

#[test]
fn invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = docs_tree(&[]);
    fs::write(temp.path().join("custom.yml"), "scan:\n  unknown_key: 1\n")?;

    wikilint(temp.path())
        .args(["--config", "custom.yml", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn file_command_uses_logical_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "draft.md", VALID_PAGE);

    wikilint(temp.path())
        .args(["file", "draft.md", "--as", "Development/ios/build-setup.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Development/ios/build-setup.md"));

    wikilint(temp.path())
        .args(["file", "draft.md", "--as", "User-Guide/build-setup.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expected 'User Guide' in breadcrumb"));
    Ok(())
}

#[test]
fn file_command_reports_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "Meta/style-guide.md", STALE_BREADCRUMB);

    wikilint(temp.path())
        .args(["file", "Meta/style-guide.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Meta/style-guide.md"))
        .stdout(predicate::str::contains(
            "= help: [Home](/) > [Meta](/Meta/) > Style Guide",
        ));
    Ok(())
}

#[test]
fn file_command_missing_file_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    wikilint(temp.path())
        .args(["file", "missing.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File not found"));
    Ok(())
}

#[test]
fn rules_lists_builtin_rules() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    wikilint(temp.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("frontmatter-fields"))
        .stdout(predicate::str::contains("breadcrumb"))
        .stdout(predicate::str::contains("heading-structure"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    wikilint(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wikilint"));
    Ok(())
}
