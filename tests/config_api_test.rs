//! Integration tests for config module public API.

use std::fs;

use tempfile::TempDir;
use wikilint::config::{load_config, validate_config, WikilintConfig, CONFIG_FILE_NAME};
use wikilint::lint::{RuleRegistry, Severity, Validator};
use wikilint::scanner::scan_docs;

#[test]
fn defaults_without_config_file() {
    let temp = TempDir::new().unwrap();
    let config = load_config(temp.path(), None).unwrap();
    assert_eq!(config, WikilintConfig::default());
    assert!(validate_config(&config).is_empty());
}

#[test]
fn config_drives_scan_and_rules() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"
scan:
  include_dirs: [Guides]
  marker_dir: Guides
rules:
  required_fields: [title]
  recommended_fields: []
"#,
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("Guides/setup")).unwrap();
    fs::write(
        temp.path().join("Guides/setup/install.md"),
        "---\ntitle: Install\n---\n[Home](/) > [Guides](/Guides/) > [Setup](/Guides/setup/) > Install\n# Install\n",
    )
    .unwrap();

    let config = load_config(temp.path(), None).unwrap();
    let files = scan_docs(temp.path(), &config.scan).unwrap();
    assert_eq!(files.len(), 1);

    let validator = Validator::from_settings(&config.rules);
    let validation = validator.validate_file(&files[0].path, &files[0].relative);
    assert!(validation.is_valid(), "{:?}", validation.issues);
    assert_eq!(validation.issues_with(Severity::Warning).count(), 0);
}

#[test]
fn registry_follows_settings() {
    let config = WikilintConfig::default();
    let registry = RuleRegistry::from_settings(&config.rules);
    assert_eq!(registry.len(), 3);
}
