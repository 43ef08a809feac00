//! Integration tests for configuration loading.
//!
//! Each test writes a config file into its own temporary directory and loads
//! it through the public API.

use std::path::PathBuf;

use sfm10_footprint_mcp::config::{load_config, load_or_default};
use sfm10_footprint_mcp::error::ConfigError;
use sfm10_footprint_mcp::wizard::{FootprintWizard, Sfm10Wizard};
use tempfile::TempDir;

/// Creates a temporary directory inside `.tmp/` for test isolation.
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
fn test_temp_dir() -> TempDir {
    let tmp_root = std::path::Path::new(".tmp");
    std::fs::create_dir_all(tmp_root).expect("Failed to create .tmp directory");
    let tmp_root = tmp_root
        .canonicalize()
        .expect("Failed to canonicalize .tmp path");
    tempfile::tempdir_in(&tmp_root).expect("Failed to create temp dir")
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn overrides_reach_the_wizard() {
    let dir = test_temp_dir();
    let path = write_config(
        &dir,
        r#"{
            "parameters": {
                "Pads": { "vertical pads count": 5, "horizontal pads count": 20 }
            },
            "logging": { "level": "info" }
        }"#,
    );

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.logging.level, "info");

    let store = config.parameter_store().unwrap();
    let footprint = Sfm10Wizard.build(&store).unwrap();
    assert_eq!(footprint.pads.len(), 25);
}

#[test]
fn empty_object_loads_defaults() {
    let dir = test_temp_dir();
    let path = write_config(&dir, "{}");

    let config = load_or_default(Some(&path)).unwrap();
    let store = config.parameter_store().unwrap();
    assert_eq!(store.get("Pads", "horizontal pads count"), Some(24.0));
    assert!((config.style.text_size - 1.0).abs() < f64::EPSILON);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = test_temp_dir();
    let path = write_config(&dir, "{ \"parameters\": ");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_parameter_fails_validation() {
    let dir = test_temp_dir();
    let path = write_config(&dir, r#"{ "parameters": { "Body": { "height": 2.0 } } }"#);

    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("height"));
}

#[test]
fn odd_count_loads_but_does_not_build() {
    // Parity is a generation-time check, not a config check
    let dir = test_temp_dir();
    let path = write_config(
        &dir,
        r#"{ "parameters": { "Pads": { "horizontal pads count": 7 } } }"#,
    );

    let store = load_config(Some(&path)).unwrap().parameter_store().unwrap();
    assert!(Sfm10Wizard.check(&store).is_err());
}

#[test]
fn missing_explicit_file_is_not_found() {
    let dir = test_temp_dir();
    let path = dir.path().join("absent.json");

    let err = load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}
