//! Integration tests for Settings config file loading.
//!
//! These tests pass an explicit config file, so any global config on the
//! machine running them is ignored.

use std::fs;
use std::num::NonZeroUsize;

use tempfile::TempDir;

use mansion::application::ApplicationError;
use mansion::config::Settings;

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mansion.toml");
    fs::write(
        &path,
        r#"
unnamed_label = "(anônimo)"
max_depth = 5
show_trail = true
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.unnamed_label, "(anônimo)");
    assert_eq!(settings.max_depth, NonZeroUsize::new(5));
    assert!(settings.show_trail);
    assert!(!settings.show_map, "unspecified field keeps default");
}

#[test]
fn given_empty_config_file_when_load_then_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mansion.toml");
    fs::write(&path, "").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_config_file_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let result = Settings::load(Some(&path));

    assert!(
        matches!(result, Err(ApplicationError::Config { ref message }) if message.contains("not found")),
        "unexpected: {:?}",
        result
    );
}

#[test]
fn given_malformed_config_file_when_load_then_errors_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mansion.toml");
    fs::write(&path, "max_depth = \"deep\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("parse"), "got {}", err);
    assert!(err.to_string().contains("mansion.toml"), "got {}", err);
}

#[test]
fn given_zero_max_depth_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mansion.toml");
    fs::write(&path, "max_depth = 0\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(
        matches!(err, ApplicationError::Config { ref message } if message.contains("parse")),
        "got {}",
        err
    );
}
