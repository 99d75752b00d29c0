mod common;

use common::temp_config;
use sdui_runtime::config::{Config, ConfigError, LayoutSourceKind};
use std::path::PathBuf;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.layouts.source, LayoutSourceKind::Fixtures);
    assert_eq!(config.layouts.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.layouts.fixtures_dir, PathBuf::from("demos/layouts"));
    assert_eq!(config.layouts.timeout_seconds, 30);
    assert_eq!(config.layouts.connect_timeout_seconds, 5);
    assert_eq!(config.session.initial_layout, "home");
    assert!(config.session.validate_unique_ids);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("sdui-runtime/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[layouts]
source = "http"
base_url = "https://layouts.example.com"

[session]
initial_layout = "server-contents"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.layouts.source, LayoutSourceKind::Http);
    assert_eq!(config.layouts.base_url, "https://layouts.example.com");
    assert_eq!(config.layouts.timeout_seconds, 30);
    assert_eq!(config.session.initial_layout, "server-contents");
    assert!(config.session.validate_unique_ids);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_parse_error_names_the_file() {
    let (_dir, path) = temp_config("[layouts\nsource = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_unknown_source_kind_is_a_parse_error() {
    let (_dir, path) = temp_config("[layouts]\nsource = \"ftp\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_non_http_base_url() {
    let (_dir, path) = temp_config("[layouts]\nsource = \"http\"\nbase_url = \"localhost:8080\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("localhost:8080"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let mut config = Config::default();
    config.layouts.timeout_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_empty_initial_layout() {
    let mut config = Config::default();
    config.session.initial_layout = "  ".to_string();
    assert!(config.validate().is_err());
}
