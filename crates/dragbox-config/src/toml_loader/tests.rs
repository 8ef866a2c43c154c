//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use dragbox_common::{ConfigError, StickId, Unit};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_dragbox_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[panel]
unit = "percent"
sticks = ["tl", "br"]

[guides]
snap_threshold = 4.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.panel.unit, Unit::Percent);
    assert_eq!(config.panel.sticks, vec![StickId::TopLeft, StickId::BottomRight]);
    assert!((config.guides.snap_threshold - 4.0).abs() < f64::EPSILON);
    // Defaults preserved
    assert!((config.guides.gap - 5.0).abs() < f64::EPSILON);
    assert!(config.panel.draggable);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let config = load_from_str("[guides]\ngap = 500.0\n").unwrap();
    assert!((config.guides.gap - 500.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dragbox").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::schema::DragboxConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::DragboxConfig;

    let content = default_config_toml();
    let config: DragboxConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("dragbox"));
        assert!(path_str.ends_with("config.toml"));
    }
}
