//! Loading config files from disk.

use camera_lister::camera::Backend;
use camera_lister::config::{Config, ConfigError, DEFAULT_CONFIG};
use camera_lister::output::OutputFormat;
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_custom_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[camera]\nbackend = \"video4linux\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.camera.backend, Backend::Video4Linux);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.camera.backend, Backend::Auto);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_malformed_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[camera\nbackend = ").unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(format!("{}", err).contains("broken.toml"));
}

#[test]
fn test_init_writes_default_and_refuses_second_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("config.toml");

    Config::init(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());

    let err = Config::init(&path).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists { .. }));
}
