//! Config files feeding the app.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::{TempDir, tempdir};

use cofactor_engine::{App, CofactorConfig, ConfigError, ConsistencyPolicy, LocalReconstructor};

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn full_config_round_trips_into_app() {
    let (_dir, path) = write_config(
        r#"
[app]
ascii_only = true
high_contrast = true

[form]
max_residue_len = 8
consistency = "left-only"
enforce_index_bound = false

[sample]
arguments = 2
"#,
    );

    let config = CofactorConfig::load_from(&path).unwrap().unwrap();
    let settings = config.form_settings();
    assert_eq!(settings.max_residue_len, 8);
    assert_eq!(settings.consistency, ConsistencyPolicy::LeftOnly);
    assert!(!settings.enforce_index_bound);
    assert_eq!(config.sample_arguments(), 2);

    let app = App::with_reconstructor(Some(&config), Arc::new(LocalReconstructor));
    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
    assert_eq!(app.form().settings().max_residue_len, 8);
}

#[test]
fn short_residue_limit_caps_typing() {
    let (_dir, path) = write_config("[form]\nmax_residue_len = 4\n");
    let config = CofactorConfig::load_from(&path).unwrap().unwrap();
    let mut app = App::with_reconstructor(Some(&config), Arc::new(LocalReconstructor));

    app.enter_text("010101");
    assert_eq!(app.form().left().len(), 4);
}

#[test]
fn bad_config_reports_parse_error_with_path() {
    let (_dir, path) = write_config("[form]\nconsistency = 3\n");
    let err = CofactorConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn missing_config_means_defaults() {
    let dir = tempdir().unwrap();
    let loaded = CofactorConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());

    let app = App::with_reconstructor(loaded.as_ref(), Arc::new(LocalReconstructor));
    assert_eq!(app.form().settings().max_residue_len, 16);
}
