//! Configuration tests - file loading, validation, keymap merging

use std::io::Write;

use textarea::config_paths;
use textarea::keymap::{default_bindings, parse_key_string, Command, KeymapError};
use textarea::{ConfigError, MemoryField, Textarea, TextareaConfig};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_path_names() {
    if let Some(path) = config_paths::config_file() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("textarea"));
        assert!(path_str.ends_with("config.yaml"));
    }
}

// ========================================================================
// Loading Tests
// ========================================================================

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tab_size: 2\nhistory_length: 10").unwrap();

    let config = TextareaConfig::load(file.path()).unwrap();
    assert_eq!(config.tab_size, 2);
    assert_eq!(config.history_length, 10);
    assert_eq!(config.input_debounce_ms, 300);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TextareaConfig::load(&dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tab_size: [not, a, number]").unwrap();
    assert!(matches!(
        TextareaConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_saved_yaml_loads_back() {
    let config = TextareaConfig::default()
        .with_tab_size(3)
        .with_history_length(7);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

    assert_eq!(TextareaConfig::load(file.path()).unwrap(), config);
}

// ========================================================================
// Validation Tests
// ========================================================================

#[test]
fn test_zero_tab_size_fails_at_construction() {
    let config = TextareaConfig::from_yaml("tab_size: 0").unwrap();
    let err = Textarea::new(MemoryField::new(), &config).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTabSize(0));
    assert!(err.to_string().contains("tab_size"));
}

#[test]
fn test_zero_history_length_fails_at_construction() {
    let config = TextareaConfig::from_yaml("history_length: 0").unwrap();
    let err = Textarea::new(MemoryField::new(), &config).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHistoryLength(0));
}

#[test]
fn test_bad_binding_fails_at_construction() {
    let config =
        TextareaConfig::from_yaml("bindings:\n  - key: \"ctrl+\"\n    command: Undo\n").unwrap();
    let err = Textarea::new(MemoryField::new(), &config).unwrap_err();
    assert!(matches!(err, ConfigError::Keymap(KeymapError::InvalidKey(_))));
}

// ========================================================================
// Keymap Tests
// ========================================================================

#[test]
fn test_default_keymap_is_resolved() {
    let settings = TextareaConfig::default().resolve().unwrap();
    assert_eq!(settings.keymap.len(), default_bindings().len());
    assert_eq!(
        settings.keymap.lookup(&parse_key_string("cmd+z").unwrap()),
        Some(Command::Undo)
    );
}
