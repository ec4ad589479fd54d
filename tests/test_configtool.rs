use pwforge::configtool::*;
use pwforge::error::ConfigError;
use pwforge::passgen::{ComplexityTier, GenerationOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults_match_generation_defaults() {
    let config = ConfigFile::default();
    assert_eq!(config.generator.to_options(), GenerationOptions::default());
    assert!(config.clipboard.enabled);
    assert_eq!(config.clipboard.clear_after, None);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        r#"{"generator": {"length": 24, "complexity": "High", "excludes": "lI1O0"},
            "clipboard": {"clear_after": 15}}"#,
    )
    .unwrap();

    let config = ConfigFile::load(&path).unwrap();
    let options = config.generator.to_options();
    assert_eq!(options.length, 24);
    assert_eq!(options.complexity, ComplexityTier::High);
    assert_eq!(options.excludes, "lI1O0");
    assert!(options.include_special);
    assert!(config.clipboard.enabled);
    assert_eq!(config.clipboard.clear_after, Some(15));
}

#[test]
fn test_unknown_tier_is_kept() {
    let defaults = GeneratorDefaults {
        complexity: "extreme".to_string(),
        ..Default::default()
    };
    assert_eq!(
        defaults.to_options().complexity,
        ComplexityTier::Unrecognized("extreme".to_string())
    );
}

#[test]
fn test_invalid_json() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(ConfigFile::load(&path), Err(ConfigError::Json(_))));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("missing.json");
    assert!(matches!(
        ConfigFile::load_or_default(Some(&path)),
        Err(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_round_trip_through_json() {
    let config = ConfigFile {
        generator: GeneratorDefaults {
            length: 32,
            complexity: "low".to_string(),
            contains: "!".to_string(),
            ..Default::default()
        },
        clipboard: ClipboardSettings { enabled: false, clear_after: Some(10) },
    };
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    assert_eq!(ConfigFile::load(&path).unwrap(), config);
}

#[test]
fn test_normalize_tier() {
    assert_eq!(normalize_tier("  MEDIUM \n"), "medium");
}
