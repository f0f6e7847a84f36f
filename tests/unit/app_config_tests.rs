/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use xliffgen::app_config::{Config, LogLevel};
use xliffgen::serializers::TranslationFormat;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.locale, "en");
    assert_eq!(config.format, TranslationFormat::Xliff2);
    assert!(!config.target_only);
    assert!(config.output_dir.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() -> Result<()> {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.locale = "xyz-!!".to_string();
    assert!(config.validate().is_err());

    config.locale = "fr-CA".to_string();
    assert!(config.validate().is_ok());

    // An existing file cannot be used as output directory
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "not_a_dir", "")?;
    config.output_dir = Some(file);
    assert!(config.validate().is_err());

    Ok(())
}

/// Test partial JSON falls back to defaults for missing fields
#[test]
fn test_config_deserialize_withPartialJson_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "format": "xliff", "log_level": "debug" }"#)?;

    assert_eq!(config.locale, "en");
    assert_eq!(config.format, TranslationFormat::Xliff);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);

    Ok(())
}

/// Test a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config.locale, "en");

    // Reloading reads the file that was just written
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.format, config.format);

    Ok(())
}

/// Test an existing config file is loaded
#[test]
fn test_load_or_create_withExistingFile_shouldLoadValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "locale": "de", "target_only": true }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.locale, "de");
    assert!(config.target_only);

    Ok(())
}
