/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use speaker_srt::app_config::{Config, LogLevel, OutputConfig};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.output.unknown_nickname_placeholder, "unknown");
    assert_eq!(config.output.timestamp_format, "%Y-%m-%d_%H-%M-%S");
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.output.unknown_nickname_placeholder = " ".to_string();
    assert!(config.validate().is_err());

    config.output.unknown_nickname_placeholder = "a/b".to_string();
    assert!(config.validate().is_err());
    config.output.unknown_nickname_placeholder = "nobody".to_string();

    config.output.timestamp_format = "%Y/%m".to_string();
    assert!(config.validate().is_err());

    config.output.timestamp_format = "%Q".to_string();
    assert!(config.validate().is_err());

    config.output.timestamp_format = "%Y%m%d".to_string();
    assert!(config.validate().is_ok());
}

/// Partial config files fall back to defaults for missing fields
#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "log_level": "debug", "output": { "unknown_nickname_placeholder": "anon" } }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(
        config.output,
        OutputConfig {
            unknown_nickname_placeholder: "anon".to_string(),
            timestamp_format: "%Y-%m-%d_%H-%M-%S".to_string(),
        }
    );
    Ok(())
}

/// Empty JSON object is a valid config
#[test]
fn test_from_file_withEmptyObject_shouldEqualDefault() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{}")?;
    assert_eq!(Config::from_file(&path)?, Config::default());
    Ok(())
}

/// Broken JSON is reported with the file name
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ log_level: ")?;

    let err = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));
    Ok(())
}

/// Log levels map onto the log crate's filters
#[test]
fn test_log_level_conversion_shouldMatchFilters() {
    assert_eq!(log::LevelFilter::from(LogLevel::Error), log::LevelFilter::Error);
    assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
}
