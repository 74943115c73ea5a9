/*!
 * Tests for application configuration functionality
 */

use std::str::FromStr;

use lyricdeck::app_config::{Config, LogLevel, SplitProvider};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    // Test default values
    assert_eq!(config.split.provider, SplitProvider::Gemini);
    assert_eq!(config.split.model, "gemini-2.0-flash");
    assert_eq!(config.split.endpoint, "https://generativelanguage.googleapis.com");
    assert_eq!(config.split.timeout_secs, 30);
    assert!(config.split.api_key.is_empty());

    assert_eq!(config.slides.default_slide_count, 25);

    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Gemini without an API key should fail validation
    let mut config = Config::default();
    assert!(config.validate().is_err());

    // Setting a key makes it valid
    config.split.api_key = "AIza-test-key".to_string();
    assert!(config.validate().is_ok());

    // Mock provider needs no API key
    config.split.api_key = String::new();
    config.split.provider = SplitProvider::Mock;
    assert!(config.validate().is_ok());

    // Invalid endpoint URL
    config.split.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.split.endpoint = "http://localhost:9999".to_string();
    assert!(config.validate().is_ok());

    // Empty model name
    config.split.model = String::new();
    assert!(config.validate().is_err());
    config.split.model = "gemini-2.0-flash".to_string();

    // Temperature out of range
    config.split.temperature = 1.5;
    assert!(config.validate().is_err());
    config.split.temperature = 0.3;

    // Default slide count outside [1, 50]
    config.slides.default_slide_count = 0;
    assert!(config.validate().is_err());
    config.slides.default_slide_count = 51;
    assert!(config.validate().is_err());
    config.slides.default_slide_count = 25;
    assert!(config.validate().is_ok());
}

/// Test provider identifier round-trips
#[test]
fn test_splitProvider_parseAndDisplay_shouldRoundTrip() {
    assert_eq!(SplitProvider::from_str("gemini").unwrap(), SplitProvider::Gemini);
    assert_eq!(SplitProvider::from_str("Mock").unwrap(), SplitProvider::Mock);
    assert!(SplitProvider::from_str("openai").is_err());

    assert_eq!(SplitProvider::Gemini.to_string(), "gemini");
    assert_eq!(SplitProvider::Gemini.display_name(), "Gemini");
    assert_eq!(SplitProvider::Mock.to_string(), "mock");
}

/// Test configuration serde round-trip
#[test]
fn test_config_serde_shouldRoundTripThroughJson() {
    let mut config = Config::default();
    config.split.api_key = "key".to_string();

    let json = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.split.provider, config.split.provider);
    assert_eq!(restored.split.model, config.split.model);
    assert_eq!(restored.slides.default_slide_count, config.slides.default_slide_count);
}

/// Test that sparse JSON falls back to field defaults
#[test]
fn test_config_deserialize_withSparseJson_shouldApplyDefaults() {
    let config: Config = serde_json::from_str(r#"{"split": {"api_key": "k"}}"#).unwrap();

    assert_eq!(config.split.provider, SplitProvider::Gemini);
    assert_eq!(config.split.model, "gemini-2.0-flash");
    assert_eq!(config.slides.default_slide_count, 25);
    assert_eq!(config.log_level, LogLevel::Info);
}
