use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and defaulting configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Lyric splitting config
    pub split: SplitConfig,

    /// Slide deck config
    #[serde(default)]
    pub slides: SlideConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Split provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitProvider {
    // @provider: Gemini (Google Generative Language API)
    #[default]
    Gemini,
    // @provider: Mock (deterministic, for tests)
    Mock,
}

impl SplitProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gemini => "Gemini",
            Self::Mock => "Mock",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Gemini => "gemini".to_string(),
            Self::Mock => "mock".to_string(),
        }
    }
}

// Implement Display trait for SplitProvider
impl std::fmt::Display for SplitProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for SplitProvider
impl std::str::FromStr for SplitProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Lyric splitting configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SplitConfig {
    /// Split provider to use
    #[serde(default)]
    pub provider: SplitProvider,

    // @field: Model name
    #[serde(default = "default_gemini_model")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 1.0)
    /// Lower values make output more deterministic, higher values more creative
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum number of tokens the provider may generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            provider: SplitProvider::default(),
            model: default_gemini_model(),
            api_key: String::new(),
            endpoint: default_gemini_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// Slide deck configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SlideConfig {
    /// Default number of slides when the form does not specify one
    #[serde(default = "default_slide_count")]
    pub default_slide_count: usize,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            default_slide_count: default_slide_count(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_output_tokens() -> u32 {
    4096
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_slide_count() -> usize {
    25
}

impl Config {

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Endpoint must be a parseable absolute URL
        Url::parse(&self.split.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.split.endpoint, e))?;

        // Validate API key for providers that need one
        match self.split.provider {
            SplitProvider::Gemini => {
                if self.split.api_key.is_empty() {
                    return Err(anyhow!("API key is required for Gemini provider"));
                }
            },
            SplitProvider::Mock => {}
        }

        if self.split.model.is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }

        if !(0.0..=1.0).contains(&self.split.temperature) {
            return Err(anyhow!("Temperature must be between 0.0 and 1.0"));
        }

        if self.slides.default_slide_count == 0 || self.slides.default_slide_count > crate::partition::MAX_SLIDE_COUNT {
            return Err(anyhow!(
                "Default slide count must be between 1 and {}",
                crate::partition::MAX_SLIDE_COUNT
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            split: SplitConfig::default(),
            slides: SlideConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
