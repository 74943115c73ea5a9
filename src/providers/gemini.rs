use std::time::Duration;
use serde::{Serialize, Deserialize};
use async_trait::async_trait;
use reqwest::Client;
use log::error;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Gemini client for interacting with the Generative Language API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Model name (e.g., "gemini-2.0-flash")
    model: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Temperature for generation
    temperature: f32,
    /// Maximum number of tokens to generate
    max_output_tokens: u32,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// The conversation contents
    contents: Vec<GeminiContent>,

    /// Generation parameters
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// A single content block in a Gemini request or response
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// The parts making up the content
    pub parts: Vec<GeminiPart>,

    /// Role of the content producer (user, model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A text part within a content block
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The actual text content
    pub text: String,
}

/// Generation parameters for the Gemini API
#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// The generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A single candidate completion
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// The candidate's content
    pub content: GeminiContent,
}

impl GeminiRequest {
    /// Create a request carrying a single user prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt.into() }],
                role: Some("user".to_string()),
            }],
            generation_config: None,
        }
    }

    /// Set the generation parameters
    pub fn generation_config(mut self, temperature: f32, max_output_tokens: u32) -> Self {
        self.generation_config = Some(GenerationConfig {
            temperature: Some(temperature),
            max_output_tokens: Some(max_output_tokens),
        });
        self
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            temperature: 0.3,
            max_output_tokens: 4096,
        }
    }

    /// Create a client from the application configuration
    pub fn from_config(config: &crate::app_config::SplitConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// The URL of the generateContent endpoint for the configured model
    fn api_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base, self.model, self.api_key
        )
    }

    /// Send a generateContent request
    async fn generate(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let response = self.client.post(self.api_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(
                format!("Failed to send request to Gemini API: {}", e)
            ))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let gemini_response = response.json::<GeminiResponse>().await
            .map_err(|e| ProviderError::ParseError(
                format!("Failed to parse Gemini API response: {}", e)
            ))?;

        Ok(gemini_response)
    }
}

#[async_trait]
impl Provider for Gemini {
    type Request = GeminiRequest;
    type Response = GeminiResponse;

    fn make_request(&self, prompt: &str) -> Self::Request {
        GeminiRequest::from_prompt(prompt)
            .generation_config(self.temperature, self.max_output_tokens)
    }

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        self.generate(request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // A minimal completion doubles as the connectivity probe
        let request = GeminiRequest::from_prompt("Hello")
            .generation_config(0.0, 10);
        self.generate(request).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.candidates.first()
            .map(|candidate| {
                candidate.content.parts.iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
