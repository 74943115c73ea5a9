/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with the configured completion
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::empty()` - Succeeds with an empty completion
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Mock request for testing
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// The instruction prompt
    pub prompt: String,
}

/// Mock response for testing
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// The completion text
    pub text: String,
}

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the configured completion
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Returns an empty completion
    Empty,
    /// Simulates slow response (for timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock provider for testing requester behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&MockRequest) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty completions
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&MockRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests this provider has served
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Generate a well-formed split response, one part per line
    pub fn generate_split_response(parts: &[&str]) -> String {
        parts.join("\n")
    }

    /// Generate a split response with enumeration prefixes the parser must strip
    pub fn generate_numbered_response(parts: &[&str]) -> String {
        parts.iter()
            .enumerate()
            .map(|(i, part)| format!("{}. {}", i + 1, part))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generate a split response padded with blank lines between parts
    pub fn generate_spaced_response(parts: &[&str]) -> String {
        parts.join("\n\n")
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    type Request = MockRequest;
    type Response = MockResponse;

    fn make_request(&self, prompt: &str) -> Self::Request {
        MockRequest {
            prompt: prompt.to_string(),
        }
    }

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                // Use custom response if set, otherwise echo the prompt tail
                let text = if let Some(generator) = self.custom_response {
                    generator(&request)
                } else {
                    format!("[COMPLETION] {}", request.prompt)
                };

                Ok(MockResponse { text })
            }

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                        status_code: 503,
                    })
                } else {
                    let text = if let Some(generator) = self.custom_response {
                        generator(&request)
                    } else {
                        format!("[COMPLETION] {}", request.prompt)
                    };
                    Ok(MockResponse { text })
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated provider failure".to_string(),
                status_code: 500,
            }),

            MockBehavior::Empty => Ok(MockResponse {
                text: String::new(),
            }),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                let text = if let Some(generator) = self.custom_response {
                    generator(&request)
                } else {
                    format!("[COMPLETION] {}", request.prompt)
                };
                Ok(MockResponse { text })
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // Probes consume the shared counter too, so intermittent
        // behavior spans connection tests and completions alike
        let request = self.make_request("ping");
        self.complete(request).await.map(|_| ())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.text.clone()
    }
}
