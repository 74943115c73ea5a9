/*!
 * Error types for the lyricdeck application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the text-completion provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while partitioning lyrics into slides
#[derive(Error, Debug)]
pub enum PartitionError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned a different number of parts than requested
    #[error("Provider returned {actual} parts, expected {expected}")]
    CountMismatch {
        /// Number of parts requested
        expected: usize,
        /// Number of parts actually returned
        actual: usize,
    },

    /// The provider returned an empty completion
    #[error("Provider returned an empty response")]
    EmptyResponse,
}

/// Errors that can occur while assembling the slide document
#[derive(Error, Debug)]
pub enum DocumentError {}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from lyric partitioning
    #[error("Partition error: {0}")]
    Partition(#[from] PartitionError),

    /// Error from document assembly
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// A generation was requested while another was still running
    #[error("A generation is already in progress")]
    GenerationInProgress,

    /// A generation was requested with an incomplete form
    #[error("Form is incomplete: {0}")]
    IncompleteForm(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
