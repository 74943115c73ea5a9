/*!
 * # lyricdeck - Lyric slide-deck generator
 *
 * A Rust library that turns a song (title, artist, lyrics) into a Marp
 * slide-deck document, one lyric fragment per slide.
 *
 * ## Features
 *
 * - Split lyrics into a requested number of slides using a generative
 *   language API (Gemini)
 * - Deterministic fallback partitioner used when the API is unavailable
 *   or returns an unexpected number of parts
 * - Marp markup assembly with a title slide and numbered lyric slides
 * - Session context tracking form state, service availability and the
 *   last generated document
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `partition`: Lyric partitioning:
 *   - `partition::requester`: Service-backed splitting with fallback
 *   - `partition::fallback`: Deterministic fallback partitioner
 *   - `partition::prompts`: Prompt templates for the split instruction
 * - `document`: Marp slide-deck assembly
 * - `session`: Form state and generation session context
 * - `app_controller`: Main application controller
 * - `providers`: Client implementations for text-completion providers:
 *   - `providers::gemini`: Gemini API client
 *   - `providers::mock`: Mock provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod partition;
pub mod document;
pub mod session;
pub mod app_controller;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use partition::{Partition, PartitionService, PartitionSource, SlideCount};
pub use partition::fallback::fallback_partition;
pub use document::{DeckTemplate, SlideDocument};
pub use session::{GenerationSession, ServiceStatus, SongForm};
pub use errors::{AppError, DocumentError, PartitionError, ProviderError};
