/*!
 * Lyric partitioning: mapping a lyrics blob onto a fixed number of slides.
 *
 * The service-backed requester is tried first; the deterministic fallback
 * partitioner takes over whenever the service is unavailable, fails, or
 * returns a different number of parts than requested. The submodules:
 *
 * - `requester`: Service-backed splitting with strict count validation
 * - `fallback`: Deterministic, dependency-free fallback partitioner
 * - `prompts`: Prompt templates for the split instruction
 */

use serde::{Deserialize, Deserializer, Serialize};

// Re-export main types for easier usage
pub use self::requester::{parse_split_response, PartitionService, SplitNotice, SplitOutcome};

// Submodules
pub mod fallback;
pub mod prompts;
pub mod requester;

/// Smallest accepted slide count
pub const MIN_SLIDE_COUNT: usize = 1;

/// Largest accepted slide count
pub const MAX_SLIDE_COUNT: usize = 50;

/// A validated slide count, always within [1, 50].
///
/// Out-of-range input is clamped rather than rejected, matching the
/// behavior of the number field in the form surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlideCount(usize);

// Clamp on deserialization too, so a form round-trip cannot smuggle an
// out-of-range count past the invariant
impl<'de> Deserialize<'de> for SlideCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = usize::deserialize(deserializer)?;
        Ok(Self::clamped(raw))
    }
}

impl SlideCount {
    /// Create a slide count, clamping the raw value into [1, 50]
    pub fn clamped(raw: usize) -> Self {
        Self(raw.clamp(MIN_SLIDE_COUNT, MAX_SLIDE_COUNT))
    }

    /// The validated count
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for SlideCount {
    fn default() -> Self {
        Self(crate::app_config::SlideConfig::default().default_slide_count)
    }
}

impl std::fmt::Display for SlideCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which path produced a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionSource {
    /// The external text-completion service produced the parts
    Service,
    /// The deterministic fallback partitioner produced the parts
    Fallback,
}

impl PartitionSource {
    /// Get a human-readable source string
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Fallback => "fallback",
        }
    }
}

/// An ordered sequence of exactly N slide texts, tagged with the path
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// One entry per slide, in slide order
    pub slides: Vec<String>,
    /// Which path produced the slides
    pub source: PartitionSource,
}

impl Partition {
    /// Create a partition from slides and their source
    pub fn new(slides: Vec<String>, source: PartitionSource) -> Self {
        Self { slides, source }
    }

    /// Number of slides in the partition
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the partition holds no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether the partition came from the fallback path
    pub fn is_fallback(&self) -> bool {
        self.source == PartitionSource::Fallback
    }
}
