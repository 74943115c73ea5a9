/*!
 * Generation session context.
 *
 * Form state, service availability, and the last generated document are
 * held in one explicit session object passed through the generation
 * pipeline, keeping the partitioning logic pure and independently
 * testable.
 */

use serde::{Deserialize, Serialize};

use crate::document::SlideDocument;
use crate::partition::{PartitionSource, SlideCount};

/// User-supplied song form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongForm {
    /// Song title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Raw multi-line lyrics
    pub lyrics: String,
    /// Requested number of lyric slides
    #[serde(default)]
    pub slide_count: SlideCount,
}

impl SongForm {
    /// Create a form for a song
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        lyrics: impl Into<String>,
        slide_count: SlideCount,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            lyrics: lyrics.into(),
            slide_count,
        }
    }

    /// Whether the generate action is enabled.
    ///
    /// Missing title or lyrics disables generation instead of raising an
    /// error.
    pub fn can_generate(&self) -> bool {
        !self.title.trim().is_empty() && !self.lyrics.trim().is_empty()
    }

    /// Name the first missing field, for the disabled-state hint
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.lyrics.trim().is_empty() {
            Some("lyrics")
        } else {
            None
        }
    }
}

/// Reachability of the external text-completion service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    /// The startup probe has not finished yet
    #[default]
    Probing,
    /// The probe succeeded; the service path will be tried
    Available,
    /// The probe failed; every generation uses the fallback path
    Unavailable,
}

impl ServiceStatus {
    /// Get a human-readable status string
    pub fn status_display(&self) -> &'static str {
        match self {
            Self::Probing => "Probing",
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
        }
    }

    /// Whether the service path should be attempted
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_display())
    }
}

/// The result of one completed generation
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The assembled deck
    pub document: SlideDocument,
    /// Which path produced the partition
    pub source: PartitionSource,
    /// User-facing notice raised during the generation, if any
    pub notice: Option<String>,
}

/// One user session: form state, service status, and the latest outcome
#[derive(Debug, Default)]
pub struct GenerationSession {
    /// Current form values
    pub form: SongForm,
    /// Result of the startup connectivity probe
    service_status: ServiceStatus,
    /// Whether a generation is currently running
    in_flight: bool,
    /// The most recent completed generation
    last_outcome: Option<GenerationOutcome>,
}

impl GenerationSession {
    /// Create a session with an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with an initial form
    pub fn with_form(form: SongForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Result of the startup connectivity probe
    pub fn service_status(&self) -> ServiceStatus {
        self.service_status
    }

    /// Record the probe result
    pub fn set_service_status(&mut self, status: ServiceStatus) {
        self.service_status = status;
    }

    /// Whether a generation is currently running
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mark a generation as started; returns false if one is already running
    pub fn begin_generation(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Record a finished generation and release the in-flight guard
    pub fn finish_generation(&mut self, outcome: GenerationOutcome) {
        self.last_outcome = Some(outcome);
        self.in_flight = false;
    }

    /// Release the in-flight guard without recording an outcome
    pub fn abort_generation(&mut self) {
        self.in_flight = false;
    }

    /// The most recent completed generation
    pub fn last_outcome(&self) -> Option<&GenerationOutcome> {
        self.last_outcome.as_ref()
    }

    /// Document text for the host UI's copy action, if a deck exists
    pub fn copy_payload(&self) -> Option<&str> {
        self.last_outcome.as_ref().map(|o| o.document.as_str())
    }
}
