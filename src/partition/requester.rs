/*!
 * Service-backed lyric splitting with fallback.
 *
 * The requester renders the split instruction, sends it to a provider,
 * and parses the completion into one part per line. Any transport error,
 * empty completion, or count mismatch falls back to the deterministic
 * partitioner; the caller always receives exactly the requested number
 * of parts.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use regex::Regex;

use crate::errors::PartitionError;
use crate::partition::fallback::fallback_partition;
use crate::partition::prompts::PromptTemplate;
use crate::partition::{Partition, PartitionSource, SlideCount};
use crate::providers::Provider;

// Leading enumeration markers the service is told not to emit, but
// sometimes does anyway ("1. ", "2) ", "3- ")
static ENUMERATION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+[.)\-]?\s*").unwrap()
});

/// A user-facing notice produced while splitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitNotice {
    /// The service call itself failed; the fallback result is being used
    ServiceCallFailed(String),
}

/// The result of a split attempt: a full partition plus an optional
/// user-facing notice
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// The partition, always exactly the requested length
    pub partition: Partition,
    /// Notice to surface to the user, if any
    pub notice: Option<SplitNotice>,
}

/// Service-first lyric splitter over any provider implementation
#[derive(Debug)]
pub struct PartitionService<P: Provider> {
    /// The text-completion provider
    provider: P,
    /// Prompt template for the split instruction
    template: PromptTemplate,
    /// Whether the startup probe found the service reachable
    service_available: AtomicBool,
}

impl<P: Provider> PartitionService<P> {
    /// Create a partition service assuming the provider is reachable
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            template: PromptTemplate::slide_splitter(),
            service_available: AtomicBool::new(true),
        }
    }

    /// Create a partition service with an explicit availability flag
    pub fn with_availability(provider: P, service_available: bool) -> Self {
        Self {
            provider,
            template: PromptTemplate::slide_splitter(),
            service_available: AtomicBool::new(service_available),
        }
    }

    /// Override the prompt template
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Whether the service path will be attempted
    pub fn is_service_available(&self) -> bool {
        self.service_available.load(Ordering::Relaxed)
    }

    /// Record the probe result; set once at startup
    pub fn set_service_available(&self, available: bool) {
        self.service_available.store(available, Ordering::Relaxed);
    }

    /// Access the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Split lyrics into exactly `count` parts.
    ///
    /// Tries the provider first; any failure or count mismatch defers to
    /// the fallback partitioner, so the returned partition always has
    /// exactly `count` slides.
    pub async fn split(&self, lyrics: &str, count: SlideCount) -> SplitOutcome {
        if !self.is_service_available() {
            debug!("Service marked unavailable, using fallback partitioner");
            return SplitOutcome {
                partition: fallback_partition(lyrics, count),
                notice: None,
            };
        }

        match self.try_service_split(lyrics, count).await {
            Ok(slides) => SplitOutcome {
                partition: Partition::new(slides, PartitionSource::Service),
                notice: None,
            },
            Err(PartitionError::CountMismatch { expected, actual }) => {
                // An expected deviation, not an error worth surfacing
                warn!(
                    "Service returned {} parts instead of {}, using fallback partitioner",
                    actual, expected
                );
                SplitOutcome {
                    partition: fallback_partition(lyrics, count),
                    notice: None,
                }
            }
            Err(err) => {
                warn!("Service split failed ({}), using fallback partitioner", err);
                SplitOutcome {
                    partition: fallback_partition(lyrics, count),
                    notice: Some(SplitNotice::ServiceCallFailed(err.to_string())),
                }
            }
        }
    }

    /// Ask the provider for a split and validate the part count
    async fn try_service_split(
        &self,
        lyrics: &str,
        count: SlideCount,
    ) -> Result<Vec<String>, PartitionError> {
        let prompt = self.template.render(count.get(), lyrics);
        debug!("Requesting {}-part split, prompt length {}", count, prompt.len());

        let request = self.provider.make_request(&prompt);
        let response = self.provider.complete(request).await?;
        let text = P::extract_text(&response);

        if text.trim().is_empty() {
            return Err(PartitionError::EmptyResponse);
        }

        let parts = parse_split_response(&text);
        debug!("Service returned {} parts", parts.len());

        if parts.len() != count.get() {
            return Err(PartitionError::CountMismatch {
                expected: count.get(),
                actual: parts.len(),
            });
        }

        Ok(parts)
    }
}

/// Parse a completion into parts: one per non-blank line, with leading
/// enumeration markers stripped
pub fn parse_split_response(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| ENUMERATION_PREFIX.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
