use anyhow::Result;
use log::{info, warn};
use parking_lot::Mutex;

use crate::app_config::Config;
use crate::document::{DeckTemplate, SlideDocument};
use crate::errors::AppError;
use crate::partition::PartitionService;
use crate::providers::Provider;
use crate::session::{GenerationOutcome, GenerationSession, ServiceStatus, SongForm};

// @module: Application controller for the generation pipeline

/// Main application controller for slide-deck generation
pub struct Controller<P: Provider> {
    // @field: App configuration
    config: Config,
    // @field: Service-first lyric splitter
    service: PartitionService<P>,
    // @field: Session state behind a short-held lock, never held across awaits
    session: Mutex<GenerationSession>,
}

impl<P: Provider> Controller<P> {
    // @method: Create a new controller with the given configuration and provider
    pub fn with_config(config: Config, provider: P) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            service: PartitionService::new(provider),
            session: Mutex::new(GenerationSession::new()),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the startup connectivity probe against the provider.
    ///
    /// The result is recorded once; a failed probe routes every
    /// generation through the fallback partitioner.
    pub async fn probe(&self) -> ServiceStatus {
        let status = match self.service.provider().test_connection().await {
            Ok(()) => {
                info!("Service connectivity probe succeeded");
                ServiceStatus::Available
            }
            Err(err) => {
                warn!("Service connectivity probe failed: {}", err);
                ServiceStatus::Unavailable
            }
        };

        self.service.set_service_available(status.is_available());
        self.session.lock().set_service_status(status);
        status
    }

    /// Result of the startup connectivity probe
    pub fn service_status(&self) -> ServiceStatus {
        self.session.lock().service_status()
    }

    /// Replace the session's form values
    pub fn set_form(&self, form: SongForm) {
        self.session.lock().form = form;
    }

    /// Whether the generate action is currently enabled
    pub fn can_generate(&self) -> bool {
        let session = self.session.lock();
        session.form.can_generate() && !session.is_in_flight()
    }

    /// Document text for the host UI's copy action, if a deck exists
    pub fn copy_payload(&self) -> Option<String> {
        self.session.lock().copy_payload().map(|s| s.to_string())
    }

    /// Which path produced the most recent partition, if any
    pub fn last_source(&self) -> Option<crate::partition::PartitionSource> {
        self.session.lock().last_outcome().map(|o| o.source)
    }

    /// Notice raised by the most recent generation, if any
    pub fn last_notice(&self) -> Option<String> {
        self.session
            .lock()
            .last_outcome()
            .and_then(|o| o.notice.clone())
    }

    /// Run one generation end-to-end: partition the lyrics, assemble the
    /// deck, and store the outcome in the session.
    ///
    /// Exactly one generation may run at a time; a second request while
    /// one is in flight returns `AppError::GenerationInProgress`.
    pub async fn generate(&self) -> Result<SlideDocument, AppError> {
        let form = {
            let mut session = self.session.lock();
            if let Some(field) = session.form.missing_field() {
                return Err(AppError::IncompleteForm(field.to_string()));
            }
            if !session.begin_generation() {
                return Err(AppError::GenerationInProgress);
            }
            session.form.clone()
        };

        info!(
            "Generating a {}-slide deck for \"{}\"",
            form.slide_count, form.title
        );

        let outcome = self.service.split(&form.lyrics, form.slide_count).await;
        let source = outcome.partition.source;
        let notice = outcome.notice.as_ref().map(|n| match n {
            crate::partition::requester::SplitNotice::ServiceCallFailed(message) => format!(
                "The service call failed, lyrics were split manually: {}",
                message
            ),
        });

        let deck = DeckTemplate::new(&form.title, &form.artist);
        let document = deck.render(&outcome.partition);

        info!(
            "Generated {} slides ({} path), document length {}",
            document.total_slide_count(),
            source.display_name(),
            document.as_str().len()
        );

        let mut session = self.session.lock();
        session.finish_generation(GenerationOutcome {
            document: document.clone(),
            source,
            notice,
        });

        Ok(document)
    }
}
