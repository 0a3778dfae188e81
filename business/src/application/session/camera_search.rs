//! Camera search session: acquisition, capture, classification, search.
//!
//! Session data lives behind a mutex that is never held across an `.await`.
//! Every async step remembers the epoch it started in and drops its result
//! if the session was closed or restarted meanwhile; the epoch is bumped by
//! `close` and by every new acquisition.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::application::classifier::gateway::ClassifierGateway;
use crate::application::media::acquisition::{CameraStream, MediaAcquisition};
use crate::domain::catalog::use_cases::search::{SearchCatalogParams, SearchCatalogUseCase};
use crate::domain::classifier::model::DEFAULT_TOP_K;
use crate::domain::labels::model::DetectedCategory;
use crate::domain::labels::normalizer::detect_categories;
use crate::domain::logger::Logger;
use crate::domain::media::errors::MediaError;
use crate::domain::media::model::{CapturedFrame, Viewfinder};
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::{SearchResults, SessionSnapshot, SessionState};

pub const DEFAULT_SEARCH_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub top_k: usize,
    pub search_limit: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

struct SessionInner {
    state: SessionState,
    epoch: u64,
    search_ticket: u64,
    viewfinder: Option<Viewfinder>,
    stream: Option<CameraStream>,
    frame: Option<CapturedFrame>,
    categories: Vec<DetectedCategory>,
    active_term: Option<String>,
    results: SearchResults,
    error: Option<SessionError>,
}

impl SessionInner {
    fn new() -> Self {
        Self {
            state: SessionState::Idle,
            epoch: 0,
            search_ticket: 0,
            viewfinder: None,
            stream: None,
            frame: None,
            categories: Vec::new(),
            active_term: None,
            results: SearchResults::NotRequested,
            error: None,
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            frame: self.frame.clone(),
            categories: self.categories.clone(),
            active_term: self.active_term.clone(),
            results: self.results.clone(),
            error: self.error.clone(),
        }
    }

    /// Forgets everything tied to the last capture.
    fn clear_capture(&mut self) {
        self.frame = None;
        self.categories.clear();
        self.active_term = None;
        self.results = SearchResults::NotRequested;
        self.error = None;
    }
}

/// One open-to-close camera search.
///
/// Operations called from a state that does not accept them are ignored.
pub struct CameraSearchSession {
    media: Arc<MediaAcquisition>,
    classifier: Arc<ClassifierGateway>,
    search: Arc<dyn SearchCatalogUseCase>,
    logger: Arc<dyn Logger>,
    settings: SessionSettings,
    inner: Mutex<SessionInner>,
    updates: watch::Sender<SessionSnapshot>,
}

impl CameraSearchSession {
    pub fn new(
        media: Arc<MediaAcquisition>,
        classifier: Arc<ClassifierGateway>,
        search: Arc<dyn SearchCatalogUseCase>,
        logger: Arc<dyn Logger>,
        settings: SessionSettings,
    ) -> Self {
        let (updates, _) = watch::channel(SessionSnapshot::default());
        Self {
            media,
            classifier,
            search,
            logger,
            settings,
            inner: Mutex::new(SessionInner::new()),
            updates,
        }
    }

    pub fn state(&self) -> SessionState {
        self.lock().state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Receives a fresh snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    /// Starts the session: loads the classifier and opens the camera
    /// concurrently, then shows the live preview on `viewfinder`.
    pub async fn open(&self, viewfinder: Viewfinder) {
        let epoch = {
            let mut inner = self.lock();
            if inner.state != SessionState::Idle {
                self.ignored("open", inner.state);
                return;
            }
            self.logger.info("Opening camera search");
            inner.viewfinder = Some(viewfinder);
            self.begin_loading(&mut inner)
        };
        self.acquire_resources(epoch).await;
    }

    /// Takes the picture, releases the camera and runs recognition.
    pub async fn capture(&self) {
        let (epoch, frame) = {
            let mut inner = self.lock();
            if inner.state != SessionState::LiveViewfinder {
                self.ignored("capture", inner.state);
                return;
            }
            let Some(stream) = inner.stream.take() else {
                self.fail(&mut inner, SessionError::StreamAcquisitionFailed);
                return;
            };

            inner.state = SessionState::Capturing;
            let grabbed = self.media.grab_frame(&stream);
            self.media.release(stream);

            match grabbed {
                Ok(frame) => {
                    inner.frame = Some(frame.clone());
                    self.publish(&inner);
                    (inner.epoch, frame)
                }
                Err(error) => {
                    self.fail(&mut inner, error.into());
                    return;
                }
            }
        };

        let classified = self.classifier.classify(&frame, self.settings.top_k).await;

        let (ticket, term) = {
            let mut inner = self.lock();
            if inner.epoch != epoch {
                self.logger
                    .debug(&format!("Discarding classification of frame {}", frame.id));
                return;
            }

            let candidates = match classified {
                Ok(candidates) => candidates,
                Err(error) => {
                    self.fail(&mut inner, error.into());
                    return;
                }
            };

            let categories = detect_categories(&candidates);
            let Some(term) = categories.first().map(|c| c.search_term.clone()) else {
                self.logger.info(&format!(
                    "No known category among {} classifier labels",
                    candidates.len()
                ));
                self.fail(&mut inner, SessionError::NoRecognizableObject);
                return;
            };

            self.logger.info(&format!(
                "Detected {} categories, searching '{}'",
                categories.len(),
                term
            ));
            inner.categories = categories;
            inner.state = SessionState::ShowingResults;
            (self.begin_search(&mut inner, term.clone()), term)
        };

        self.run_search(epoch, ticket, term).await;
    }

    /// Shows results for another detected category. The newest selection
    /// wins; results of earlier selections arriving later are dropped.
    pub async fn select_category(&self, term: &str) {
        let (epoch, ticket, term) = {
            let mut inner = self.lock();
            if inner.state != SessionState::ShowingResults {
                self.ignored("select_category", inner.state);
                return;
            }
            let Some(term) = inner
                .categories
                .iter()
                .find(|c| c.search_term == term)
                .map(|c| c.search_term.clone())
            else {
                self.logger
                    .debug(&format!("Ignoring unknown category '{}'", term));
                return;
            };
            let ticket = self.begin_search(&mut inner, term.clone());
            (inner.epoch, ticket, term)
        };

        self.run_search(epoch, ticket, term).await;
    }

    /// Drops the current picture and results and goes back to the live
    /// preview with a fresh stream. The classifier stays loaded.
    pub async fn retake(&self) {
        let epoch = {
            let mut inner = self.lock();
            if !matches!(
                inner.state,
                SessionState::ShowingResults | SessionState::Failed
            ) {
                self.ignored("retake", inner.state);
                return;
            }
            self.logger.info("Retaking picture");
            inner.clear_capture();
            self.begin_loading(&mut inner)
        };
        self.acquire_resources(epoch).await;
    }

    /// Ends the session from any state. The camera is released before this
    /// returns and pending work is discarded when it completes.
    pub fn close(&self) {
        let mut inner = self.lock();
        let previous = inner.state;
        self.media.release_opt(inner.stream.take());
        inner.clear_capture();
        inner.viewfinder = None;
        inner.epoch += 1;
        inner.state = SessionState::Idle;
        self.publish(&inner);
        self.logger
            .info(&format!("Camera search closed (was {})", previous));
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &SessionInner) {
        self.updates.send_replace(inner.snapshot());
    }

    fn ignored(&self, operation: &str, state: SessionState) {
        self.logger
            .debug(&format!("Ignoring {} in state {}", operation, state));
    }

    fn begin_loading(&self, inner: &mut SessionInner) -> u64 {
        inner.epoch += 1;
        inner.state = SessionState::LoadingResources;
        self.publish(inner);
        inner.epoch
    }

    fn begin_search(&self, inner: &mut SessionInner, term: String) -> u64 {
        inner.search_ticket += 1;
        inner.active_term = Some(term.clone());
        inner.results = SearchResults::Loading { term };
        self.publish(inner);
        inner.search_ticket
    }

    fn fail(&self, inner: &mut SessionInner, error: SessionError) {
        self.logger
            .warn(&format!("Camera search failed: {}", error));
        self.media.release_opt(inner.stream.take());
        inner.state = SessionState::Failed;
        inner.error = Some(error);
        self.publish(inner);
    }

    async fn acquire_resources(&self, epoch: u64) {
        let (loaded, requested) = tokio::join!(
            self.classifier.ensure_loaded(),
            self.park_stream(epoch)
        );

        let mut inner = self.lock();
        if inner.epoch != epoch {
            self.logger
                .debug("Session moved on while acquiring resources");
            return;
        }

        // Camera errors take precedence over model errors.
        match (loaded, requested) {
            (Ok(()), Ok(())) => {}
            (_, Err(error)) => {
                self.fail(&mut inner, error.into());
                return;
            }
            (Err(error), Ok(())) => {
                self.fail(&mut inner, error.into());
                return;
            }
        }

        let (Some(mut stream), Some(viewfinder)) = (inner.stream.take(), inner.viewfinder.clone())
        else {
            self.fail(&mut inner, SessionError::StreamAcquisitionFailed);
            return;
        };
        if let Err(error) = self.media.attach(&mut stream, &viewfinder) {
            self.media.release(stream);
            self.fail(&mut inner, error.into());
            return;
        }

        inner.stream = Some(stream);
        inner.state = SessionState::LiveViewfinder;
        self.publish(&inner);
    }

    /// Opens the camera and hands the stream to the session as soon as it
    /// arrives, so `close` can release it while the model is still loading.
    async fn park_stream(&self, epoch: u64) -> Result<(), MediaError> {
        let requested = self.media.request_stream().await;

        let mut inner = self.lock();
        if inner.epoch != epoch {
            self.logger
                .debug("Session moved on while opening the camera, releasing it");
            self.media.release_opt(requested.ok());
            return Ok(());
        }
        inner.stream = Some(requested?);
        Ok(())
    }

    async fn run_search(&self, epoch: u64, ticket: u64, term: String) {
        let outcome = self
            .search
            .execute(SearchCatalogParams {
                term: term.clone(),
                limit: self.settings.search_limit,
            })
            .await;

        let mut inner = self.lock();
        if inner.epoch != epoch
            || inner.search_ticket != ticket
            || inner.state != SessionState::ShowingResults
        {
            self.logger
                .debug(&format!("Discarding stale results for '{}'", term));
            return;
        }
        inner.results = SearchResults::Ready {
            term,
            products: outcome.products,
            degraded: outcome.degraded,
        };
        self.publish(&inner);
    }
}
