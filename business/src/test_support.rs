//! Mocks and controllable fakes for the ports, shared by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Semaphore;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::services::CatalogSearchService;
use crate::domain::classifier::errors::ClassifierError;
use crate::domain::classifier::model::{ModelOptions, RawPrediction};
use crate::domain::classifier::services::{ClassificationModel, ModelLoader};
use crate::domain::logger::Logger;
use crate::domain::media::errors::MediaError;
use crate::domain::media::model::{CapturedFrame, StreamConstraints, StreamId, Viewfinder};
use crate::domain::media::services::CameraDevice;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

mock! {
    pub Camera {}

    #[async_trait]
    impl CameraDevice for Camera {
        async fn open_stream(&self, constraints: &StreamConstraints) -> Result<StreamId, MediaError>;
        fn attach(&self, stream: StreamId, viewfinder: &Viewfinder) -> Result<(), MediaError>;
        fn grab_frame(&self, stream: StreamId) -> Result<CapturedFrame, MediaError>;
        fn stop(&self, stream: StreamId);
    }
}

mock! {
    pub Model {}

    #[async_trait]
    impl ClassificationModel for Model {
        async fn classify(
            &self,
            frame: &CapturedFrame,
            top_k: usize,
        ) -> Result<Vec<RawPrediction>, ClassifierError>;
    }
}

mock! {
    pub Loader {}

    #[async_trait]
    impl ModelLoader for Loader {
        async fn load(
            &self,
            options: &ModelOptions,
        ) -> Result<Box<dyn ClassificationModel>, ClassifierError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogSearchService for Catalog {
        async fn search(&self, term: &str, limit: usize) -> Result<Vec<Product>, CatalogError>;
    }
}

pub fn prediction(class_name: &str, probability: f32) -> RawPrediction {
    RawPrediction {
        class_name: class_name.to_string(),
        probability,
    }
}

pub fn sample_frame() -> CapturedFrame {
    CapturedFrame::new(640, 480, "image/jpeg", vec![0xff, 0xd8, 0xff, 0xe0])
}

/// Holds async calls until the test lets them through.
#[derive(Clone, Default)]
pub struct Gate(Option<Arc<Semaphore>>);

impl Gate {
    pub fn closed() -> Self {
        Self(Some(Arc::new(Semaphore::new(0))))
    }

    pub fn open() -> Self {
        Self(None)
    }

    pub fn release(&self, permits: usize) {
        if let Some(semaphore) = &self.0 {
            semaphore.add_permits(permits);
        }
    }

    pub async fn pass(&self) {
        if let Some(semaphore) = &self.0 {
            if let Ok(permit) = semaphore.acquire().await {
                permit.forget();
            }
        }
    }
}

/// Camera that hands out numbered streams and tracks which are still running.
pub struct FakeCamera {
    pub gate: Gate,
    next_id: AtomicU64,
    failure: Mutex<Option<MediaError>>,
    attach_failure: Mutex<Option<MediaError>>,
    running: Mutex<Vec<StreamId>>,
    pub stops: AtomicUsize,
    pub attached: Mutex<Vec<(StreamId, Viewfinder)>>,
}

impl FakeCamera {
    pub fn new() -> Self {
        Self::with_gate(Gate::open())
    }

    pub fn with_gate(gate: Gate) -> Self {
        Self {
            gate,
            next_id: AtomicU64::new(1),
            failure: Mutex::new(None),
            attach_failure: Mutex::new(None),
            running: Mutex::new(Vec::new()),
            stops: AtomicUsize::new(0),
            attached: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_with(&self, error: MediaError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn fail_attach_with(&self, error: MediaError) {
        *self.attach_failure.lock().unwrap() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn running(&self) -> usize {
        self.running.lock().unwrap().len()
    }

    pub fn opened(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst) - 1
    }
}

#[async_trait]
impl CameraDevice for FakeCamera {
    async fn open_stream(&self, _constraints: &StreamConstraints) -> Result<StreamId, MediaError> {
        self.gate.pass().await;
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        let id = StreamId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.running.lock().unwrap().push(id);
        Ok(id)
    }

    fn attach(&self, stream: StreamId, viewfinder: &Viewfinder) -> Result<(), MediaError> {
        if let Some(error) = self.attach_failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.attached
            .lock()
            .unwrap()
            .push((stream, viewfinder.clone()));
        Ok(())
    }

    fn grab_frame(&self, stream: StreamId) -> Result<CapturedFrame, MediaError> {
        if !self.running.lock().unwrap().contains(&stream) {
            return Err(MediaError::unknown("stream is not running"));
        }
        Ok(sample_frame())
    }

    fn stop(&self, stream: StreamId) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.running.lock().unwrap().retain(|s| *s != stream);
    }
}

/// Loader whose model answers with a scripted prediction list.
pub struct FakeLoader {
    pub gate: Gate,
    classify_gate: Gate,
    pub loads: AtomicUsize,
    load_failure: Mutex<Option<ClassifierError>>,
    answer: Arc<Mutex<Result<Vec<RawPrediction>, ClassifierError>>>,
}

impl FakeLoader {
    pub fn answering(predictions: Vec<RawPrediction>) -> Self {
        Self {
            gate: Gate::open(),
            classify_gate: Gate::open(),
            loads: AtomicUsize::new(0),
            load_failure: Mutex::new(None),
            answer: Arc::new(Mutex::new(Ok(predictions))),
        }
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_classify_gate(mut self, gate: Gate) -> Self {
        self.classify_gate = gate;
        self
    }

    pub fn fail_load_with(&self, error: Option<ClassifierError>) {
        *self.load_failure.lock().unwrap() = error;
    }

    pub fn answer(&self, answer: Result<Vec<RawPrediction>, ClassifierError>) {
        *self.answer.lock().unwrap() = answer;
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

struct ScriptedModel {
    gate: Gate,
    answer: Arc<Mutex<Result<Vec<RawPrediction>, ClassifierError>>>,
}

#[async_trait]
impl ClassificationModel for ScriptedModel {
    async fn classify(
        &self,
        _frame: &CapturedFrame,
        top_k: usize,
    ) -> Result<Vec<RawPrediction>, ClassifierError> {
        self.gate.pass().await;
        let mut answer = self.answer.lock().unwrap().clone()?;
        answer.truncate(top_k);
        Ok(answer)
    }
}

#[async_trait]
impl ModelLoader for FakeLoader {
    async fn load(
        &self,
        _options: &ModelOptions,
    ) -> Result<Box<dyn ClassificationModel>, ClassifierError> {
        self.gate.pass().await;
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.load_failure.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(Box::new(ScriptedModel {
            gate: self.classify_gate.clone(),
            answer: Arc::clone(&self.answer),
        }))
    }
}

/// Catalog returning canned products per term and recording every query.
pub struct FakeCatalog {
    pub gate: Gate,
    products: Mutex<HashMap<String, Vec<Product>>>,
    failing: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<(String, usize)>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            gate: Gate::open(),
            products: Mutex::new(HashMap::new()),
            failing: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    pub fn stock(&self, term: &str, products: Vec<Product>) {
        self.products
            .lock()
            .unwrap()
            .insert(term.to_string(), products);
    }

    pub fn fail_on(&self, term: &str) {
        self.failing.lock().unwrap().push(term.to_string());
    }

    pub fn queried_terms(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|(term, _)| term.clone())
            .collect()
    }
}

#[async_trait]
impl CatalogSearchService for FakeCatalog {
    async fn search(&self, term: &str, limit: usize) -> Result<Vec<Product>, CatalogError> {
        self.queries.lock().unwrap().push((term.to_string(), limit));
        self.gate.pass().await;
        if self.failing.lock().unwrap().iter().any(|t| t == term) {
            return Err(CatalogError::network());
        }
        let mut products = self
            .products
            .lock()
            .unwrap()
            .get(term)
            .cloned()
            .unwrap_or_default();
        products.truncate(limit);
        Ok(products)
    }
}
