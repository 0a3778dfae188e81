//! Stub platform collaborators shared by unit tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use business::domain::classifier::errors::ClassifierError;
use business::domain::classifier::model::{ModelOptions, RawPrediction};
use business::domain::classifier::services::{ClassificationModel, ModelLoader};
use business::domain::media::errors::MediaError;
use business::domain::media::model::{CapturedFrame, StreamConstraints, StreamId, Viewfinder};
use business::domain::media::services::CameraDevice;

pub struct StubCamera {
    next_id: AtomicU64,
    pub constraints: Mutex<Vec<StreamConstraints>>,
    pub stops: AtomicUsize,
}

impl StubCamera {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            constraints: Mutex::new(Vec::new()),
            stops: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CameraDevice for StubCamera {
    async fn open_stream(&self, constraints: &StreamConstraints) -> Result<StreamId, MediaError> {
        self.constraints.lock().unwrap().push(constraints.clone());
        Ok(StreamId(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    fn attach(&self, _stream: StreamId, _viewfinder: &Viewfinder) -> Result<(), MediaError> {
        Ok(())
    }

    fn grab_frame(&self, _stream: StreamId) -> Result<CapturedFrame, MediaError> {
        Ok(CapturedFrame::new(640, 480, "image/jpeg", vec![0xff, 0xd8]))
    }

    fn stop(&self, _stream: StreamId) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

struct BackpackModel;

#[async_trait]
impl ClassificationModel for BackpackModel {
    async fn classify(
        &self,
        _frame: &CapturedFrame,
        _top_k: usize,
    ) -> Result<Vec<RawPrediction>, ClassifierError> {
        Ok(vec![RawPrediction {
            class_name: "backpack, knapsack".to_string(),
            probability: 0.91,
        }])
    }
}

pub struct StubLoader {
    pub loads: AtomicUsize,
    pub options: Mutex<Option<ModelOptions>>,
}

#[async_trait]
impl ModelLoader for StubLoader {
    async fn load(
        &self,
        options: &ModelOptions,
    ) -> Result<Box<dyn ClassificationModel>, ClassifierError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        *self.options.lock().unwrap() = Some(options.clone());
        Ok(Box::new(BackpackModel))
    }
}

pub fn stub_loader() -> Arc<StubLoader> {
    Arc::new(StubLoader {
        loads: AtomicUsize::new(0),
        options: Mutex::new(None),
    })
}
