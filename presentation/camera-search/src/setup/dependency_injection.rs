use std::sync::Arc;

use anyhow::ensure;
use logger::TracingLogger;

use catalog::client::CatalogClient;
use catalog::product_search::ProductSearchHttp;

use business::application::catalog::search::SearchCatalogUseCaseImpl;
use business::application::classifier::gateway::ClassifierGateway;
use business::application::media::acquisition::MediaAcquisition;
use business::application::session::camera_search::{CameraSearchSession, SessionSettings};
use business::domain::catalog::use_cases::search::SearchCatalogUseCase;
use business::domain::classifier::services::ModelLoader;
use business::domain::logger::Logger;
use business::domain::media::services::CameraDevice;

use crate::config::app_config::AppConfig;
use crate::config::catalog_config::is_valid_api_base;

/// Builds camera search sessions that share one camera, one classifier and
/// one catalog client.
pub struct SessionFactory {
    media: Arc<MediaAcquisition>,
    classifier: Arc<ClassifierGateway>,
    search: Arc<dyn SearchCatalogUseCase>,
    logger: Arc<dyn Logger>,
    settings: SessionSettings,
}

impl SessionFactory {
    pub fn new(
        config: &AppConfig,
        camera: Arc<dyn CameraDevice>,
        loader: Arc<dyn ModelLoader>,
    ) -> anyhow::Result<Self> {
        ensure!(
            is_valid_api_base(&config.catalog.api_base),
            "catalog API base '{}' is not an http(s) URL",
            config.catalog.api_base
        );

        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let catalog = Arc::new(ProductSearchHttp::new(CatalogClient::new(&config.catalog)?));

        // Application services
        let media = Arc::new(MediaAcquisition::new(
            camera,
            config.camera.constraints(),
            logger.clone(),
        ));
        let classifier = Arc::new(ClassifierGateway::new(
            loader,
            config.classifier.model_options(),
            logger.clone(),
        ));
        let search = Arc::new(SearchCatalogUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });

        logger.info(&format!(
            "Camera search ready (catalog {}, top {} labels, {} results)",
            config.catalog.api_base, config.session.top_k, config.session.search_limit
        ));

        Ok(Self {
            media,
            classifier,
            search,
            logger,
            settings: config.session.settings(),
        })
    }

    /// A fresh session in `Idle`. Every session shares the loaded model.
    pub fn open_session(&self) -> Arc<CameraSearchSession> {
        Arc::new(CameraSearchSession::new(
            self.media.clone(),
            self.classifier.clone(),
            self.search.clone(),
            self.logger.clone(),
            self.settings.clone(),
        ))
    }

    pub fn classifier(&self) -> Arc<ClassifierGateway> {
        self.classifier.clone()
    }

    /// Starts loading the model ahead of the first session. Failures are
    /// logged and retried by the next `open`.
    pub async fn preload_classifier(&self) {
        if let Err(error) = self.classifier.ensure_loaded().await {
            self.logger
                .warn(&format!("Classifier preload failed: {}", error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubCamera, stub_loader};
    use business::domain::catalog::model::Product;
    use business::domain::media::model::Viewfinder;
    use business::domain::session::model::{SearchResults, SessionState};
    use std::sync::atomic::Ordering;

    /// A config whose catalog refuses connections.
    fn offline_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.catalog.api_base = "http://127.0.0.1:9".to_string();
        config.catalog.timeout_secs = 2;
        config
    }

    #[test]
    fn should_refuse_catalog_base_without_scheme() {
        let mut config = AppConfig::default();
        config.catalog.api_base = "shop.example.com".to_string();

        let result = SessionFactory::new(&config, Arc::new(StubCamera::new()), stub_loader());

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_share_one_model_between_sessions() {
        let loader = stub_loader();
        let factory =
            SessionFactory::new(&offline_config(), Arc::new(StubCamera::new()), loader.clone())
                .unwrap();

        let first = factory.open_session();
        let second = factory.open_session();
        first.open(Viewfinder::new("first")).await;
        second.open(Viewfinder::new("second")).await;

        assert_eq!(first.state(), SessionState::LiveViewfinder);
        assert_eq!(second.state(), SessionState::LiveViewfinder);
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);

        first.close();
        second.close();
    }

    #[tokio::test]
    async fn should_pass_configured_camera_and_model_options() {
        let camera = Arc::new(StubCamera::new());
        let loader = stub_loader();
        let mut config = offline_config();
        config.camera.width = 1280;
        config.camera.height = 720;
        config.classifier.alpha = 0.75;

        let factory = SessionFactory::new(&config, camera.clone(), loader.clone()).unwrap();
        let session = factory.open_session();
        session.open(Viewfinder::new("preview")).await;

        let requested = camera.constraints.lock().unwrap()[0].clone();
        assert_eq!((requested.width, requested.height), (1280, 720));
        assert!(!requested.audio);
        assert_eq!(loader.options.lock().unwrap().as_ref().unwrap().alpha, 0.75);

        session.close();
        assert_eq!(camera.stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_preload_classifier_before_first_session() {
        let loader = stub_loader();
        let factory =
            SessionFactory::new(&offline_config(), Arc::new(StubCamera::new()), loader.clone())
                .unwrap();

        factory.preload_classifier().await;

        assert!(factory.classifier().is_loaded());
        factory.open_session().open(Viewfinder::new("preview")).await;
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_show_degraded_results_when_catalog_is_unreachable() {
        let factory =
            SessionFactory::new(&offline_config(), Arc::new(StubCamera::new()), stub_loader())
                .unwrap();
        let session = factory.open_session();

        session.open(Viewfinder::new("preview")).await;
        session.capture().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, SessionState::ShowingResults);
        assert_eq!(snapshot.active_term.as_deref(), Some("sac a dos"));
        assert_eq!(
            snapshot.results,
            SearchResults::Ready {
                term: "sac a dos".to_string(),
                products: Vec::<Product>::new(),
                degraded: true,
            }
        );
    }
}
