use std::sync::Arc;
use std::time::Duration;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::movie_recommender::MovieRecommenderGemini;

use business::application::recommendation::submit::SubmitRecommendationsUseCaseImpl;
use business::domain::recommendation::services::RecommendationProvider;
use business::domain::recommendation::store::RequestStateStore;

use crate::config::gemini_config::GeminiConfig;
use crate::session::RecommendationSession;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
    pub session: Arc<RecommendationSession>,
}

impl DependencyContainer {
    pub fn new(config: &GeminiConfig) -> Self {
        let mut client = GeminiClient::with_timeout(
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        );
        if let Some(base_url) = &config.base_url {
            client = client.base_url(base_url.as_str());
        }
        if let Some(model) = &config.model {
            client = client.model(model.as_str());
        }

        Self::with_provider(Arc::new(MovieRecommenderGemini::new(client)))
    }

    pub fn with_provider(provider: Arc<dyn RecommendationProvider>) -> Self {
        let logger = Arc::new(TracingLogger);
        let store = Arc::new(RequestStateStore::new());

        let submit_use_case = Arc::new(SubmitRecommendationsUseCaseImpl {
            provider,
            store: store.clone(),
            logger,
        });

        let session = Arc::new(RecommendationSession::new(store, submit_use_case));

        Self {
            health_api: crate::api::health::routes::Api::new(),
            recommendation_api: crate::api::recommendation::routes::RecommendationApi::new(
                session.clone(),
            ),
            session,
        }
    }
}
