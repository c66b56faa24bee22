use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use poem::Endpoint;
use poem::test::TestClient;
use tokio::sync::Notify;

use business::domain::recommendation::errors::ProviderError;
use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::services::RecommendationProvider;

use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::server::Server;

/// Provider answering every call with the same outcome.
pub struct StubProvider {
    outcome: Result<Vec<Recommendation>, ProviderError>,
    calls: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
}

impl StubProvider {
    pub fn returning(outcome: Result<Vec<Recommendation>, ProviderError>) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            gate: None,
        }
    }

    /// Holds every call until [`gate`](Self::gate) is notified.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone().unwrap_or_default()
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl RecommendationProvider for StubProvider {
    async fn recommend(&self, _: &str) -> Result<Vec<Recommendation>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcome.clone()
    }
}

pub fn test_app(provider: StubProvider) -> impl Endpoint {
    let container = DependencyContainer::with_provider(Arc::new(provider));
    Server::app(container, "localhost")
}

/// Polls `/api/state` until no request is loading.
pub async fn wait_until_settled<E: Endpoint>(cli: &TestClient<E>) {
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            let json = cli.get("/api/state").send().await.json().await;
            if !json.value().object().get("loading").bool() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("request did not settle");
}
