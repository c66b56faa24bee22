use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::input::InputCollector;
use business::domain::recommendation::state::RequestState;
use business::domain::recommendation::store::RequestStateStore;
use business::domain::recommendation::use_cases::submit::{
    Admission, SubmitRecommendationsParams, SubmitRecommendationsUseCase,
};

/// The form's input together with the request flow it drives.
///
/// Shared by the page handlers and the JSON API so both show the same state.
pub struct RecommendationSession {
    input: RwLock<InputCollector>,
    store: Arc<RequestStateStore>,
    submit_use_case: Arc<dyn SubmitRecommendationsUseCase>,
}

/// A request cycle running in its own task.
///
/// Dropping it does not cancel the cycle.
pub struct Cycle {
    handle: JoinHandle<RequestState>,
    store: Arc<RequestStateStore>,
}

impl Cycle {
    /// Waits for the cycle to end and returns the state it left behind.
    pub async fn settled(self) -> RequestState {
        match self.handle.await {
            Ok(state) => state,
            Err(err) => {
                tracing::error!("Recommendation task ended abnormally: {}", err);
                self.store.snapshot()
            }
        }
    }
}

impl RecommendationSession {
    pub fn new(
        store: Arc<RequestStateStore>,
        submit_use_case: Arc<dyn SubmitRecommendationsUseCase>,
    ) -> Self {
        Self {
            input: RwLock::new(InputCollector::new()),
            store,
            submit_use_case,
        }
    }

    pub async fn input(&self) -> String {
        self.input.read().await.value().to_string()
    }

    pub fn snapshot(&self) -> RequestState {
        self.store.snapshot()
    }

    /// Stores `text` as the current input and starts one request cycle with it.
    ///
    /// The state is already `Loading` (or `Failed` for blank input) when this
    /// returns. While another request is loading the submission is refused and
    /// the input is left as it was.
    pub async fn submit(&self, text: String) -> Result<Cycle, RecommendationError> {
        let mut input = self.input.write().await;
        let params = SubmitRecommendationsParams {
            liked_movies: text.clone(),
        };
        let admission = self.submit_use_case.admit(&params)?;
        input.update(text);
        drop(input);

        let handle = match admission {
            Admission::Rejected(state) => tokio::spawn(async move { state }),
            Admission::Started(ticket) => {
                let use_case = self.submit_use_case.clone();
                tokio::spawn(async move { use_case.dispatch(ticket, params).await })
            }
        };

        Ok(Cycle {
            handle,
            store: self.store.clone(),
        })
    }
}
