use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::{ProviderError, RecommendationError};
use crate::domain::recommendation::model::Recommendation;
use crate::domain::recommendation::services::RecommendationProvider;
use crate::domain::recommendation::state::{RequestState, RequestTicket};
use crate::domain::recommendation::store::RequestStateStore;
use crate::domain::recommendation::use_cases::submit::{
    Admission, SubmitRecommendationsParams, SubmitRecommendationsUseCase,
};

pub struct SubmitRecommendationsUseCaseImpl {
    pub provider: Arc<dyn RecommendationProvider>,
    pub store: Arc<RequestStateStore>,
    pub logger: Arc<dyn Logger>,
}

/// Provider call that has been started but not settled.
///
/// Dropping it unsettled (cancelled future, panicking provider) fails the
/// request, so `Loading` never outlives the call.
struct InFlight<'a> {
    store: &'a RequestStateStore,
    ticket: RequestTicket,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(store: &'a RequestStateStore, ticket: RequestTicket) -> Self {
        Self {
            store,
            ticket,
            settled: false,
        }
    }

    fn settle(
        mut self,
        outcome: Result<Vec<Recommendation>, ProviderError>,
    ) -> Option<RequestState> {
        self.settled = true;
        self.store.complete(self.ticket, outcome)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.store.complete(self.ticket, Err(ProviderError::Unknown));
        }
    }
}

#[async_trait]
impl SubmitRecommendationsUseCase for SubmitRecommendationsUseCaseImpl {
    async fn execute(&self, params: SubmitRecommendationsParams) -> RequestState {
        if params.liked_movies.trim().is_empty() {
            self.logger
                .warn("Rejected recommendation request with empty input");
            return self.store.reject(RecommendationError::EmptyInput);
        }

        let ticket = self.store.begin();
        self.dispatch(ticket, params).await
    }

    fn admit(
        &self,
        params: &SubmitRecommendationsParams,
    ) -> Result<Admission, RecommendationError> {
        if params.liked_movies.trim().is_empty() {
            let state = self.store.try_reject(RecommendationError::EmptyInput)?;
            self.logger
                .warn("Rejected recommendation request with empty input");
            return Ok(Admission::Rejected(state));
        }

        let ticket = self.store.try_begin().inspect_err(|_| {
            self.logger
                .warn("Refused recommendation request while another one is loading")
        })?;
        Ok(Admission::Started(ticket))
    }

    async fn dispatch(
        &self,
        ticket: RequestTicket,
        params: SubmitRecommendationsParams,
    ) -> RequestState {
        self.logger.info(&format!(
            "Requesting recommendations {} for: {}",
            ticket, params.liked_movies
        ));

        let in_flight = InFlight::new(&self.store, ticket);
        let outcome = self.provider.recommend(&params.liked_movies).await;

        match &outcome {
            Ok(recommendations) => self.logger.info(&format!(
                "Received {} recommendations for request {}",
                recommendations.len(),
                ticket
            )),
            Err(err) => self.logger.error(&format!(
                "Recommendation request {} failed: {:?}",
                ticket, err
            )),
        }

        match in_flight.settle(outcome) {
            Some(state) => state,
            None => {
                self.logger.debug(&format!(
                    "Discarded stale response for request {}",
                    ticket
                ));
                self.store.snapshot()
            }
        }
    }
}
