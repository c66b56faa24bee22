use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::state::{RequestState, RequestTicket};

pub struct SubmitRecommendationsParams {
    pub liked_movies: String,
}

/// Outcome of admitting a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// Validation failed; the state already holds the message.
    Rejected(RequestState),
    /// The request is loading under this ticket and still has to be dispatched.
    Started(RequestTicket),
}

#[async_trait]
pub trait SubmitRecommendationsUseCase: Send + Sync {
    /// Runs one request cycle and returns the state it ended in.
    ///
    /// A newer submission supersedes an older one still in flight.
    async fn execute(&self, params: SubmitRecommendationsParams) -> RequestState;

    /// Validates `params` and moves to `Loading`, refusing with
    /// [`RecommendationError::AlreadyLoading`] while another request is loading.
    fn admit(&self, params: &SubmitRecommendationsParams) -> Result<Admission, RecommendationError>;

    /// Calls the provider for an admitted request and settles it.
    async fn dispatch(&self, ticket: RequestTicket, params: SubmitRecommendationsParams) -> RequestState;
}
