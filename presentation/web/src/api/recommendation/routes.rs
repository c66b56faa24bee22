use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::{RequestStateResponse, SubmitRecommendationsRequest};
use crate::api::tags::ApiTags;
use crate::session::RecommendationSession;

pub struct RecommendationApi {
    session: Arc<RecommendationSession>,
}

impl RecommendationApi {
    pub fn new(session: Arc<RecommendationSession>) -> Self {
        Self { session }
    }
}

/// Recommendation API
///
/// JSON view of the same request flow the page renders.
#[OpenApi]
impl RecommendationApi {
    /// Current request state
    #[oai(path = "/state", method = "get", tag = "ApiTags::Recommendations")]
    async fn get_state(&self) -> Json<RequestStateResponse> {
        let input = self.session.input().await;
        Json(RequestStateResponse::new(input, &self.session.snapshot()))
    }

    /// Request movie recommendations
    ///
    /// Runs one request cycle and returns the state it ended in. Validation
    /// and provider failures come back as a `failed` state, not as HTTP errors.
    /// The cycle keeps running if the client disconnects; its result is then
    /// available from `/state`.
    #[oai(path = "/recommendations", method = "post", tag = "ApiTags::Recommendations")]
    async fn submit(&self, body: Json<SubmitRecommendationsRequest>) -> SubmitRecommendationsResponse {
        match self.session.submit(body.0.movies).await {
            Ok(cycle) => {
                let state = cycle.settled().await;
                let input = self.session.input().await;
                SubmitRecommendationsResponse::Ok(Json(RequestStateResponse::new(input, &state)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => SubmitRecommendationsResponse::Conflict(json),
                    _ => SubmitRecommendationsResponse::UnprocessableEntity(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitRecommendationsResponse {
    #[oai(status = 200)]
    Ok(Json<RequestStateResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}
