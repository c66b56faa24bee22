use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::state::{RequestState, RequestStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum RequestStatusDto {
    #[oai(rename = "idle")]
    Idle,
    #[oai(rename = "loading")]
    Loading,
    #[oai(rename = "succeeded")]
    Succeeded,
    #[oai(rename = "failed")]
    Failed,
}

impl From<RequestStatus> for RequestStatusDto {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Idle => RequestStatusDto::Idle,
            RequestStatus::Loading => RequestStatusDto::Loading,
            RequestStatus::Succeeded => RequestStatusDto::Succeeded,
            RequestStatus::Failed => RequestStatusDto::Failed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SubmitRecommendationsRequest {
    /// Free-text list of movies the user likes
    pub movies: String,
}

#[derive(Debug, Clone, Object)]
pub struct RecommendationResponse {
    /// Movie title
    pub title: String,
    /// Release year
    #[oai(skip_serializing_if_is_none)]
    pub year: Option<String>,
    /// Country of origin
    #[oai(skip_serializing_if_is_none)]
    pub country: Option<String>,
    /// Main genre
    #[oai(skip_serializing_if_is_none)]
    pub genre: Option<String>,
    /// Why the movie was recommended
    #[oai(skip_serializing_if_is_none)]
    pub reason: Option<String>,
    /// Poster image URL
    #[oai(skip_serializing_if_is_none)]
    pub poster_url: Option<String>,
}

impl From<&Recommendation> for RecommendationResponse {
    fn from(r: &Recommendation) -> Self {
        Self {
            title: r.title.clone(),
            year: r.year.clone(),
            country: r.country.clone(),
            genre: r.genre.clone(),
            reason: r.reason.clone(),
            poster_url: r.poster_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RequestStateResponse {
    /// Text currently held by the form
    pub input: String,
    /// Whether a request is in flight
    pub loading: bool,
    /// Current request state
    pub status: RequestStatusDto,
    /// Recommendations of the last successful request, in provider order
    pub recommendations: Vec<RecommendationResponse>,
    /// Message of the last failed request
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl RequestStateResponse {
    pub fn new(input: String, state: &RequestState) -> Self {
        Self {
            input,
            loading: state.is_loading(),
            status: state.status().into(),
            recommendations: state.recommendations().iter().map(Into::into).collect(),
            error: state.error().map(str::to_string),
        }
    }
}
