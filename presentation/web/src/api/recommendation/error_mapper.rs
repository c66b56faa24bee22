use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RecommendationError::EmptyInput => (StatusCode::UNPROCESSABLE_ENTITY, "ValidationError"),
            RecommendationError::AlreadyLoading => (StatusCode::CONFLICT, "ConflictError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
