use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

const SERVICE_NAME: &str = "cinesuggest";

/// CineSuggest health report
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Always `cinesuggest`
    pub service: String,
    /// `healthy` while the server answers
    pub status: String,
    /// Server time, RFC 3339
    pub timestamp: String,
    pub version: String,
}

pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// CineSuggest health check
    ///
    /// Answers as long as the recommendation server is up. It never calls
    /// Gemini, so a missing or rejected API key does not show up here; those
    /// surface as a `failed` state on `/recommendations`.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            service: SERVICE_NAME.to_string(),
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
