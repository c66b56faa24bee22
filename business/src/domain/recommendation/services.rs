use async_trait::async_trait;

use super::errors::ProviderError;
use super::model::Recommendation;

/// Service port for the external recommendation provider.
///
/// Receives the user's free-text list of liked movies and returns the
/// suggested movies in the order the provider ranked them.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(&self, liked_movies: &str) -> Result<Vec<Recommendation>, ProviderError>;
}
