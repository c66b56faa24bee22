use dotenvy::dotenv;

mod api;
mod config;
mod session;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// CineSuggest entry point
///
/// Loads configuration, wires the recommendation flow and serves the page
/// together with its JSON API.
/// - config/: Application configuration (server, CORS, Gemini)
/// - setup/: Dependency injection and server setup
/// - api/: Page handlers, API routes and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.gemini);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
