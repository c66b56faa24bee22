use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, get, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::page::routes::{index, submit};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Page at `/`, JSON API under `/api`, docs at `/docs` and `/openapi.json`.
    pub fn app(container: DependencyContainer, addr: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.recommendation_api),
            "CineSuggest API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .at("/", get(index).post(submit))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(container.session)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, &addr).with(config.cors).with(Tracing);
        tracing::info!("CineSuggest running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
