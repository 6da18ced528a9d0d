pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::controllers::{catalog::CatalogController, health::HealthController, tts::TtsController};
use crate::domain::{catalog::CatalogService, tts::TtsService};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{HardcodedCatalogRepository, MinimaxTtsRepository};

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Wire repositories, services and controllers into the application router
pub fn build_app(config: Arc<Config>) -> anyhow::Result<Router> {
    // 1. Repositories
    let tts_repo = Arc::new(MinimaxTtsRepository::new(&config)?);
    let catalog_repo = Arc::new(HardcodedCatalogRepository::new(config.profile));

    // 2. Services
    let catalog_service = Arc::new(CatalogService::new(catalog_repo));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        catalog_service.clone(),
        config.profile,
    ));

    // 3. Controllers
    let health_controller = Arc::new(HealthController::new(
        config.app_name.clone(),
        tts_service.clone(),
    ));
    let tts_controller = Arc::new(TtsController::new(tts_service));
    let catalog_controller = Arc::new(CatalogController::new(catalog_service));

    Ok(create_router(
        &config,
        health_controller,
        tts_controller,
        catalog_controller,
    ))
}

/// Build the router with every route and middleware layer
pub fn create_router(
    config: &Config,
    health_controller: Arc<HealthController>,
    tts_controller: Arc<TtsController>,
    catalog_controller: Arc<CatalogController>,
) -> Router {
    let health_routes = Router::new()
        .route("/", get(HealthController::root))
        .route("/health", get(HealthController::health))
        .route("/health/ready", get(HealthController::health_ready))
        .with_state(health_controller);

    let tts_routes = Router::new()
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let catalog_routes = Router::new()
        .route("/api/voices", get(CatalogController::list_voices))
        .route("/api/models", get(CatalogController::list_models))
        .with_state(catalog_controller);

    let app = Router::new()
        .merge(health_routes)
        .merge(tts_routes)
        .merge(catalog_routes)
        .nest_service("/static", ServeDir::new(&config.static_dir));

    let app = if config.enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware)),
    )
}

/// Start the HTTP server and serve until Ctrl-C
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
