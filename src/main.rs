use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use minimax_tts_gateway::infrastructure::config::{Config, LogFormat};
use minimax_tts_gateway::infrastructure::http::{build_app, start_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting {} v{} on {}:{}",
        config.app_name,
        env!("CARGO_PKG_VERSION"),
        config.host,
        config.port
    );

    // Create local directories, warn about missing credentials
    config.prepare()?;

    tracing::info!(
        profile = %config.profile,
        base_url = %config.minimax_base_url,
        timeout_secs = config.upstream_timeout_secs,
        upstream_configured = config.credentials().is_some(),
        cors_enabled = config.enable_cors,
        "MiniMax upstream configuration loaded"
    );

    let config = Arc::new(config);
    let app = build_app(config.clone())?;

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.debug {
        "minimax_tts_gateway=debug,tower_http=debug"
    } else {
        "minimax_tts_gateway=info,tower_http=info"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
