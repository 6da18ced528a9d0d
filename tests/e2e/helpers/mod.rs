use anyhow::Result;
use minimax_tts_gateway::domain::tts::DeploymentProfile;
use minimax_tts_gateway::infrastructure::config::{AudioSettings, Config, LogFormat};
use minimax_tts_gateway::infrastructure::http::build_app;
use std::path::PathBuf;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub mod api_client;
pub mod upstream_mocks;

use api_client::TestClient;

pub const TEST_GROUP_ID: &str = "test-group-id";
pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
    /// Stands in for the MiniMax API
    pub upstream: MockServer,
}

impl TestContext {
    /// Start a gateway with the default test configuration
    pub async fn new() -> Result<Self> {
        Self::with_config(|_| {}).await
    }

    /// Start a gateway after adjusting the test configuration
    pub async fn with_config(adjust: impl FnOnce(&mut Config)) -> Result<Self> {
        let upstream = MockServer::start().await;

        let mut config = test_config(&upstream.uri());
        adjust(&mut config);

        let app = build_app(Arc::new(config.clone()))?;

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
            config,
            upstream,
        })
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            TestContext::new()
                .await
                .expect("Failed to start test gateway")
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Unmet wiremock expectations are reported when the mock server drops
        }
    }
}

fn test_config(upstream_url: &str) -> Config {
    Config {
        app_name: "MiniMax TTS Gateway".to_string(),
        debug: false,
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        minimax_group_id: Some(TEST_GROUP_ID.to_string()),
        minimax_api_key: Some(TEST_API_KEY.to_string()),
        minimax_base_url: upstream_url.to_string(),
        upstream_timeout_secs: 1,
        profile: DeploymentProfile::International,
        audio: AudioSettings::default(),
        enable_cors: true,
        static_dir: PathBuf::from("static"),
        logs_dir: PathBuf::from("logs"),
        log_format: LogFormat::Pretty,
    }
}
