//! Service entry point: config from the environment, hosted-model
//! classifier, HTTP server, ctrl-c shutdown.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mediroute::api::start_api_server;
use mediroute::config::{self, Config};
use mediroute::core_state::CoreState;
use mediroute::routing::GeminiClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Mediroute starting v{}", config::APP_VERSION);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Fail fast: no server without a usable classifier.
    let classifier = match GeminiClient::from_config(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Classifier setup failed: {e}");
            std::process::exit(1);
        }
    };

    let bind_addr = config.bind_addr;
    let core = Arc::new(CoreState::new(config, classifier));

    let mut server = match start_api_server(core, bind_addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.local_addr, "Mediroute ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
    server.shutdown();
}
