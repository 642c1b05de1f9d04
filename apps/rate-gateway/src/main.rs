//! Rate Gateway Binary
//!
//! Starts the forex rate aggregation service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rate-gateway
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `PROVIDER_TIMEOUT_SECS`: per-provider request timeout (default: 5)
//! - `FREEFOREXAPI_BASE_URL`: pair-keyed quote API base URL
//! - `EXCHANGERATE_API_BASE_URL`: base-currency table API base URL
//! - `FRANKFURTER_BASE_URL`: conversion API base URL
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;

use anyhow::Context;
use rate_gateway::application::services::RateAggregator;
use rate_gateway::config::GatewayConfig;
use rate_gateway::infrastructure::providers::full_chain;
use rate_gateway::server::{AppState, create_router};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting rate gateway");

    let config = GatewayConfig::from_env();
    log_config(&config);

    let providers = full_chain(&config.providers).context("failed to build provider chain")?;
    let aggregator = RateAggregator::new(providers);
    let app = create_router(AppState::new(aggregator));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.server.http_port)
        .parse()
        .context("invalid HTTP listen address")?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /forex-prices?pairs=EURUSD,GBPUSD");

    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind HTTP listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Rate gateway stopped");
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(
                    "rate_gateway=info"
                        .parse()
                        .expect("static directive 'rate_gateway=info' is valid"),
                )
                .add_directive(
                    "tower_http=info"
                        .parse()
                        .expect("static directive 'tower_http=info' is valid"),
                ),
        )
        .init();
}

/// Log the parsed configuration.
fn log_config(config: &GatewayConfig) {
    tracing::info!(
        http_port = config.server.http_port,
        provider_timeout_secs = config.providers.timeout_secs,
        freeforexapi = %config.providers.freeforexapi_base_url,
        exchangerate_api = %config.providers.exchangerate_api_base_url,
        frankfurter = %config.providers.frankfurter_base_url,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; failing fast at startup
/// beats a process that cannot respond to termination signals.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
