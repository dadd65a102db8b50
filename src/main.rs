//! Proxy header translation service.
//!
//! Sits behind a reverse proxy on a trusted hop, validates the
//! `X-Forwarded-*` headers the proxy injects, and serves requests as if the
//! original connection had terminated here.
//!
//! ```text
//! Client ──TLS──▶ reverse proxy ──X-Forwarded-*──▶ this service
//!                                                    │
//!                               forwarded::translate ┤ strip + re-derive
//!                                                    ▼
//!                                          dispatch → handlers
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use proxy_headers::config::{load_config, ProxyConfig};
use proxy_headers::http::HttpServer;
use proxy_headers::lifecycle::Shutdown;
use proxy_headers::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "proxy-headers", about = "Proxy header translation service")]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        expose_errors = config.dispatch.expose_errors,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
