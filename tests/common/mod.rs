//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use proxy_headers::{HttpServer, ProxiedDispatch, ProxyConfig, Shutdown};

pub const CLIENT_CERT: &str = include_str!("../fixtures/client.pem");
#[allow(dead_code)]
pub const CLIENT_CHAIN: &str = include_str!("../fixtures/client-chain.pem");

/// Percent-encode a PEM bundle the way a proxy puts it on the wire.
pub fn encode_cert_header(pem: &str) -> String {
    percent_encoding::utf8_percent_encode(pem, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// Start a server with the default dispatch wiring on an ephemeral port.
pub async fn spawn_server(config: ProxyConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    (addr, shutdown)
}

/// Start a server around an explicit dispatch on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_server_with_dispatch(
    config: ProxyConfig,
    dispatch: ProxiedDispatch,
) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::with_dispatch(config, dispatch);
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });
    (addr, shutdown)
}

/// A client that will not pick up an ambient proxy from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
