//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router and wire up middleware (timeout, request ID,
//!   tracing)
//! - Hand every request to the configured `ProxiedDispatch`
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{request_id::SetRequestIdLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ProxyConfig;
use crate::dispatch::ProxiedDispatch;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::response;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatch: Arc<ProxiedDispatch>,
}

/// HTTP server that fronts a [`ProxiedDispatch`].
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a server with the default dispatch wiring: a primary handler
    /// that reports the translated connection facts and, when
    /// `dispatch.expose_errors` is set, an error handler that reports the
    /// failure message.
    pub fn new(config: ProxyConfig) -> Self {
        let dispatch = Self::default_dispatch(&config);
        Self::with_dispatch(config, dispatch)
    }

    /// Create a server around an externally configured dispatch.
    pub fn with_dispatch(config: ProxyConfig, dispatch: ProxiedDispatch) -> Self {
        let state = AppState {
            dispatch: Arc::new(dispatch),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    fn default_dispatch(config: &ProxyConfig) -> ProxiedDispatch {
        let mut dispatch = ProxiedDispatch::new().with_handler(|req| async move {
            metrics::record_translation("ok");
            response::connection_summary(&req)
        });

        if config.dispatch.expose_errors {
            dispatch = dispatch.with_error_handler(|_req, error| async move {
                metrics::record_translation(error.kind());
                response::translation_error(&error)
            });
        }

        dispatch
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Catch-all handler: every request goes through the dispatcher.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = state.dispatch.serve(request).await;

    metrics::record_request(&method, response.status().as_u16(), start_time);
    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "Request dispatched"
    );

    response.into_response()
}
