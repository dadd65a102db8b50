//! Proxy header translation layer.
//!
//! Reconstructs the semantics of the original client connection from the
//! `X-Forwarded-*` headers a reverse proxy injects, and dispatches the
//! translated request to downstream handlers. Malformed or missing headers
//! fail closed, and consumed headers never leak downstream.

// Core
pub mod dispatch;
pub mod forwarded;

// Serving
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use dispatch::{translation_failure, ProxiedDispatch};
pub use forwarded::{translate, RemoteAddr, TlsConnectionInfo, TranslateError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
