//! Response construction for the built-in handlers.
//!
//! # Responsibilities
//! - Report the translated connection facts back to the caller (the default
//!   primary handler used by the binary)
//! - Report a translation failure when error exposure is configured

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::forwarded::{
    RemoteAddr, TlsConnectionInfo, TranslateError, X_FORWARDED_CLIENT_CERT, X_FORWARDED_FOR,
    X_FORWARDED_HOST, X_FORWARDED_PROTO,
};

/// Summarize what translation recovered from the proxy headers.
///
/// `residual_forwarded_headers` counts X-Forwarded-* headers still present;
/// on any translated request that consumed them it is zero.
pub fn connection_summary(request: &Request<Body>) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let remote_addr = request
        .extensions()
        .get::<RemoteAddr>()
        .map(|r| r.0.as_str())
        .unwrap_or_default();
    let tls = request.extensions().get::<TlsConnectionInfo>();
    let residual = [
        X_FORWARDED_HOST,
        X_FORWARDED_FOR,
        X_FORWARDED_PROTO,
        X_FORWARDED_CLIENT_CERT,
    ]
    .iter()
    .filter(|name| request.headers().contains_key(**name))
    .count();

    Json(json!({
        "host": host,
        "remote_addr": remote_addr,
        "tls": tls.is_some(),
        "client_certificates": tls.map(|t| t.peer_certificates.len()).unwrap_or(0),
        "residual_forwarded_headers": residual,
    }))
    .into_response()
}

/// Report a translation failure with its message, status 400.
pub fn translation_error(error: &TranslateError) -> Response {
    (StatusCode::BAD_REQUEST, error.to_string()).into_response()
}
