//! Dispatch of proxied requests to a primary or error handler.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → forwarded::translate
//!     → Ok(outbound)  → primary handler
//!     → Err(failure)  → error handler (inbound request + failure)
//!                     → built-in 400 when no error handler is set
//!     (no primary handler at all → built-in 404, headers never inspected)
//! ```
//!
//! # Design Decisions
//! - Handlers are opaque "one request in, one response out" capabilities,
//!   set once at construction and read-only afterwards
//! - The failure is handed to the error handler as an explicit argument; the
//!   request-extension copy exists only so [`translation_failure`] can answer
//!   "was this request produced by a failed dispatch?"
//! - Each call owns its request and failure scope, so concurrent calls never
//!   interfere and no lookup can return a stale value from another call

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use std::future::Future;

use crate::forwarded::{translate, TranslateError, TranslationFailure};

type Handler = Box<dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;
type ErrorHandler =
    Box<dyn Fn(Request<Body>, TranslateError) -> BoxFuture<'static, Response> + Send + Sync>;

/// Routes proxied requests through header translation to one of two
/// downstream handlers.
///
/// Without a primary handler every request gets a fixed `404 - Not Found`:
/// an unconfigured dispatcher is a deliberate no-op adapter, not something a
/// custom error path may route around. Without an error handler a failed
/// translation gets an opaque `400 - Bad Request`, withholding internal
/// detail from callers by default.
#[derive(Default)]
pub struct ProxiedDispatch {
    handler: Option<Handler>,
    error_handler: Option<ErrorHandler>,
}

impl ProxiedDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handler invoked with the translated request.
    pub fn with_handler<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.handler = Some(Box::new(move |req| Box::pin(handler(req))));
        self
    }

    /// Set the handler invoked with the untranslated request and the
    /// translation failure.
    pub fn with_error_handler<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(Request<Body>, TranslateError) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.error_handler = Some(Box::new(move |req, err| Box::pin(handler(req, err))));
        self
    }

    /// Translate the proxy headers and dispatch to the matching handler.
    pub async fn serve(&self, inbound: Request<Body>) -> Response {
        let Some(handler) = &self.handler else {
            return fallback(StatusCode::NOT_FOUND, "404 - Not Found");
        };

        match translate(inbound) {
            Ok(outbound) => handler(outbound).await,
            Err(TranslationFailure {
                error,
                request: mut inbound,
            }) => match &self.error_handler {
                Some(error_handler) => {
                    inbound.extensions_mut().insert(error);
                    error_handler(inbound, error).await
                }
                None => fallback(StatusCode::BAD_REQUEST, "400 - Bad Request"),
            },
        }
    }
}

/// Retrieve the translation failure attached to a request.
///
/// Returns the failure if-and-only-if the request was routed to an error
/// handler by [`ProxiedDispatch::serve`]; on any other request, including
/// every successfully translated one, it returns `None`.
pub fn translation_failure<B>(request: &Request<B>) -> Option<&TranslateError> {
    request.extensions().get::<TranslateError>()
}

fn fallback(status: StatusCode, body: &'static str) -> Response {
    (status, body).into_response()
}
