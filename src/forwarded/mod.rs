//! Proxy header translation subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (from the trusted proxy hop)
//!     → translate.rs (validate X-Forwarded-* headers)
//!     → certs.rs (decode PEM blocks, validate X.509 structure)
//!     → Outbound request (headers stripped, Host/RemoteAddr overridden,
//!       TlsConnectionInfo attached when the original hop was HTTPS)
//! ```
//!
//! # Design Decisions
//! - Pure computation: no I/O, no shared state, reentrant by construction
//! - Fail closed: missing headers or an unparseable certificate abort the
//!   whole translation; there is no partially-populated success
//! - Consumed headers never reach downstream handlers, so proxy metadata
//!   cannot be mistaken for re-validated truth
//! - On failure the inbound request is handed back untouched

pub mod certs;
pub mod translate;

pub use translate::{
    translate, RemoteAddr, TlsConnectionInfo, TranslateError, TranslationFailure,
    X_FORWARDED_CLIENT_CERT, X_FORWARDED_FOR, X_FORWARDED_HOST, X_FORWARDED_PROTO,
};
