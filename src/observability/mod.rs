//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http server layer produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, translation outcomes)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - The translation core performs no logging or metrics of its own; both
//!   happen at the server layer around it
//! - Metrics are cheap (atomic increments), enabled separately from logging

pub mod logging;
pub mod metrics;
