//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - Shutdown is a broadcast: every long-running task subscribes and stops
//!   when the signal fires
//! - Ctrl+C is wired to the same channel, so tests and the binary share one
//!   shutdown path

pub mod shutdown;

pub use shutdown::Shutdown;
