//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file (optional)
//!     → loader.rs (read + parse)
//!     → validation.rs (addresses parse, timeouts sane)
//!     → schema.rs types, defaults applied for anything omitted
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ProxyConfig;
