//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DemoConfig (validated, immutable)
//!     → owned by the runner and the HTTP state
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an empty (or absent) file is a working config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{
    DemoConfig, IdentityScope, NetworkConfig, ObservabilityConfig, RecordConfig, RelayerConfig,
    RunConfig, ServerConfig,
};
