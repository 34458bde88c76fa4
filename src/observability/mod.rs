//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! runner, relayer, http server produce:
//!     → logging.rs (structured log events, one span per run)
//!     → metrics.rs (run counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, serve mode)
//! ```

pub mod logging;
pub mod metrics;
