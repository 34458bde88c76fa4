//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! POST /api/run-demo
//!     → handlers.rs (one DemoRunner::run per request)
//!     → DemoResponse as JSON
//! ```

pub mod handlers;
pub mod server;

pub use server::{shutdown_signal, AppState, HttpServer};
