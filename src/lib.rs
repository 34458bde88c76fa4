//! Funded-account tagging demo library.

pub mod blockchain;
pub mod config;
pub mod demo;
pub mod http;
pub mod observability;
pub mod relayer;

pub use config::schema::DemoConfig;
pub use demo::{DemoResponse, DemoRunner, RunOutcome};
pub use http::HttpServer;
