//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that endpoints and addresses parse
//! - Validate value ranges (chain ID non-zero)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DemoConfig → Result<(), Vec<ValidationError>>
//! - Record content (tags, target URI, record type) is left to the relayer

use alloy::primitives::Address;
use std::net::SocketAddr;

use crate::config::schema::DemoConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn error(field: &'static str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field,
        message: message.into(),
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.network.rpc_url.parse::<url::Url>() {
        errors.push(error("network.rpc_url", format!("invalid URL: {}", e)));
    }

    if config.network.chain_id == 0 {
        errors.push(error("network.chain_id", "must be non-zero"));
    }

    if let Err(e) = config.relayer.address.parse::<Address>() {
        errors.push(error("relayer.address", format!("invalid address: {}", e)));
    }

    if config.demo.link_base_url.trim().is_empty() {
        errors.push(error("demo.link_base_url", "must not be empty"));
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(error("server.bind_address", "not a socket address"));
    }

    match config.observability.log_format.as_str() {
        "pretty" | "json" => {}
        other => errors.push(error(
            "observability.log_format",
            format!("unknown format '{}', expected 'pretty' or 'json'", other),
        )),
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(error("observability.metrics_address", "not a socket address"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
