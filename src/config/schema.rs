//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the tagging demo.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Target network (RPC endpoint, chain ID).
    pub network: NetworkConfig,

    /// Relayer contract settings.
    pub relayer: RelayerConfig,

    /// The tagging record submitted on every funded run.
    pub record: RecordConfig,

    /// Funding message, deep links and identity lifetime.
    pub demo: RunConfig,

    /// HTTP surface settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Network connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Human-readable network name, used in the funding message.
    pub name: String,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID (421614 for Arbitrum Sepolia).
    pub chain_id: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "Arbitrum Sepolia".to_string(),
            rpc_url: "https://sepolia-rollup.arbitrum.io/rpc".to_string(),
            chain_id: 421_614,
        }
    }
}

/// Relayer contract settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayerConfig {
    /// Address of the relayer contract that applies tags on the tagger's behalf.
    pub address: String,
}

impl Default for RelayerConfig {
    fn default() -> Self {
        Self {
            address: "0xa01c9cb373c5e29934b92e5afa6a78e3d590340b".to_string(),
        }
    }
}

/// Content of the tagging record.
///
/// None of these values are checked locally; the relayer decides what it accepts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecordConfig {
    pub tags: Vec<String>,
    pub target_uri: String,
    pub record_type: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            tags: vec!["#rainbow".to_string(), "#unicorn".to_string()],
            target_uri: "https://uniswap.com".to_string(),
            record_type: "Discovery".to_string(),
        }
    }
}

/// How long a generated identity lives.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityScope {
    /// A fresh identity for every run.
    #[default]
    Invocation,
    /// One identity per runner, reused by every run of that runner.
    ///
    /// The only scope in which funding the address from a funding notice lets
    /// a later run submit.
    Process,
}

/// Run settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Amount of native token the funding message asks for (display only).
    pub funding_amount: String,

    /// Base URL of the record explorer; the record ID is appended as a path segment.
    pub link_base_url: String,

    /// Identity lifetime.
    pub identity_scope: IdentityScope,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            funding_amount: ".0002".to_string(),
            link_base_url: "https://app.ets.xyz/explore/tagging-records".to_string(),
            identity_scope: IdentityScope::Invocation,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,

    /// Enable the Prometheus metrics endpoint (serve mode only).
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
