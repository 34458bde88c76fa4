//! Tagging record types and relayer errors.

use alloy::primitives::TxHash;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RecordConfig;

/// What to tag, and how to classify the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggingRecordRequest {
    /// Tag strings, in order (e.g. `#rainbow`).
    pub tags: Vec<String>,
    /// The resource being tagged.
    pub target_uri: String,
    /// Record classification (e.g. `Discovery`).
    pub record_type: String,
}

impl From<&RecordConfig> for TaggingRecordRequest {
    fn from(config: &RecordConfig) -> Self {
        Self {
            tags: config.tags.clone(),
            target_uri: config.target_uri.clone(),
            record_type: config.record_type.clone(),
        }
    }
}

/// Descriptor of a created tagging record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggingRecord {
    /// On-chain record ID, as a decimal string.
    pub tagging_record_id: String,
    /// Hash of the transaction that applied the tags.
    pub transaction_hash: TxHash,
    /// Block the transaction was included in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

/// Errors raised while creating a tagging record.
#[derive(Debug, Error)]
pub enum RelayerError {
    /// Connected to the wrong network.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// The same tagger already created this record through this relayer.
    #[error("Tagging record {0} already exists")]
    AlreadyExists(String),

    /// A contract read or simulation failed.
    #[error("{0}")]
    Contract(String),

    /// Broadcasting or awaiting the transaction failed.
    #[error("{0}")]
    Transaction(String),

    /// The transaction was mined but reverted.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}
