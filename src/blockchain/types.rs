//! Chain-specific types and error definitions.

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC endpoint is malformed or a request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Key material could not be generated or parsed.
    #[error("Identity error: {0}")]
    Identity(String),

    /// An address string did not parse.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
