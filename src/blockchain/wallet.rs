//! Ephemeral identity generation.
//!
//! # Security
//! - Key material comes only from the operating-system RNG
//! - Keys are never logged, serialized or written to disk
//! - An identity lives no longer than the value holding it

use alloy::primitives::{Address, B256};
use alloy::signers::local::PrivateKeySigner;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// A single-use keypair and the address derived from it.
#[derive(Clone)]
pub struct Identity {
    signer: PrivateKeySigner,
}

impl Identity {
    /// Generate a fresh identity from OS randomness.
    ///
    /// Fails if the randomness source is unavailable. The caller should treat
    /// that as fatal; nothing here retries.
    pub fn generate() -> BlockchainResult<Self> {
        let mut bytes = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| BlockchainError::Identity(format!("Randomness source unavailable: {}", e)))?;

        let signer = PrivateKeySigner::from_bytes(&B256::from(bytes))
            .map_err(|e| BlockchainError::Identity(format!("Generated key rejected: {}", e)))?;

        tracing::debug!(address = %signer.address(), "Generated ephemeral identity");

        Ok(Self { signer })
    }

    /// Build an identity from a known hex key.
    #[cfg(test)]
    pub(crate) fn from_private_key(private_key_hex: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Identity(format!("Invalid private key format: {}", e)))?;
        Ok(Self { signer })
    }

    /// Address derived from the private key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Signer for authenticated write calls.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
