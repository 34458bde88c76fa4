//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! OS randomness
//!     → wallet.rs (ephemeral identity)
//!     → client.rs (read handle + signing write handle)
//!     → relayer / demo runner
//! ```
//!
//! # Security Constraints
//! - Private keys are generated in memory and never leave the process
//! - Never log private keys or sensitive data
//! - Handle construction performs no I/O

pub mod client;
pub mod types;
pub mod wallet;

pub use client::{ChainClient, ClientBundle, WalletClient};
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use wallet::Identity;
