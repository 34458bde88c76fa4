//! Blockchain RPC clients.
//!
//! # Responsibilities
//! - Build a read-only handle for chain queries (balances, chain ID)
//! - Build a write handle that signs with the run's identity
//! - Never touch the network while constructing either handle

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::blockchain::wallet::Identity;
use crate::config::NetworkConfig;

fn parse_rpc_url(rpc_url: &str) -> BlockchainResult<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e)))
}

/// Read-only JSON-RPC client. Needs no credentials.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
    rpc_url: url::Url,
    chain_id: u64,
}

impl ChainClient {
    /// Create a read-only client for the configured network.
    pub fn new(config: &NetworkConfig) -> BlockchainResult<Self> {
        let rpc_url = parse_rpc_url(&config.rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(rpc_url.clone()).erased();

        Ok(Self {
            provider,
            rpc_url,
            chain_id: config.chain_id,
        })
    }

    /// Get the balance of an address in wei.
    pub async fn get_balance(&self, address: Address) -> BlockchainResult<U256> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| BlockchainError::Rpc(format!("Failed to get balance of {}: {}", address, e)))
    }

    /// Get the chain ID reported by the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.provider
            .get_chain_id()
            .await
            .map(ChainId)
            .map_err(|e| BlockchainError::Rpc(format!("Failed to get chain ID: {}", e)))
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Chain ID this client expects.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

/// Write-capable client authenticated as one identity.
#[derive(Clone)]
pub struct WalletClient {
    provider: DynProvider,
    address: Address,
}

impl WalletClient {
    /// Create a client whose transactions are signed by `identity`.
    pub fn new(config: &NetworkConfig, identity: &Identity) -> BlockchainResult<Self> {
        let rpc_url = parse_rpc_url(&config.rpc_url)?;
        let wallet = EthereumWallet::from(identity.signer().clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(rpc_url)
            .erased();

        Ok(Self {
            provider,
            address: identity.address(),
        })
    }

    /// Address that signs and pays for transactions.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

impl std::fmt::Debug for WalletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletClient")
            .field("address", &self.address)
            .finish()
    }
}

/// The pair of handles one run works with.
#[derive(Debug, Clone)]
pub struct ClientBundle {
    pub public: ChainClient,
    pub wallet: WalletClient,
}

impl ClientBundle {
    /// Build both handles. No network calls are made.
    pub fn connect(config: &NetworkConfig, identity: &Identity) -> BlockchainResult<Self> {
        let bundle = Self {
            public: ChainClient::new(config)?,
            wallet: WalletClient::new(config, identity)?,
        };

        tracing::debug!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            address = %bundle.wallet.address(),
            "Client bundle constructed"
        );

        Ok(bundle)
    }
}
