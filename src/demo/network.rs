//! Seams between the runner and the outside world.
//!
//! The runner only needs a balance lookup and a way to create a tagging
//! record. [`RpcNetwork`] provides both over JSON-RPC; tests substitute
//! in-memory implementations.

use std::future::Future;

use alloy::primitives::{Address, U256};

use crate::blockchain::{BlockchainError, BlockchainResult, ChainClient, ClientBundle, Identity};
use crate::config::{DemoConfig, NetworkConfig};
use crate::relayer::{RelayerClient, RelayerError, TaggingRecord, TaggingRecordRequest};

/// Read-only balance queries.
pub trait BalanceReader: Send + Sync {
    /// Balance of `address` in the chain's smallest unit.
    fn get_balance(&self, address: Address) -> impl Future<Output = BlockchainResult<U256>> + Send;
}

/// Remote service that creates tagging records.
pub trait TaggingService: Send + Sync {
    fn create_tagging_record(
        &self,
        request: &TaggingRecordRequest,
    ) -> impl Future<Output = Result<TaggingRecord, RelayerError>> + Send;
}

/// Handles bound to one identity for one run.
#[derive(Debug, Clone)]
pub struct Connection<R, T> {
    pub ledger: R,
    pub tagger: T,
}

/// Builds per-identity connections.
pub trait Network: Send + Sync {
    type Ledger: BalanceReader;
    type Tagger: TaggingService;

    /// Construct handles for `identity`. Must not perform network I/O.
    fn connect(&self, identity: &Identity) -> BlockchainResult<Connection<Self::Ledger, Self::Tagger>>;
}

impl BalanceReader for ChainClient {
    async fn get_balance(&self, address: Address) -> BlockchainResult<U256> {
        ChainClient::get_balance(self, address).await
    }
}

/// JSON-RPC network with a relayer contract.
#[derive(Debug, Clone)]
pub struct RpcNetwork {
    network: NetworkConfig,
    relayer_address: Address,
}

impl RpcNetwork {
    pub fn new(network: NetworkConfig, relayer_address: Address) -> Self {
        Self {
            network,
            relayer_address,
        }
    }

    /// Build from the `[network]` and `[relayer]` sections.
    pub fn from_config(config: &DemoConfig) -> BlockchainResult<Self> {
        let relayer_address = config.relayer.address.parse().map_err(|e| {
            BlockchainError::InvalidAddress(format!("relayer '{}': {}", config.relayer.address, e))
        })?;
        Ok(Self::new(config.network.clone(), relayer_address))
    }
}

impl Network for RpcNetwork {
    type Ledger = ChainClient;
    type Tagger = RelayerClient;

    fn connect(&self, identity: &Identity) -> BlockchainResult<Connection<ChainClient, RelayerClient>> {
        let bundle = ClientBundle::connect(&self.network, identity)?;
        let ledger = bundle.public.clone();
        let tagger = RelayerClient::new(bundle, self.relayer_address);
        Ok(Connection { ledger, tagger })
    }
}
