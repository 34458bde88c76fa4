//! Relayer contract client.
//!
//! # Responsibilities
//! - Derive the tagging record ID the core contract will assign
//! - Refuse records that already exist
//! - Quote the tagging fee and send it with the transaction
//! - Simulate, broadcast and await the `applyTagsWithRawInput` call
//!
//! Tag strings, target URI and record type are passed through untouched;
//! the contracts are the only validators.

use alloy::primitives::{Address, U256};
use alloy::sol;

use crate::blockchain::client::{ChainClient, ClientBundle, WalletClient};
use crate::blockchain::BlockchainError;
use crate::demo::network::TaggingService;
use crate::relayer::types::{RelayerError, TaggingRecord, TaggingRecordRequest};

sol! {
    /// Unprocessed input for one tagging record.
    struct TaggingRecordRawInput {
        string targetURI;
        string[] tagStrings;
        string recordType;
    }

    enum TaggingAction { APPEND, REPLACE, REMOVE }

    /// Core tagging contract (read-only subset).
    #[sol(rpc)]
    interface IETS {
        function computeTaggingRecordIdFromRawInput(TaggingRecordRawInput calldata rawInput, address relayer, address tagger) external view returns (uint256 taggingRecordId);
        function taggingRecordExists(uint256 taggingRecordId) external view returns (bool exists);
        function computeTaggingFee(TaggingRecordRawInput calldata rawInput, TaggingAction action, address relayer, address tagger) external view returns (uint256 fee, uint256 tagCount);
    }

    /// Relayer contract through which taggers apply tags.
    #[sol(rpc)]
    interface IETSRelayer {
        function ets() external view returns (address core);
        function applyTagsWithRawInput(TaggingRecordRawInput[] calldata rawInput) external payable;
    }
}

impl From<&TaggingRecordRequest> for TaggingRecordRawInput {
    fn from(request: &TaggingRecordRequest) -> Self {
        Self {
            targetURI: request.target_uri.clone(),
            tagStrings: request.tags.clone(),
            recordType: request.record_type.clone(),
        }
    }
}

fn contract_error(e: alloy::contract::Error) -> RelayerError {
    RelayerError::Contract(e.to_string())
}

fn chain_error(e: BlockchainError) -> RelayerError {
    match e {
        BlockchainError::ChainMismatch { expected, actual } => {
            RelayerError::ChainMismatch { expected, actual }
        }
        other => RelayerError::Contract(other.to_string()),
    }
}

/// Creates tagging records through a relayer contract.
#[derive(Debug, Clone)]
pub struct RelayerClient {
    public: ChainClient,
    wallet: WalletClient,
    relayer_address: Address,
}

impl RelayerClient {
    /// Create a relayer client. No network calls are made.
    pub fn new(bundle: ClientBundle, relayer_address: Address) -> Self {
        Self {
            public: bundle.public,
            wallet: bundle.wallet,
            relayer_address,
        }
    }

    /// Address of the relayer contract.
    pub fn relayer_address(&self) -> Address {
        self.relayer_address
    }

    /// Create one tagging record, paying the fee from the wallet handle.
    pub async fn apply_tags(
        &self,
        request: &TaggingRecordRequest,
    ) -> Result<TaggingRecord, RelayerError> {
        self.public.verify_chain_id().await.map_err(chain_error)?;

        let tagger = self.wallet.address();
        let raw_input = TaggingRecordRawInput::from(request);

        let relayer = IETSRelayer::new(self.relayer_address, self.public.provider().clone());
        let core_address = relayer.ets().call().await.map_err(contract_error)?;
        let core = IETS::new(core_address, self.public.provider().clone());

        let record_id: U256 = core
            .computeTaggingRecordIdFromRawInput(raw_input.clone(), self.relayer_address, tagger)
            .call()
            .await
            .map_err(contract_error)?;

        if core
            .taggingRecordExists(record_id)
            .call()
            .await
            .map_err(contract_error)?
        {
            return Err(RelayerError::AlreadyExists(record_id.to_string()));
        }

        let quote = core
            .computeTaggingFee(raw_input.clone(), TaggingAction::APPEND, self.relayer_address, tagger)
            .call()
            .await
            .map_err(contract_error)?;

        tracing::debug!(
            tagging_record_id = %record_id,
            fee = %quote.fee,
            tag_count = %quote.tagCount,
            "Tagging fee computed"
        );

        let writer = IETSRelayer::new(self.relayer_address, self.wallet.provider().clone());
        let call = writer
            .applyTagsWithRawInput(vec![raw_input])
            .from(tagger)
            .value(quote.fee);

        // Simulate first so contract rejections surface with their revert reason.
        call.call().await.map_err(contract_error)?;

        let pending = call.send().await.map_err(contract_error)?;
        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, relayer = %self.relayer_address, "Tagging transaction sent");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| RelayerError::Transaction(e.to_string()))?;

        if !receipt.status() {
            return Err(RelayerError::Reverted(tx_hash));
        }

        tracing::info!(
            tagging_record_id = %record_id,
            block_number = ?receipt.block_number,
            "Tagging record created"
        );

        Ok(TaggingRecord {
            tagging_record_id: record_id.to_string(),
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
        })
    }
}

impl TaggingService for RelayerClient {
    async fn create_tagging_record(
        &self,
        request: &TaggingRecordRequest,
    ) -> Result<TaggingRecord, RelayerError> {
        self.apply_tags(request).await
    }
}
