//! Funding gate.

use alloy::primitives::{Address, U256};

use crate::blockchain::BlockchainResult;
use crate::config::DemoConfig;
use crate::demo::network::BalanceReader;

/// Returns true iff `address` holds a strictly positive balance.
///
/// One query, no retries; RPC failures are returned to the caller.
pub async fn check_funded<R>(reader: &R, address: Address) -> BlockchainResult<bool>
where
    R: BalanceReader + ?Sized,
{
    let balance = reader.get_balance(address).await?;
    tracing::info!(address = %address, balance = %balance, "Balance checked");
    Ok(balance > U256::ZERO)
}

/// Text shown when the identity has nothing to pay with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingNotice {
    amount: String,
    network_name: String,
}

impl FundingNotice {
    pub fn new(amount: impl Into<String>, network_name: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            network_name: network_name.into(),
        }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(&config.demo.funding_amount, &config.network.name)
    }

    pub fn message(&self, address: Address) -> String {
        format!(
            "Please send {} {} ETH to the following address: {} then click 'Run Demo' again.",
            self.amount, self.network_name, address
        )
    }
}
