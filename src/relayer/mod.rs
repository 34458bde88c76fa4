//! Tagging record submission through a relayer contract.

pub mod client;
pub mod types;

pub use client::RelayerClient;
pub use types::{RelayerError, TaggingRecord, TaggingRecordRequest};
