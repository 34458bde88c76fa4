//! Funded-account demo.
//!
//! # Data Flow
//! ```text
//! DemoConfig
//!     → runner.rs (one linear pass per call)
//!         → network.rs (identity-bound handles: balance reader + tagging service)
//!         → funding.rs (zero balance stops the run)
//!     → outcome.rs (RunOutcome → DemoResponse { result, link? })
//! ```
//!
//! # Design Decisions
//! - No shared mutable state between runs; each run builds its own handles
//! - Submission failures are values, not errors
//! - Only setup and balance-query failures escape as `DemoError`

pub mod error;
pub mod funding;
pub mod network;
pub mod outcome;
pub mod runner;

pub use error::{DemoError, DemoResult};
pub use funding::{check_funded, FundingNotice};
pub use network::{BalanceReader, Connection, Network, RpcNetwork, TaggingService};
pub use outcome::{record_link, DemoResponse, RunOutcome};
pub use runner::DemoRunner;
