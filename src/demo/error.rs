//! Run-level errors.

use thiserror::Error;

use crate::blockchain::BlockchainError;

/// Failures that abort a run before a result can be produced.
///
/// Submission failures are not here: they end the run normally as
/// [`RunOutcome::SubmissionFailed`](crate::demo::RunOutcome::SubmissionFailed).
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

pub type DemoResult<T> = Result<T, DemoError>;
