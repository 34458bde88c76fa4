//! Run outcomes and their display form.

use std::fmt;

use serde::{Deserialize, Serialize};

use alloy::primitives::Address;

use crate::relayer::{RelayerError, TaggingRecord};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The identity holds no funds; nothing was submitted.
    Unfunded { address: Address, message: String },
    /// The record was created.
    Submitted { result: String, link: String },
    /// Submission was attempted and failed.
    SubmissionFailed { result: String },
}

impl RunOutcome {
    /// Build the success outcome: pretty JSON of the record plus its explorer link.
    pub fn submitted(record: &TaggingRecord, link_base_url: &str) -> Self {
        Self::rendered(
            serde_json::to_string_pretty(record),
            record_link(link_base_url, &record.tagging_record_id),
        )
    }

    /// A record that cannot be rendered still ends the run as a failed submission.
    fn rendered(json: Result<String, serde_json::Error>, link: String) -> Self {
        match json {
            Ok(json) => Self::Submitted {
                result: format!("Tagging record created: {}", json),
                link,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Tagging record could not be rendered");
                Self::failed(&e)
            }
        }
    }

    /// The submission returned an error.
    pub fn failed(error: &impl fmt::Display) -> Self {
        Self::SubmissionFailed {
            result: format!("Error creating tagging record: {}", error),
        }
    }

    /// The submission panicked; `detail` is the best-effort text of the payload.
    pub fn unexpected(detail: &str) -> Self {
        Self::SubmissionFailed {
            result: format!("An unexpected error occurred: {}", detail),
        }
    }

    pub fn result(&self) -> &str {
        match self {
            Self::Unfunded { message, .. } => message.as_str(),
            Self::Submitted { result, .. } | Self::SubmissionFailed { result } => result.as_str(),
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Submitted { link, .. } => Some(link.as_str()),
            _ => None,
        }
    }

    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unfunded { .. } => "unfunded",
            Self::Submitted { .. } => "submitted",
            Self::SubmissionFailed { .. } => "submission_failed",
        }
    }
}

/// `{ result, link? }` as returned by the CLI and HTTP surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoResponse {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl From<RunOutcome> for DemoResponse {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Unfunded { message, .. } => Self {
                result: message,
                link: None,
            },
            RunOutcome::Submitted { result, link } => Self {
                result,
                link: Some(link),
            },
            RunOutcome::SubmissionFailed { result } => Self { result, link: None },
        }
    }
}

/// `<base>/<id>`, tolerating a trailing slash on the base.
pub fn record_link(base_url: &str, record_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), record_id)
}
