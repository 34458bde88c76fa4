//! The demo orchestrator.
//!
//! One call to [`DemoRunner::run`] is one linear pass:
//!
//! ```text
//! identity → connection → balance query ─┬─ zero ──────▶ Unfunded
//!                                         └─ positive ──▶ submit ─┬─ ok ───▶ Submitted
//!                                                                 └─ error ▶ SubmissionFailed
//! ```
//!
//! Setup and balance-query errors are returned as [`DemoError`]. Everything the
//! submission step raises, panics included, becomes an outcome.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::Identity;
use crate::config::{DemoConfig, IdentityScope};
use crate::demo::error::DemoResult;
use crate::demo::funding::{check_funded, FundingNotice};
use crate::demo::network::{Network, RpcNetwork, TaggingService};
use crate::demo::outcome::RunOutcome;
use crate::observability::metrics;
use crate::relayer::TaggingRecordRequest;

/// Runs the demo against a [`Network`].
#[derive(Debug)]
pub struct DemoRunner<N> {
    network: N,
    request: TaggingRecordRequest,
    notice: FundingNotice,
    link_base_url: String,
    /// Set only for [`IdentityScope::Process`].
    identity: Option<Identity>,
}

impl DemoRunner<RpcNetwork> {
    /// Build a runner that talks JSON-RPC to the configured network.
    pub fn from_config(config: &DemoConfig) -> DemoResult<Self> {
        let network = RpcNetwork::from_config(config)?;
        Self::new(network, config)
    }
}

impl<N: Network> DemoRunner<N> {
    /// Build a runner. With process scope the identity is generated here, once.
    pub fn new(network: N, config: &DemoConfig) -> DemoResult<Self> {
        let identity = match config.demo.identity_scope {
            IdentityScope::Invocation => None,
            IdentityScope::Process => Some(Identity::generate()?),
        };

        Ok(Self {
            network,
            request: TaggingRecordRequest::from(&config.record),
            notice: FundingNotice::from_config(config),
            link_base_url: config.demo.link_base_url.clone(),
            identity,
        })
    }

    /// The long-lived identity, if the runner has one.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Why funding an unfunded address cannot lead to a successful run, if it cannot.
    ///
    /// With invocation scope the key behind a funding notice is dropped as soon
    /// as the run ends.
    pub fn funding_caveat(&self) -> Option<&'static str> {
        match self.identity {
            Some(_) => None,
            None => Some(
                "demo.identity_scope is \"invocation\": every run uses a new address, so funds sent \
                 to an address from a funding notice cannot be spent. Set it to \"process\" to fund \
                 an address and run again",
            ),
        }
    }

    /// Execute one run.
    pub async fn run(&self) -> DemoResult<RunOutcome> {
        let span = tracing::info_span!("demo_run", run_id = %Uuid::new_v4());

        let result = self.run_once().instrument(span.clone()).await;

        span.in_scope(|| match &result {
            Ok(outcome) => {
                tracing::info!(outcome = outcome.label(), "Run finished");
                metrics::record_run(outcome.label());
            }
            Err(e) => {
                tracing::error!(error = %e, "Run aborted");
                metrics::record_run("error");
            }
        });
        result
    }

    async fn run_once(&self) -> DemoResult<RunOutcome> {
        let identity = match &self.identity {
            Some(identity) => identity.clone(),
            None => Identity::generate()?,
        };
        let address = identity.address();

        let connection = self.network.connect(&identity)?;

        if !check_funded(&connection.ledger, address).await? {
            return Ok(RunOutcome::Unfunded {
                address,
                message: self.notice.message(address),
            });
        }

        tracing::info!(
            address = %address,
            tags = ?self.request.tags,
            target_uri = %self.request.target_uri,
            record_type = %self.request.record_type,
            "Submitting tagging record"
        );

        let submission = AssertUnwindSafe(connection.tagger.create_tagging_record(&self.request))
            .catch_unwind()
            .await;

        match submission {
            Ok(Ok(record)) => Ok(RunOutcome::submitted(&record, &self.link_base_url)),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Tagging record submission failed");
                Ok(RunOutcome::failed(&e))
            }
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                tracing::error!(detail = %detail, "Tagging record submission panicked");
                Ok(RunOutcome::unexpected(&detail))
            }
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
