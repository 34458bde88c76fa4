//! End-to-end runs against a mock JSON-RPC node.

use alloy::primitives::U256;
use tagging_demo::{DemoRunner, RunOutcome};

mod common;

use common::{start_mock_node, NodeBehavior};

#[tokio::test]
async fn test_unfunded_account_gets_instructions() {
    let node = start_mock_node(NodeBehavior::default()).await;
    let runner = DemoRunner::from_config(&node.config()).unwrap();

    let outcome = runner.run().await.unwrap();

    let RunOutcome::Unfunded { address, message } = &outcome else {
        panic!("expected unfunded outcome, got {:?}", outcome);
    };
    assert_eq!(
        message,
        &format!(
            "Please send .0002 Arbitrum Sepolia ETH to the following address: {} then click 'Run Demo' again.",
            address
        )
    );
    assert_eq!(outcome.link(), None);
    assert_eq!(node.calls(), vec!["eth_getBalance"]);
}

#[tokio::test]
async fn test_repeated_unfunded_runs_differ_only_in_address() {
    let node = start_mock_node(NodeBehavior::default()).await;
    let runner = DemoRunner::from_config(&node.config()).unwrap();

    let mut normalized = Vec::new();
    let mut addresses = Vec::new();
    for _ in 0..2 {
        match runner.run().await.unwrap() {
            RunOutcome::Unfunded { address, message } => {
                normalized.push(message.replace(&address.to_string(), "<address>"));
                addresses.push(address);
            }
            other => panic!("expected unfunded outcome, got {:?}", other),
        }
    }

    assert_ne!(addresses[0], addresses[1]);
    assert_eq!(normalized[0], normalized[1]);
}

#[tokio::test]
async fn test_relayer_rejection_becomes_result_text() {
    let node = start_mock_node(NodeBehavior {
        balance: "0x1",
        call_error: Some("execution reverted: relayer paused"),
        ..NodeBehavior::default()
    })
    .await;
    let runner = DemoRunner::from_config(&node.config()).unwrap();

    let outcome = runner.run().await.unwrap();

    assert!(matches!(outcome, RunOutcome::SubmissionFailed { .. }));
    assert!(outcome.result().starts_with("Error creating tagging record: "));
    assert!(outcome.result().contains("relayer paused"));
    assert_eq!(outcome.link(), None);
    let calls = node.calls();
    assert_eq!(calls[..2], ["eth_getBalance", "eth_chainId"]);
    assert!(calls.contains(&"eth_call".to_string()));
    assert!(!calls.contains(&"eth_sendRawTransaction".to_string()));
}

#[tokio::test]
async fn test_funded_run_creates_record() {
    let behavior = NodeBehavior {
        balance: "0x1",
        ..NodeBehavior::default()
    };
    let fee = U256::from(behavior.fee);
    let node = start_mock_node(behavior).await;
    let runner = DemoRunner::from_config(&node.config()).unwrap();

    let outcome = runner.run().await.unwrap();

    assert!(
        matches!(outcome, RunOutcome::Submitted { .. }),
        "expected a created record, got {:?}",
        outcome
    );
    assert_eq!(
        outcome.link(),
        Some("https://app.ets.xyz/explore/tagging-records/42")
    );
    assert!(outcome.result().starts_with("Tagging record created: {"));
    assert!(outcome.result().contains("\"taggingRecordId\": \"42\""));
    assert!(outcome.result().contains("\"blockNumber\": 16"));

    let sent = node.sent_transactions();
    assert_eq!(sent.len(), 1);
    assert!(outcome
        .result()
        .contains(&format!("\"transactionHash\": \"{}\"", sent[0])));

    // The quoted fee travels as the transaction value.
    let values = node.applied_values();
    assert!(!values.is_empty());
    assert!(values.iter().all(|value| *value == fee));
}

#[tokio::test]
async fn test_existing_record_is_not_submitted() {
    let node = start_mock_node(NodeBehavior {
        balance: "0x1",
        record_exists: true,
        ..NodeBehavior::default()
    })
    .await;
    let runner = DemoRunner::from_config(&node.config()).unwrap();

    let outcome = runner.run().await.unwrap();

    assert_eq!(
        outcome.result(),
        "Error creating tagging record: Tagging record 42 already exists"
    );
    assert_eq!(outcome.link(), None);
    assert!(node.applied_values().is_empty());
    assert!(node.sent_transactions().is_empty());
}

#[tokio::test]
async fn test_reverted_transaction_is_a_submission_failure() {
    let node = start_mock_node(NodeBehavior {
        balance: "0x1",
        receipt_success: false,
        ..NodeBehavior::default()
    })
    .await;
    let runner = DemoRunner::from_config(&node.config()).unwrap();

    let outcome = runner.run().await.unwrap();

    let sent = node.sent_transactions();
    assert_eq!(sent.len(), 1);
    assert!(matches!(outcome, RunOutcome::SubmissionFailed { .. }));
    assert_eq!(
        outcome.result(),
        format!("Error creating tagging record: Transaction {} reverted", sent[0])
    );
    assert_eq!(outcome.link(), None);
}

#[tokio::test]
async fn test_wrong_chain_is_a_submission_failure() {
    let node = start_mock_node(NodeBehavior {
        balance: "0xde0b6b3a7640000",
        chain_id: 1,
        ..NodeBehavior::default()
    })
    .await;
    let runner = DemoRunner::from_config(&node.config()).unwrap();

    let outcome = runner.run().await.unwrap();

    assert_eq!(
        outcome.result(),
        "Error creating tagging record: Chain ID mismatch: expected 421614, got 1"
    );
    assert!(!node.calls().contains(&"eth_call".to_string()));
}

#[tokio::test]
async fn test_unreachable_node_is_an_error() {
    let mut config = tagging_demo::DemoConfig::default();
    config.network.rpc_url = "http://127.0.0.1:1".to_string();
    let runner = DemoRunner::from_config(&config).unwrap();

    let result = runner.run().await;
    assert!(result.unwrap_err().to_string().contains("Failed to get balance"));
}
