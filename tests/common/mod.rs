//! Shared utilities for integration testing.

use alloy::primitives::{keccak256, Address, B256, U256};
use alloy::sol_types::{SolCall, SolValue};
use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use tagging_demo::config::DemoConfig;
use tagging_demo::relayer::client::{IETSRelayer, IETS};

const GWEI: &str = "0x3b9aca00";
const GAS: &str = "0x30d40";
const BLOCK_NUMBER: &str = "0x10";

/// How the mock node answers.
#[derive(Clone)]
pub struct NodeBehavior {
    /// Hex quantity returned by `eth_getBalance`.
    pub balance: &'static str,
    pub chain_id: u64,
    /// When set, every `eth_call` reverts with this message.
    pub call_error: Option<&'static str>,
    /// ID returned by `computeTaggingRecordIdFromRawInput`.
    pub record_id: u64,
    /// Answer to `taggingRecordExists`.
    pub record_exists: bool,
    /// Fee in wei quoted by `computeTaggingFee`.
    pub fee: u64,
    /// Status of every receipt the node hands out.
    pub receipt_success: bool,
}

impl Default for NodeBehavior {
    fn default() -> Self {
        Self {
            balance: "0x0",
            chain_id: 421_614,
            call_error: None,
            record_id: 42,
            record_exists: false,
            fee: 1_000_000_000_000,
            receipt_success: true,
        }
    }
}

struct NodeState {
    behavior: NodeBehavior,
    calls: Mutex<Vec<String>>,
    applied_values: Mutex<Vec<U256>>,
    sent: Mutex<Vec<B256>>,
}

/// A JSON-RPC endpoint that answers the methods a run uses, including the
/// relayer and core contract reads and a transaction's full lifecycle.
pub struct MockNode {
    pub url: String,
    state: Arc<NodeState>,
}

#[allow(dead_code)]
impl MockNode {
    /// Methods received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.calls.lock().unwrap().clone()
    }

    /// `value` of every `applyTagsWithRawInput` call or gas estimate.
    pub fn applied_values(&self) -> Vec<U256> {
        self.state.applied_values.lock().unwrap().clone()
    }

    /// Hashes of the raw transactions broadcast to the node.
    pub fn sent_transactions(&self) -> Vec<B256> {
        self.state.sent.lock().unwrap().clone()
    }

    /// Default config pointed at this node.
    pub fn config(&self) -> DemoConfig {
        let mut config = DemoConfig::default();
        config.network.rpc_url = self.url.clone();
        config
    }
}

fn core_address() -> Address {
    Address::repeat_byte(0xe7)
}

fn ok(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn err(id: Value, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}

/// Calldata and value of the transaction object in `params[0]`.
fn call_parts(request: &Value) -> (Vec<u8>, U256) {
    let tx = &request["params"][0];
    let input = tx["input"]
        .as_str()
        .or_else(|| tx["data"].as_str())
        .and_then(|hex| alloy::hex::decode(hex).ok())
        .unwrap_or_default();
    let value = tx["value"]
        .as_str()
        .and_then(|v| v.parse::<U256>().ok())
        .unwrap_or(U256::ZERO);
    (input, value)
}

fn selector(input: &[u8]) -> Option<[u8; 4]> {
    input.get(..4).and_then(|s| <[u8; 4]>::try_from(s).ok())
}

fn contract_call(behavior: &NodeBehavior, input: &[u8]) -> Result<Vec<u8>, String> {
    if let Some(message) = behavior.call_error {
        return Err(message.to_string());
    }

    match selector(input) {
        Some(s) if s == IETSRelayer::etsCall::SELECTOR => Ok(core_address().abi_encode()),
        Some(s) if s == IETS::computeTaggingRecordIdFromRawInputCall::SELECTOR => {
            Ok(U256::from(behavior.record_id).abi_encode())
        }
        Some(s) if s == IETS::taggingRecordExistsCall::SELECTOR => {
            Ok(behavior.record_exists.abi_encode())
        }
        Some(s) if s == IETS::computeTaggingFeeCall::SELECTOR => {
            Ok((U256::from(behavior.fee), U256::from(2u64)).abi_encode_params())
        }
        Some(s) if s == IETSRelayer::applyTagsWithRawInputCall::SELECTOR => Ok(Vec::new()),
        _ => Err("execution reverted: unknown selector".to_string()),
    }
}

fn is_apply_tags(input: &[u8]) -> bool {
    selector(input) == Some(IETSRelayer::applyTagsWithRawInputCall::SELECTOR)
}

fn receipt(behavior: &NodeBehavior, hash: &Value) -> Value {
    json!({
        "transactionHash": hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0x11).to_string(),
        "blockNumber": BLOCK_NUMBER,
        "from": Address::ZERO.to_string(),
        "to": DemoConfig::default().relayer.address,
        "cumulativeGasUsed": GAS,
        "gasUsed": GAS,
        "effectiveGasPrice": GWEI,
        "contractAddress": null,
        "logs": [],
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "type": "0x2",
        "status": if behavior.receipt_success { "0x1" } else { "0x0" },
    })
}

async fn rpc(State(state): State<Arc<NodeState>>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();
    state.calls.lock().unwrap().push(method.clone());

    let behavior = &state.behavior;
    let body = match method.as_str() {
        "eth_getBalance" => ok(id, json!(behavior.balance)),
        "eth_chainId" => ok(id, json!(format!("0x{:x}", behavior.chain_id))),
        "eth_call" => {
            let (input, value) = call_parts(&request);
            if is_apply_tags(&input) {
                state.applied_values.lock().unwrap().push(value);
            }
            match contract_call(behavior, &input) {
                Ok(output) => ok(id, json!(alloy::hex::encode_prefixed(output))),
                Err(message) => err(id, 3, &message),
            }
        }
        "eth_estimateGas" => {
            let (input, value) = call_parts(&request);
            if is_apply_tags(&input) {
                state.applied_values.lock().unwrap().push(value);
            }
            ok(id, json!(GAS))
        }
        "eth_getTransactionCount" => ok(id, json!("0x0")),
        "eth_gasPrice" | "eth_maxPriorityFeePerGas" => ok(id, json!(GWEI)),
        "eth_feeHistory" => ok(
            id,
            json!({
                "oldestBlock": "0xf",
                "baseFeePerGas": [GWEI, GWEI],
                "gasUsedRatio": [0.5],
                "reward": [[GWEI]],
            }),
        ),
        "eth_blockNumber" => ok(id, json!(BLOCK_NUMBER)),
        "eth_sendRawTransaction" => {
            let raw = request["params"][0]
                .as_str()
                .and_then(|hex| alloy::hex::decode(hex).ok())
                .unwrap_or_default();
            let hash = keccak256(&raw);
            state.sent.lock().unwrap().push(hash);
            ok(id, json!(hash.to_string()))
        }
        "eth_getTransactionReceipt" => {
            let hash = request["params"][0].clone();
            ok(id, receipt(behavior, &hash))
        }
        _ => err(id, -32601, "method not found"),
    };
    Json(body)
}

/// Start a mock node on an ephemeral port.
pub async fn start_mock_node(behavior: NodeBehavior) -> MockNode {
    let state = Arc::new(NodeState {
        behavior,
        calls: Mutex::new(Vec::new()),
        applied_values: Mutex::new(Vec::new()),
        sent: Mutex::new(Vec::new()),
    });
    let app = Router::new().route("/", post(rpc)).with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockNode {
        url: format!("http://{}", addr),
        state,
    }
}
