//! Scripted in-memory transport for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use tokio::sync::watch;

use crate::{ApiError, ApiRequest, ApiResponse, Transport};

/// A scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Respond with a status and optional body.
    Response(ApiResponse),
    /// Fail before a response exists.
    Error(ApiError),
}

impl MockReply {
    /// A `200` with a JSON body.
    pub fn ok(body: Value) -> Self {
        Self::Response(ApiResponse::ok(body))
    }

    /// Any status with a JSON payload.
    pub fn status(status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::Response(ApiResponse::new(status, Some(body)))
    }

    /// A transport failure.
    pub fn transport_error(message: impl Into<String>) -> Self {
        Self::Error(ApiError::Transport(message.into()))
    }
}

#[derive(Default)]
struct MockState {
    once: HashMap<String, VecDeque<MockReply>>,
    sticky: HashMap<String, MockReply>,
    gates: HashMap<String, watch::Receiver<bool>>,
    requests: Vec<ApiRequest>,
}

/// Holds responses for a path until opened.
#[derive(Debug, Clone)]
pub struct MockGate {
    tx: Arc<watch::Sender<bool>>,
}

impl MockGate {
    /// Let every held and future request through.
    pub fn open(&self) {
        let _ = self.tx.send(true);
    }
}

/// Transport answering from scripted replies keyed by path.
///
/// Requests are recorded when they arrive, before any gate is awaited.
/// Unscripted paths answer `404`.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Reply for every request to `path` once queued replies are used up.
    pub fn respond(&self, path: impl Into<String>, reply: MockReply) {
        self.lock().sticky.insert(path.into(), reply);
    }

    /// Queue a reply used by exactly one request to `path`.
    pub fn respond_once(&self, path: impl Into<String>, reply: MockReply) {
        self.lock()
            .once
            .entry(path.into())
            .or_default()
            .push_back(reply);
    }

    /// Hold requests to `path` until the returned gate is opened.
    pub fn gate(&self, path: impl Into<String>) -> MockGate {
        let (tx, rx) = watch::channel(false);
        self.lock().gates.insert(path.into(), rx);
        MockGate { tx: Arc::new(tx) }
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests received for `path`.
    pub fn request_count(&self, path: &str) -> usize {
        self.lock().requests.iter().filter(|r| r.path == path).count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let path = request.path.clone();
        let gate = {
            let mut state = self.lock();
            state.requests.push(request);
            state.gates.get(&path).cloned()
        };

        if let Some(mut gate) = gate {
            let _ = gate.wait_for(|open| *open).await;
        }

        let reply = {
            let mut state = self.lock();
            let queued = state.once.get_mut(&path).and_then(|queue| queue.pop_front());
            match queued {
                Some(reply) => Some(reply),
                None => state.sticky.get(&path).cloned(),
            }
        };

        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Error(error)) => Err(error),
            None => Ok(ApiResponse::new(StatusCode::NOT_FOUND, None)),
        }
    }
}

/// JSON bodies shaped like real API responses.
pub mod fixtures {
    use serde_json::{json, Value};

    /// A wallet body for `address`.
    pub fn wallet(address: &str) -> Value {
        json!({
            "address": address,
            "factory_address": "0x0000000000756D3E6464f5efe7e413a0Af1C7474",
            "name": "My Wallet",
            "salt": "0x0000000000000000000000000000000000000000000000000000000000000001"
        })
    }

    /// A single-owner configuration body for `address`.
    pub fn configuration(address: &str) -> Value {
        json!({
            "id": "configuration-1",
            "address": address,
            "checkpoint": 0,
            "image_hash": "0xb7f285c774a1c925209bebaab24662b22e7cf32e2f7a412bfcb1bf52294b9ed6",
            "threshold": 1,
            "owners": [{
                "id": "owner-1",
                "address": "0x4fd9D0eE6D6564E80A9Ee00c0163fC952d0A45Ed",
                "index": 0,
                "weight": 1
            }]
        })
    }

    /// A token page with one token.
    pub fn token_page() -> Value {
        json!({
            "balance_usd": 12.5,
            "tokens": [{
                "id": "token-1",
                "address": "0x0000000000000000000000000000000000000000",
                "amount": 5000000000000000.0,
                "balance_usd": 12.5,
                "chain_id": 1,
                "decimals": 18,
                "name": "Ether",
                "symbol": "ETH"
            }]
        })
    }

    /// An NFT page with one NFT.
    pub fn nft_page() -> Value {
        json!({
            "nfts": [{
                "nft_id": "ethereum.0xabc.1",
                "chain": "ethereum",
                "contract_address": "0x0000000000000000000000000000000000000abc",
                "token_id": "1"
            }],
            "next_cursor": null
        })
    }

    /// A count body.
    pub fn count(count: u64) -> Value {
        json!({ "count": count })
    }
}
