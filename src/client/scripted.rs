//! An RPC transport that answers from canned replies, for driving `Client` without a cluster.

use {
    crate::{
        client::{client::Client, config::ClientConfig},
        solana::commitment::Commitment,
    },
    async_trait::async_trait,
    serde_json::{json, Value},
    solana_client::{
        client_error::{ClientError, ClientErrorKind},
        nonblocking::rpc_client::RpcClient,
        rpc_client::RpcClientConfig,
        rpc_request::{RpcError, RpcRequest, RpcResponseErrorData},
        rpc_sender::{RpcSender, RpcTransportStats},
    },
    solana_sdk::pubkey::Pubkey,
    std::{
        collections::{HashMap, VecDeque},
        sync::Mutex,
    },
};

pub const NODE_VERSION: &str = "1.17.28";

#[derive(Clone)]
enum Reply {
    Value(Value),
    Error { code: i64, message: String },
}

/// Replies are handed out in order per request; the last one keeps repeating.
#[derive(Default)]
pub struct ScriptedSender {
    replies: Mutex<HashMap<RpcRequest, VecDeque<Reply>>>,
}

impl ScriptedSender {
    pub fn new() -> ScriptedSender {
        ScriptedSender::default()
    }

    pub fn reply(self, request: RpcRequest, value: Value) -> ScriptedSender {
        self.push(request, Reply::Value(value))
    }

    pub fn fail(self, request: RpcRequest, code: i64, message: &str) -> ScriptedSender {
        self.push(
            request,
            Reply::Error {
                code,
                message: message.to_string(),
            },
        )
    }

    pub fn into_client(self) -> Client {
        let config = ClientConfig::new("scripted", Commitment::Confirmed);
        let rpc = RpcClient::new_sender(
            self,
            RpcClientConfig::with_commitment(config.commitment.to_config()),
        );

        Client::with_rpc_client(config, rpc)
    }

    fn push(self, request: RpcRequest, reply: Reply) -> ScriptedSender {
        self.replies
            .lock()
            .unwrap()
            .entry(request)
            .or_default()
            .push_back(reply);
        self
    }

    fn next(&self, request: RpcRequest) -> Option<Reply> {
        let mut replies = self.replies.lock().unwrap();
        let queue = replies.get_mut(&request)?;

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl RpcSender for ScriptedSender {
    async fn send(&self, request: RpcRequest, _params: Value) -> Result<Value, ClientError> {
        match self.next(request) {
            Some(Reply::Value(value)) => Ok(value),
            Some(Reply::Error { code, message }) => {
                Err(ClientErrorKind::RpcError(RpcError::RpcResponseError {
                    code,
                    message,
                    data: RpcResponseErrorData::Empty,
                })
                .into())
            }
            // The RPC client may ask for the node version on its own.
            None if request == RpcRequest::GetVersion => Ok(version(NODE_VERSION)),
            None => {
                let message = format!("no reply scripted for {}", request);
                Err(ClientErrorKind::Custom(message).into())
            }
        }
    }

    fn get_transport_stats(&self) -> RpcTransportStats {
        RpcTransportStats::default()
    }

    fn url(&self) -> String {
        "scripted".to_string()
    }
}

/// `getVersion` result.
pub fn version(solana_core: &str) -> Value {
    json!({ "solana-core": solana_core, "feature-set": 3_580_551_090u32 })
}

/// `getAccountInfo` result for an existing account.
pub fn account(owner: &Pubkey, data: &[u8], executable: bool, lamports: u64) -> Value {
    json!({
        "context": { "slot": 1 },
        "value": {
            "lamports": lamports,
            "data": [base64::encode(data), "base64"],
            "owner": owner.to_string(),
            "executable": executable,
            "rentEpoch": 0,
            "space": data.len(),
        },
    })
}

/// `getAccountInfo` result for an address with no account.
pub fn no_account() -> Value {
    json!({ "context": { "slot": 1 }, "value": null })
}
