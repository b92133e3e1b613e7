use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, PoisonError},
};

use axum::{Json, Router, extract::State, routing::post};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::Network;

type Handler = Arc<dyn Fn(&str, &Value) -> Option<Value> + Send + Sync>;

/// View call received by [`MockNode`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewCall {
    pub contract: String,
    pub method: String,
    pub args: Value,
}

/// Local NEAR JSON-RPC node answering `call_function` queries.
///
/// Results come from the handler passed to [`MockNode::start`], `None`
/// makes the node reply with a `MethodNotFound` handler error. The node
/// stops when dropped.
pub struct MockNode {
    addr: SocketAddr,
    calls: Arc<Mutex<Vec<ViewCall>>>,
    server: JoinHandle<()>,
}

#[derive(Clone)]
struct NodeState {
    handler: Handler,
    calls: Arc<Mutex<Vec<ViewCall>>>,
}

impl MockNode {
    pub async fn start<F>(handler: F) -> std::io::Result<Self>
    where
        F: Fn(&str, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let calls = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/", post(query))
            .with_state(NodeState { handler: Arc::new(handler), calls: calls.clone() });
        let server = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(%err, "mock node stopped");
            }
        });

        Ok(Self { addr, calls, server })
    }

    pub fn url(&self) -> String { format!("http://{}", self.addr) }

    /// Network pointing to this node with `registry.test` and `token.test`
    /// contracts and a 24 digit token scale.
    pub fn network(&self) -> Network {
        Network::custom(
            "mock".to_string(),
            self.url(),
            "registry.test".to_string(),
            "token.test".to_string(),
            "OCT".to_string(),
            crate::num::DEFAULT_SCALE_EXPONENT,
            "https://explorer.test".to_string(),
        )
    }

    /// Calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Drop for MockNode {
    fn drop(&mut self) { self.server.abort(); }
}

async fn query(State(state): State<NodeState>, Json(request): Json<Value>) -> Json<Value> {
    let call = view_call(&request);
    let result = call.as_ref().and_then(|call| (state.handler)(&call.method, &call.args));
    if let Some(call) = call {
        state
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    Json(match result {
        Some(value) => json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "result": {
                "result": serde_json::to_vec(&value).unwrap_or_default(),
                "logs": [],
                "block_height": 1,
                "block_hash": "11111111111111111111111111111111",
            },
        }),
        None => json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "error": {
                "name": "HANDLER_ERROR",
                "cause": { "name": "CONTRACT_EXECUTION_ERROR" },
                "code": -32000,
                "message": "Server error",
                "data": "MethodNotFound",
            },
        }),
    })
}

fn view_call(request: &Value) -> Option<ViewCall> {
    let params = request.get("params")?;
    let args = STANDARD
        .decode(params.get("args_base64")?.as_str()?)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or(Value::Null);
    Some(ViewCall {
        contract: params.get("account_id")?.as_str()?.to_string(),
        method: params.get("method_name")?.as_str()?.to_string(),
        args,
    })
}
