//! Read-only access to contract view methods over NEAR JSON-RPC.
//!
//! Each call is a single `query` request of type `call_function` against the
//! final block. Arguments are JSON encoded and base64 wrapped, the result
//! comes back as JSON bytes. Errors are returned as is, without retries.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;

use crate::{Network, error::RelayError, types};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for view methods of the registry and token contracts.
#[derive(Clone, Debug)]
pub struct ViewClient {
    http: reqwest::Client,
    network: Network,
}

impl ViewClient {
    pub fn new(network: Network) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, network })
    }

    pub fn network(&self) -> &Network { &self.network }

    /// Calls view `method` of `contract` and decodes its JSON result.
    pub async fn call_view<A, R>(&self, contract: &str, method: &str, args: &A) -> Result<R, RelayError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = view_request(contract, method, args)?;
        tracing::debug!(contract, method, "view call");
        let body = self
            .http
            .post(self.network.rpc_url())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        tracing::trace!(contract, method, bytes = body.len(), "view response");
        decode_view_response(&body)
    }

    pub async fn registry<A, R>(&self, method: types::RegistryView, args: &A) -> Result<R, RelayError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call_view(self.network.registry_contract(), method.as_str(), args)
            .await
    }

    pub async fn token<A, R>(&self, method: types::TokenView, args: &A) -> Result<R, RelayError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call_view(self.network.token_contract(), method.as_str(), args)
            .await
    }

    pub async fn appchain(
        &self,
        appchain_id: types::AppchainId,
    ) -> Result<Option<types::RawAppchain>, RelayError> {
        self.registry(types::RegistryView::GetAppchain, &json!({ "appchain_id": appchain_id }))
            .await
    }

    pub async fn appchains(
        &self,
        from_index: u32,
        limit: u32,
    ) -> Result<Vec<types::RawAppchain>, RelayError> {
        self.registry(
            types::RegistryView::GetAppchains,
            &json!({ "from_index": from_index, "limit": limit }),
        )
        .await
    }

    pub async fn num_appchains(&self) -> Result<u32, RelayError> {
        self.registry(types::RegistryView::GetNumAppchains, &json!({}))
            .await
    }

    /// Sequence number of the latest validator set of the appchain.
    pub async fn curr_validator_set_index(
        &self,
        appchain_id: types::AppchainId,
    ) -> Result<types::SeqNum, RelayError> {
        self.registry(
            types::RegistryView::GetCurrValidatorSetIndex,
            &json!({ "appchain_id": appchain_id }),
        )
        .await
    }

    pub async fn validator_set(
        &self,
        appchain_id: types::AppchainId,
        seq_num: types::SeqNum,
    ) -> Result<Option<types::RawValidatorSet>, RelayError> {
        self.registry(
            types::RegistryView::GetValidatorSet,
            &json!({ "appchain_id": appchain_id, "seq_num": seq_num }),
        )
        .await
    }

    /// Total amount staked in the registry, raw fixed-point.
    pub async fn total_staked_balance(&self) -> Result<String, RelayError> {
        self.registry(types::RegistryView::GetTotalStakedBalance, &json!({}))
            .await
    }

    /// Minimum stake to become a validator, raw fixed-point.
    pub async fn minimum_staking_amount(&self) -> Result<String, RelayError> {
        self.registry(types::RegistryView::GetMinimumStakingAmount, &json!({}))
            .await
    }

    /// Token balance of the account, raw fixed-point.
    pub async fn ft_balance_of(&self, account_id: &str) -> Result<String, RelayError> {
        self.token(types::TokenView::FtBalanceOf, &json!({ "account_id": account_id }))
            .await
    }
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<CallResult>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct CallResult {
    #[serde(default)]
    result: Option<Vec<u8>>,
    // Contract panics are reported inside the result by older nodes
    #[serde(default)]
    error: Option<String>,
}

fn view_request<A>(contract: &str, method: &str, args: &A) -> Result<serde_json::Value, RelayError>
where
    A: Serialize + ?Sized,
{
    let args = serde_json::to_vec(args)?;
    Ok(json!({
        "jsonrpc": "2.0",
        "id": "dontcare",
        "method": "query",
        "params": {
            "request_type": "call_function",
            "finality": "final",
            "account_id": contract,
            "method_name": method,
            "args_base64": STANDARD.encode(args),
        },
    }))
}

fn decode_view_response<R: DeserializeOwned>(body: &[u8]) -> Result<R, RelayError> {
    let response: RpcResponse = serde_json::from_slice(body)?;
    if let Some(error) = response.error {
        return Err(RelayError::Rpc(error_message(&error)));
    }
    let result = response
        .result
        .ok_or_else(|| RelayError::Rpc("response carries neither result nor error".to_string()))?;
    if let Some(error) = result.error {
        return Err(RelayError::Rpc(error));
    }
    let bytes = result
        .result
        .ok_or_else(|| RelayError::Rpc("call result is empty".to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Most specific human-readable part of a JSON-RPC error object.
fn error_message(error: &serde_json::Value) -> String {
    ["data", "message"]
        .iter()
        .find_map(|key| error.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .or_else(|| {
            error
                .pointer("/cause/name")
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_body(value: &serde_json::Value) -> Vec<u8> {
        let bytes = serde_json::to_vec(value).unwrap();
        serde_json::to_vec(&json!({
            "jsonrpc": "2.0",
            "id": "dontcare",
            "result": { "result": bytes, "logs": [], "block_height": 100, "block_hash": "abc" },
        }))
        .unwrap()
    }

    #[test]
    fn request_wraps_args_in_base64() {
        let request =
            view_request("registry.testnet", "get_appchain", &json!({ "appchain_id": 1 })).unwrap();
        assert_eq!(request["method"], "query");
        assert_eq!(request["params"]["request_type"], "call_function");
        assert_eq!(request["params"]["finality"], "final");
        assert_eq!(request["params"]["account_id"], "registry.testnet");
        assert_eq!(request["params"]["method_name"], "get_appchain");

        let encoded = request["params"]["args_base64"].as_str().unwrap();
        let args: serde_json::Value =
            serde_json::from_slice(&STANDARD.decode(encoded).unwrap()).unwrap();
        assert_eq!(args, json!({ "appchain_id": 1 }));
    }

    #[test]
    fn decodes_result_bytes() {
        let body = result_body(&json!("1000000000000000000000000"));
        let balance: String = decode_view_response(&body).unwrap();
        assert_eq!(balance, "1000000000000000000000000");

        let body = result_body(&json!(null));
        let missing: Option<types::RawAppchain> = decode_view_response(&body).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn surfaces_rpc_and_contract_errors() {
        let body = serde_json::to_vec(&json!({
            "jsonrpc": "2.0",
            "id": "dontcare",
            "error": {
                "name": "HANDLER_ERROR",
                "cause": { "name": "UNKNOWN_ACCOUNT" },
                "code": -32000,
                "message": "Server error",
                "data": "account registry.testnet does not exist",
            },
        }))
        .unwrap();
        let err = decode_view_response::<String>(&body).unwrap_err();
        assert!(
            matches!(err, RelayError::Rpc(ref msg) if msg == "account registry.testnet does not exist")
        );

        let body = serde_json::to_vec(&json!({
            "result": { "error": "wasm execution failed", "logs": [] },
        }))
        .unwrap();
        let err = decode_view_response::<String>(&body).unwrap_err();
        assert!(matches!(err, RelayError::Rpc(ref msg) if msg == "wasm execution failed"));
    }

    #[test]
    fn malformed_result_is_a_decode_error() {
        let body = result_body(&json!({ "unexpected": true }));
        let err = decode_view_response::<u32>(&body).unwrap_err();
        assert!(matches!(err, RelayError::Decode(_)));
    }
}
