//! [`Octopus Relay`] appchain registry SDK.
//!
//! # Overview
//!
//! Display-ready read model of the appchain registry and its staking token.
//!
//! Registry and token contracts report amounts as fixed-point integer strings
//! scaled by `10^24`. [`num::Converter`] converts them to decimals and back,
//! [`state::ReadModelMapper`] applies it to whole appchain and validator
//! records, and [`state::Reader`] fetches records through [`rpc::ViewClient`]
//! and maps them in one step.
//!
//! See `./tests` for examples.
//!
//! # Limitations/follow-ups
//!
//! * Only view methods are supported: change methods require a signing
//!   wallet and are listed in [`types::RegistryChange`] and
//!   [`types::TokenChange`] for reference only.
//!
//! # Features
//!
//! | Feature | Default | Description |
//! | --- | --- | --- |
//! | `display` | yes | Enables [`std::fmt::Display`] and table rendering for read models. |
//! | `testing` | yes | Enables [`testing`] module with raw record fixtures. |
//!
//! [`Octopus Relay`]: https://oct.network

pub mod error;
pub mod num;
pub mod rpc;
pub mod state;
#[cfg(feature = "testing")]
pub mod testing;
pub mod types;

#[derive(Clone, Debug)]
/// NEAR network the registry is deployed on.
pub struct Network {
    network_id: String,
    rpc_url: String,
    registry_contract: types::AccountId,
    token_contract: types::AccountId,
    token_symbol: String,
    token_decimals: u8,
    explorer_url: String,
}

impl Network {
    pub fn testnet() -> Self {
        Self {
            network_id: "testnet".to_string(),
            rpc_url: "https://rpc.testnet.near.org".to_string(),
            registry_contract: "octopus-relay.testnet".to_string(),
            token_contract: "oct-token.testnet".to_string(),
            token_symbol: "OCT".to_string(),
            token_decimals: num::DEFAULT_SCALE_EXPONENT,
            explorer_url: "https://explorer.testnet.near.org".to_string(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn custom(
        network_id: String,
        rpc_url: String,
        registry_contract: types::AccountId,
        token_contract: types::AccountId,
        token_symbol: String,
        token_decimals: u8,
        explorer_url: String,
    ) -> Self {
        Self {
            network_id,
            rpc_url,
            registry_contract,
            token_contract,
            token_symbol,
            token_decimals,
            explorer_url,
        }
    }

    pub fn network_id(&self) -> &str { &self.network_id }

    /// JSON-RPC endpoint of a NEAR node.
    pub fn rpc_url(&self) -> &str { &self.rpc_url }

    /// Account of the appchain registry contract.
    pub fn registry_contract(&self) -> &str { &self.registry_contract }

    /// Account of the staking token contract.
    pub fn token_contract(&self) -> &str { &self.token_contract }

    pub fn token_symbol(&self) -> &str { &self.token_symbol }

    /// Scale exponent of token amounts.
    pub fn token_decimals(&self) -> u8 { self.token_decimals }

    /// Block explorer base URL.
    pub fn explorer_url(&self) -> &str { &self.explorer_url }

    /// Converter of fixed-point <-> decimal numbers for token amounts.
    pub fn converter(&self) -> num::Converter { num::Converter::new(self.token_decimals) }

    /// Explorer page of the account.
    pub fn account_url(&self, account_id: &str) -> String {
        format!("{}/accounts/{}", self.explorer_url, account_id)
    }
}
