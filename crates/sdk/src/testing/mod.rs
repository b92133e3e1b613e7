//! Raw registry record fixtures.
//!
//! Records are built with the shape the registry contract returns and can
//! be broken on purpose to exercise mapping failures. [`MockNode`] serves
//! them over JSON-RPC to test [`crate::state::Reader`] without a network.

mod node;

pub use node::{MockNode, ViewCall};

use crate::types::{self, RawAppchain, RawValidator, RawValidatorSet};

/// Appchain in `Active` status with the given bond and no validators.
pub fn appchain(id: types::AppchainId, bond_tokens: &str) -> RawAppchain {
    RawAppchain {
        id,
        appchain_name: format!("appchain-{id}"),
        founder_id: format!("founder{id}.testnet"),
        website_url: Some(format!("https://appchain-{id}.example.org")),
        github_address: None,
        chain_spec_url: None,
        chain_spec_hash: None,
        boot_nodes: None,
        rpc_endpoint: None,
        bond_tokens: Some(bond_tokens.to_string()),
        validators: Some(Vec::new()),
        status: "Active".to_string(),
        block_height: 1000 + id as types::BlockHeight,
    }
}

/// Validator with weight 1 staked at block 10.
pub fn validator(account_id: &str, staked_amount: &str) -> RawValidator {
    RawValidator {
        account_id: account_id.to_string(),
        staked_amount: Some(staked_amount.to_string()),
        id: format!("0x{}", account_id.len()),
        weight: 1,
        block_height: 10,
    }
}

pub fn validator_set(seq_num: types::SeqNum, validators: Vec<RawValidator>) -> RawValidatorSet {
    RawValidatorSet { seq_num: Some(seq_num), validators: Some(validators) }
}

impl RawAppchain {
    pub fn with_validator(mut self, validator: RawValidator) -> Self {
        self.validators.get_or_insert_with(Vec::new).push(validator);
        self
    }

    pub fn without_bond_tokens(mut self) -> Self {
        self.bond_tokens = None;
        self
    }

    pub fn without_validators(mut self) -> Self {
        self.validators = None;
        self
    }
}

impl RawValidator {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn without_staked_amount(mut self) -> Self {
        self.staked_amount = None;
        self
    }
}
