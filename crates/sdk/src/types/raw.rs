//! Records as returned by the registry contract view methods.
//!
//! Amounts are raw fixed-point digit strings. The amount fields and the
//! validator sequence are optional here so that a record lacking them is
//! still readable and [`crate::state::ReadModelMapper`] can report exactly
//! which field is missing.

use serde::{Deserialize, Deserializer, Serialize};

/// Appchain as registered in the relay contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAppchain {
    pub id: super::AppchainId,
    pub appchain_name: String,
    pub founder_id: super::AccountId,
    #[serde(default, deserialize_with = "non_empty")]
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub github_address: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub chain_spec_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub chain_spec_hash: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub boot_nodes: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub rpc_endpoint: Option<String>,
    #[serde(default)]
    pub bond_tokens: Option<String>,
    #[serde(default)]
    pub validators: Option<Vec<RawValidator>>,
    pub status: String,
    pub block_height: super::BlockHeight,
}

/// Validator staked on an appchain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValidator {
    pub account_id: super::AccountId,
    #[serde(default)]
    pub staked_amount: Option<String>,
    pub id: String,
    pub weight: u64,
    pub block_height: super::BlockHeight,
}

/// Validator set of an appchain at a particular sequence number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValidatorSet {
    /// Absent in responses of some contract versions.
    #[serde(default)]
    pub seq_num: Option<super::SeqNum>,
    #[serde(default)]
    pub validators: Option<Vec<RawValidator>>,
}

/// The contract stores unset descriptive attributes as empty strings.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_contract_response() {
        let appchain: RawAppchain = serde_json::from_str(
            r#"{
                "id": 3,
                "appchain_name": "barnacle",
                "founder_id": "founder.testnet",
                "website_url": "https://example.org",
                "github_address": "",
                "chain_spec_url": "",
                "chain_spec_hash": "",
                "boot_nodes": null,
                "bond_tokens": "1000000000000000000000000",
                "validators": [{
                    "account_id": "a.testnet",
                    "id": "0x1234",
                    "weight": 100,
                    "block_height": 42,
                    "staked_amount": "100000000000000000000000"
                }],
                "status": "Active",
                "block_height": 40
            }"#,
        )
        .unwrap();

        assert_eq!(appchain.id, 3);
        assert_eq!(appchain.website_url.as_deref(), Some("https://example.org"));
        assert_eq!(appchain.github_address, None);
        assert_eq!(appchain.chain_spec_hash, None);
        assert_eq!(appchain.boot_nodes, None);
        assert_eq!(appchain.rpc_endpoint, None);
        assert_eq!(appchain.bond_tokens.as_deref(), Some("1000000000000000000000000"));

        let validators = appchain.validators.unwrap();
        assert_eq!(validators.len(), 1);
        assert_eq!(validators[0].account_id, "a.testnet");
        assert_eq!(validators[0].staked_amount.as_deref(), Some("100000000000000000000000"));
    }

    #[test]
    fn missing_amount_fields_are_readable() {
        let appchain: RawAppchain = serde_json::from_str(
            r#"{"id": 0, "appchain_name": "x", "founder_id": "f", "status": "Auditing", "block_height": 1}"#,
        )
        .unwrap();
        assert_eq!(appchain.bond_tokens, None);
        assert_eq!(appchain.validators, None);

        let set: RawValidatorSet = serde_json::from_str("{}").unwrap();
        assert_eq!(set.seq_num, None);
        assert_eq!(set.validators, None);
    }
}
