use fastnum::UD256;
use serde::Serialize;

use super::Validator;
use crate::{num, types};

/// Appchain read model: the registry record with amounts in display units.
///
/// Fields keep the names and order of [`types::RawAppchain`].
#[derive(Clone, PartialEq, Serialize, derive_more::Debug)]
pub struct Appchain {
    id: types::AppchainId,
    appchain_name: String,
    founder_id: types::AccountId,
    website_url: Option<String>,
    github_address: Option<String>,
    chain_spec_url: Option<String>,
    chain_spec_hash: Option<String>,
    boot_nodes: Option<String>,
    rpc_endpoint: Option<String>,
    #[debug("{bond_tokens}")]
    #[serde(serialize_with = "num::serialize_decimal")]
    bond_tokens: UD256,
    validators: Vec<Validator>,
    status: String,
    block_height: types::BlockHeight,
}

impl Appchain {
    pub(crate) fn from_raw(
        raw: &types::RawAppchain,
        bond_tokens: UD256,
        validators: Vec<Validator>,
    ) -> Self {
        Self {
            id: raw.id,
            appchain_name: raw.appchain_name.clone(),
            founder_id: raw.founder_id.clone(),
            website_url: raw.website_url.clone(),
            github_address: raw.github_address.clone(),
            chain_spec_url: raw.chain_spec_url.clone(),
            chain_spec_hash: raw.chain_spec_hash.clone(),
            boot_nodes: raw.boot_nodes.clone(),
            rpc_endpoint: raw.rpc_endpoint.clone(),
            bond_tokens,
            validators,
            status: raw.status.clone(),
            block_height: raw.block_height,
        }
    }

    pub fn id(&self) -> types::AppchainId { self.id }

    pub fn appchain_name(&self) -> &str { &self.appchain_name }

    /// Account that registered the appchain.
    pub fn founder_id(&self) -> &str { &self.founder_id }

    pub fn website_url(&self) -> Option<&str> { self.website_url.as_deref() }

    pub fn github_address(&self) -> Option<&str> { self.github_address.as_deref() }

    pub fn chain_spec_url(&self) -> Option<&str> { self.chain_spec_url.as_deref() }

    pub fn chain_spec_hash(&self) -> Option<&str> { self.chain_spec_hash.as_deref() }

    pub fn boot_nodes(&self) -> Option<&str> { self.boot_nodes.as_deref() }

    pub fn rpc_endpoint(&self) -> Option<&str> { self.rpc_endpoint.as_deref() }

    /// Tokens bonded by the founder on registration.
    pub fn bond_tokens(&self) -> UD256 { self.bond_tokens }

    pub fn validators(&self) -> &[Validator] { &self.validators }

    /// Registry lifecycle status, e.g. `Auditing`, `Staging` or `Active`.
    pub fn status(&self) -> &str { &self.status }

    /// Relay block the record was last updated at.
    pub fn block_height(&self) -> types::BlockHeight { self.block_height }

    pub fn is_active(&self) -> bool { self.status == "Active" }

    /// Total stake of appchain validators.
    pub fn total_staked(&self) -> UD256 { self.validators.iter().map(|v| v.staked_amount()).sum() }
}

#[cfg(feature = "display")]
fn colored_status(status: &str) -> colored::ColoredString {
    use colored::Colorize;

    match status {
        "Active" => status.green(),
        "Frozen" | "Broken" => status.bright_red(),
        _ => status.yellow(),
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Appchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use colored::Colorize;
        use itertools::Itertools;
        use tabled::{Table, settings::Style};

        writeln!(
            f,
            "{} {} [{}] at block #{}\n    Founder: {} | Bonded: {} | Validators: {} | Staked: {}",
            format!("Appchain #{}", self.id).blue(),
            self.appchain_name.bold(),
            colored_status(&self.status),
            self.block_height,
            self.founder_id,
            num::format_plain(&self.bond_tokens).green(),
            self.validators.len(),
            num::format_plain(&self.total_staked()),
        )?;

        let links = [
            ("Website", self.website_url()),
            ("Github", self.github_address()),
            ("Chain spec", self.chain_spec_url()),
            ("Chain spec hash", self.chain_spec_hash()),
            ("Boot nodes", self.boot_nodes()),
            ("RPC endpoint", self.rpc_endpoint()),
        ]
        .into_iter()
        .map(|(label, value)| format!("    {}: {}", label, value.unwrap_or("Not Provided")))
        .join("\n");
        writeln!(f, "{links}")?;

        // Render validators in alternate mode
        if f.alternate() && !self.validators.is_empty() {
            let mut table = Table::new(&self.validators);
            table.with(Style::sharp());
            table.fmt(f)
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "display")]
impl tabled::Tabled for Appchain {
    const LENGTH: usize = 7;

    fn fields(&self) -> Vec<std::borrow::Cow<'_, str>> {
        use colored::Colorize;

        vec![
            self.id.to_string().into(),
            self.appchain_name.as_str().into(),
            self.founder_id.as_str().into(),
            colored_status(&self.status).to_string().into(),
            num::format_plain(&self.bond_tokens).green().to_string().into(),
            self.validators.len().to_string().into(),
            format!("#{}", self.block_height).into(),
        ]
    }

    fn headers() -> Vec<std::borrow::Cow<'static, str>> {
        vec![
            "ID".into(),
            "Name".into(),
            "Founder".into(),
            "Status".into(),
            "Bonded".into(),
            "Validators".into(),
            "Block Height".into(),
        ]
    }
}
