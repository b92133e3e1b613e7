use anyhow::Context;
use colored::Colorize;
use octopus_relay_sdk::{num, state::Reader};
use serde_json::json;

pub(crate) async fn render_balance(reader: &Reader, account: &str, json: bool) -> anyhow::Result<()> {
    let network = reader.client().network();
    let balance = reader
        .balance_of(account)
        .await
        .with_context(|| format!("fetching balance of {account}"))?;

    if json {
        return crate::print_json(&json!({
            "account_id": account,
            "balance": num::format_plain(&balance),
            "symbol": network.token_symbol(),
        }));
    }
    println!(
        "{}: {} {}\n    {}",
        account.bold(),
        num::format_plain(&balance).green(),
        network.token_symbol(),
        network.account_url(account).underline()
    );
    Ok(())
}

pub(crate) async fn render_staking(reader: &Reader, json: bool) -> anyhow::Result<()> {
    let symbol = reader.client().network().token_symbol();
    let overview = reader
        .staking_overview()
        .await
        .context("fetching staking overview")?;

    if json {
        return crate::print_json(&json!({
            "total_staked": num::format_plain(&overview.total_staked),
            "minimum_staking_amount": num::format_plain(&overview.minimum_staking_amount),
            "symbol": symbol,
        }));
    }
    println!(
        "{}\n    Total staked: {} {}\n    Minimum stake: {} {}",
        format!("Registry {}", reader.client().network().registry_contract()).blue(),
        num::format_plain(&overview.total_staked).green(),
        symbol,
        num::format_plain(&overview.minimum_staking_amount),
        symbol
    );
    Ok(())
}
