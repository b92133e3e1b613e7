use anyhow::Context;
use colored::Colorize;
use octopus_relay_sdk::{state::Reader, types};
use tabled::{Table, settings::Style};

use crate::args;

pub(crate) async fn render_list(
    reader: &Reader,
    from_index: u32,
    limit: u32,
    json: bool,
) -> anyhow::Result<()> {
    let appchains = if limit == 0 {
        let mut all = reader
            .all_appchains(args::DEFAULT_PAGE_SIZE)
            .await
            .context("fetching appchains")?;
        all.drain(..all.len().min(from_index as usize));
        all
    } else {
        reader
            .appchains(from_index, limit)
            .await
            .context("fetching appchains")?
    };

    if json {
        return crate::print_json(&appchains);
    }
    if appchains.is_empty() {
        println!("No appchains registered");
        return Ok(());
    }
    let mut table = Table::new(&appchains);
    table.with(Style::sharp());
    println!("{}", table);
    Ok(())
}

pub(crate) async fn render(reader: &Reader, id: types::AppchainId, json: bool) -> anyhow::Result<()> {
    let (appchain, cursor) = reader
        .appchain_with_cursor(id)
        .await
        .with_context(|| format!("fetching appchain #{id}"))?
        .ok_or_else(|| anyhow::anyhow!("appchain #{} not found", id))?;

    if json {
        return crate::print_json(&appchain);
    }
    println!("{:#}", appchain);
    println!(
        "    Founder account: {}",
        reader.client().network().account_url(appchain.founder_id()).underline()
    );
    match cursor.seq_num() {
        Some(seq_num) => println!(
            "    Validator set: #{} (see `validators {} --seq-num <N>`)",
            seq_num, id
        ),
        None => println!("    Validator set: {}", "not formed yet".yellow()),
    }
    Ok(())
}
