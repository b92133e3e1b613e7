use std::path::Path;

use anyhow::Context;
use octopus_relay_sdk::{state::ReadModelMapper, types::RawAppchain};
use serde_json::Value;
use tabled::{Table, settings::Style};
use tokio::io::AsyncReadExt;

/// Maps raw appchain records read from `input` or stdin.
pub(crate) async fn render(mapper: ReadModelMapper, input: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let text = match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("reading stdin")?;
            text
        },
    };

    let value: Value = serde_json::from_str(&text).context("parsing input JSON")?;
    if value.is_array() {
        let raws: Vec<RawAppchain> =
            serde_json::from_value(value).context("decoding appchain records")?;
        let appchains = mapper.appchains(&raws).context("mapping appchain records")?;
        if json {
            return crate::print_json(&appchains);
        }
        let mut table = Table::new(&appchains);
        table.with(Style::sharp());
        println!("{}", table);
    } else {
        let raw: RawAppchain = serde_json::from_value(value).context("decoding appchain record")?;
        let appchain = mapper.appchain(&raw).context("mapping appchain record")?;
        if json {
            return crate::print_json(&appchain);
        }
        println!("{:#}", appchain);
    }
    Ok(())
}
