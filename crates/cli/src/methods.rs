use colored::Colorize;
use octopus_relay_sdk::{Network, types};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

pub(crate) fn render(network: &Network, json: bool) -> anyhow::Result<()> {
    let registry = network.registry_contract();
    let token = network.token_contract();

    let methods: Vec<MethodDetails> = types::RegistryView::ALL
        .iter()
        .map(|m| MethodDetails::new(registry, "view", m.as_str()))
        .chain(
            types::RegistryChange::ALL
                .iter()
                .map(|m| MethodDetails::new(registry, "change", m.as_str())),
        )
        .chain(types::TokenView::ALL.iter().map(|m| MethodDetails::new(token, "view", m.as_str())))
        .chain(
            types::TokenChange::ALL
                .iter()
                .map(|m| MethodDetails::new(token, "change", m.as_str())),
        )
        .collect();

    if json {
        return crate::print_json(&methods);
    }

    let rows: Vec<_> = methods
        .into_iter()
        .map(|m| MethodDetails {
            kind: if m.kind == "view" { m.kind.green().to_string() } else { m.kind.yellow().to_string() },
            ..m
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    Ok(())
}

#[derive(Serialize, Tabled)]
struct MethodDetails {
    #[tabled(rename = "Contract")]
    contract: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Method")]
    method: &'static str,
}

impl MethodDetails {
    fn new(contract: &str, kind: &str, method: &'static str) -> Self {
        Self { contract: contract.to_string(), kind: kind.to_string(), method }
    }
}
