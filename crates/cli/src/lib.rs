mod account;
mod appchain;
pub mod args;
mod convert;
mod logging;
mod methods;
mod normalize;
mod validators;

use anyhow::Context;
use args::Cli;
use octopus_relay_sdk::{
    Network,
    num::Converter,
    rpc::ViewClient,
    state::{ReadModelMapper, Reader},
};

use crate::args::Commands;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init(&cli.log_level);

    let network = network(&cli);
    let converter = converter(&cli, &network);
    tracing::debug!(
        rpc = network.rpc_url(),
        registry = network.registry_contract(),
        decimals = converter.decimals(),
        "configured"
    );

    // Offline commands
    match &cli.command {
        Commands::Convert { command } => return convert::render(converter, command, cli.json),
        Commands::Normalize { input } => {
            return normalize::render(ReadModelMapper::new(converter), input.as_deref(), cli.json)
                .await;
        },
        Commands::Methods => return methods::render(&network, cli.json),
        _ => {},
    }

    let client = ViewClient::new(network).context("creating RPC client")?;
    let reader = Reader::new(client).with_mapper(ReadModelMapper::new(converter));

    match &cli.command {
        Commands::Appchains { from_index, limit } => {
            appchain::render_list(&reader, *from_index, *limit, cli.json).await
        },
        Commands::Appchain { id } => appchain::render(&reader, *id, cli.json).await,
        Commands::Validators { id, seq_num } => {
            validators::render(&reader, *id, *seq_num, cli.json).await
        },
        Commands::Balance { account } => account::render_balance(&reader, account, cli.json).await,
        Commands::Staking => account::render_staking(&reader, cli.json).await,
        Commands::Convert { .. } | Commands::Normalize { .. } | Commands::Methods => Ok(()),
    }
}

fn network(cli: &Cli) -> Network {
    let testnet = Network::testnet();
    let is_testnet = cli.rpc.is_none() && cli.registry.is_none() && cli.token.is_none();
    Network::custom(
        if is_testnet { testnet.network_id().to_string() } else { "custom".to_string() },
        cli.rpc.clone().unwrap_or_else(|| testnet.rpc_url().to_string()),
        cli.registry
            .clone()
            .unwrap_or_else(|| testnet.registry_contract().to_string()),
        cli.token.clone().unwrap_or_else(|| testnet.token_contract().to_string()),
        testnet.token_symbol().to_string(),
        cli.decimals.unwrap_or(testnet.token_decimals()),
        testnet.explorer_url().to_string(),
    )
}

fn converter(cli: &Cli, network: &Network) -> Converter {
    let converter = network.converter();
    match cli.display_places {
        Some(places) => converter.with_display_places(places),
        None => converter,
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("encoding JSON")?);
    Ok(())
}
