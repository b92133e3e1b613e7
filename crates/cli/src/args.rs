use std::path::PathBuf;

use clap::{Parser, Subcommand};
use octopus_relay_sdk::types;

pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Parser, Debug)]
#[command(name = "octopus-relay-cli", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// NEAR JSON-RPC endpoint [default: testnet RPC]
    #[arg(long, global = true, env = "OCTOPUS_RPC")]
    pub rpc: Option<String>,

    /// Appchain registry contract account [default: testnet registry]
    #[arg(long, global = true, env = "OCTOPUS_REGISTRY")]
    pub registry: Option<types::AccountId>,

    /// Staking token contract account [default: testnet token]
    #[arg(long, global = true, env = "OCTOPUS_TOKEN")]
    pub token: Option<types::AccountId>,

    /// Scale exponent of token amounts [default: 24]
    #[arg(long, global = true, env = "OCTOPUS_DECIMALS")]
    pub decimals: Option<u8>,

    /// Maximum number of fractional digits to display [default: all]
    #[arg(long, global = true)]
    pub display_places: Option<u8>,

    /// Log filter directives, e.g. `debug` or `octopus_relay_sdk=trace`
    #[arg(long, global = true, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Print JSON instead of tables
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert amounts between fixed-point and display form
    Convert {
        #[command(subcommand)]
        command: ConvertCommands,
    },
    /// Map raw registry appchain JSON (object or array) to the read model
    Normalize {
        /// File to read from [default: stdin]
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List registered appchains
    Appchains {
        /// Index of the first appchain
        #[arg(long, default_value_t = 0)]
        from_index: u32,

        /// Number of appchains to list (0 = all)
        #[arg(long, default_value_t = 0)]
        limit: u32,
    },
    /// Show appchain details and its validators
    Appchain {
        /// Appchain ID
        id: types::AppchainId,
    },
    /// Show validator set of an appchain
    Validators {
        /// Appchain ID
        id: types::AppchainId,

        /// Validator set sequence number [default: latest]
        #[arg(long)]
        seq_num: Option<types::SeqNum>,
    },
    /// Show staking token balance of an account
    Balance {
        /// NEAR account
        account: types::AccountId,
    },
    /// Show registry-wide staking figures
    Staking,
    /// List registry and token contract methods
    Methods,
}

#[derive(Subcommand, Debug)]
pub enum ConvertCommands {
    /// Fixed-point integer string to display decimal
    ToDisplay {
        /// Fixed-point amount, e.g. `1500000000000000000000000`
        raw: String,
    },
    /// Display decimal to fixed-point integer string
    ToFixed {
        /// Decimal amount, e.g. `1.5`
        value: String,
    },
}
