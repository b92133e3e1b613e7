use clap::Parser;

#[tokio::main]
async fn main() {
    if let Err(err) = octopus_relay_cli::run(octopus_relay_cli::args::Cli::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
