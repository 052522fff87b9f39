//! # medreg CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// medreg — healthcare regulatory deadline toolchain.
///
/// Aggregates Federal Register compliance deadlines and state
/// medical-license renewal dates into one calendar.
#[derive(Parser, Debug)]
#[command(name = "medreg", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch, merge, and print the current deadline calendar.
    Fetch(medreg_cli::fetch::FetchArgs),
    /// Print the state licensing rule table.
    States(medreg_cli::states::StatesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch(args) => medreg_cli::fetch::run(args).await,
        Commands::States(args) => medreg_cli::states::run(args),
    }
}
