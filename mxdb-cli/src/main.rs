//! mxdb CLI - Command-line interface for MongoDB connection descriptors.

use clap::Parser;

use mxdb_cli::cli::{Cli, Command};
use mxdb_cli::commands;
use mxdb_cli::error::CliResult;
use mxdb_cli::output;
use mxdb_connect::logging;

#[tokio::main]
async fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_with_level("debug");
    } else {
        logging::init();
    }

    // Run the appropriate command
    match cli.command {
        Command::Resolve(args) => commands::resolve::run(args).await,
        Command::Connect(args) => commands::connect::run(args).await,
        Command::Version => commands::version::run().await,
    }
}
