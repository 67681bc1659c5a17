//! serpevents CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use serpevents_cli::cli::{Cli, Command};
use serpevents_cli::config::CliConfig;
use serpevents_cli::error::{CliError, CliResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Run the command
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(CliError::Config)?
    } else {
        CliConfig::load().unwrap_or_default()
    };

    match cli.command {
        Command::Csv(args) => serpevents_cli::commands::export::csv(args, &config).await,
        Command::Ics { export, year } => {
            serpevents_cli::commands::export::ics(export, year, &config).await
        }
        Command::Serve { host, port } => serpevents_cli::commands::serve::run(host, port).await,
    }
}
