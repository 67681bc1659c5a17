//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// serpevents - turn event search results into CSV and calendar files
#[derive(Debug, Parser)]
#[command(name = "serpevents")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SERPEVENTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch events and write the tabular CSV export
    Csv(ExportArgs),

    /// Fetch events and write an all-day ICS calendar
    Ics {
        #[command(flatten)]
        export: ExportArgs,

        /// Year assumed for dates whose source text carries none
        /// (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Run the pass-through search proxy
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Arguments shared by the fetch-and-export commands.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Search query (defaults to the configured query)
    #[arg(long)]
    pub query: Option<String>,

    /// Output file path
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// SerpApi API key
    #[arg(long, env = "SERPAPI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
