//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

use serpevents_providers::ProviderError;
use serpevents_server::ServerError;

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// No API key was found anywhere.
    #[error("missing API key; pass --api-key, set SERPAPI_API_KEY, or add api_key to the config file")]
    MissingApiKey,

    /// The upstream fetch failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The proxy server failed.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
