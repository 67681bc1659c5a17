//! Proxy server errors.

use thiserror::Error;

/// Errors that can stop the proxy from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No API key was configured. The key must live on the server; it is
    /// never accepted from clients.
    #[error("missing SERPAPI_API_KEY; set it in the server environment")]
    MissingApiKey,

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
