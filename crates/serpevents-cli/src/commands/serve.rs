//! Proxy server command.

use serpevents_server::{ProxyConfig, serve};

use crate::error::CliResult;

/// Runs the pass-through search proxy until interrupted.
///
/// Configuration comes from the environment (`HOST`, `PORT`,
/// `SERPAPI_API_KEY`); the flags override the bind address.
pub async fn run(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = ProxyConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    serve(config).await?;
    Ok(())
}
