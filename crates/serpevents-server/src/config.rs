//! Proxy server configuration.

/// Default upstream search endpoint.
pub const DEFAULT_UPSTREAM: &str = "https://serpapi.com/search.json";

/// Configuration for the pass-through proxy.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Address to bind.
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// API key forwarded to the upstream. Held server-side only; the key is
    /// never accepted from clients.
    pub api_key: Option<String>,

    /// Upstream search endpoint.
    pub upstream: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            api_key: None,
            upstream: DEFAULT_UPSTREAM.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Reads configuration from the environment: `HOST`, `PORT`, and
    /// `SERPAPI_API_KEY`. Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            api_key: std::env::var("SERPAPI_API_KEY").ok().filter(|k| !k.is_empty()),
            upstream: defaults.upstream,
        }
    }

    /// Builder: set the bind host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Builder: set the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Builder: set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder: set the upstream endpoint.
    pub fn with_upstream(mut self, upstream: impl Into<String>) -> Self {
        self.upstream = upstream.into();
        self
    }
}
