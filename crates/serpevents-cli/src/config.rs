//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/serpevents/config.toml` by default. Command-line flags and
//! the `SERPAPI_API_KEY` environment variable take precedence over the
//! file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the serpevents CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// SerpApi API key. Flag and environment take precedence.
    pub api_key: Option<String>,

    /// Default search query.
    pub query: String,

    /// Directory default outputs are written under.
    pub output_dir: PathBuf,

    /// Search settings passed through to the provider.
    #[serde(default)]
    pub search: SearchSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            query: "events in Boerne, TX".to_string(),
            output_dir: PathBuf::from("data"),
            search: SearchSettings::default(),
        }
    }
}

/// Optional search parameters forwarded to the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Geographic location bias.
    pub location: Option<String>,

    /// Interface language, e.g. `"en"` or `"es"`.
    pub hl: Option<String>,

    /// Country code, e.g. `"us"`.
    pub gl: Option<String>,
}

impl CliConfig {
    /// Loads configuration from the default path, or defaults when no file
    /// exists.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("serpevents")
            .join("config.toml")
    }

    /// Returns the default path for an output file.
    pub fn default_output(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
