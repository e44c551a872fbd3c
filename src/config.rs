use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Remote search service settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the search service.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retry budget for transient failures (429/5xx/network).
    pub max_retries: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            max_retries: 5,
        }
    }
}

/// Link derivation settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LinksConfig {
    /// Branch used for file links when the result carries none.
    pub default_branch: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            default_branch: crate::links::DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Query history settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of past queries retained per session.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: crate::history::MAX_HISTORY,
        }
    }
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error: every setting has a default, so the
/// defaults are used. A present but unreadable or invalid file is an error.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.provider.endpoint.trim().is_empty() {
        anyhow::bail!("provider.endpoint must not be empty");
    }
    if config.provider.timeout_secs == 0 {
        anyhow::bail!("provider.timeout_secs must be > 0");
    }
    if config.history.max_entries == 0 {
        anyhow::bail!("history.max_entries must be >= 1");
    }
    if config.links.default_branch.trim().is_empty() {
        anyhow::bail!("links.default_branch must not be empty");
    }

    Ok(config)
}
