use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".pr-reviewer.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .pr-reviewer.toml.
/// All fields are optional; the tool works with zero config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// GitHub connection settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Merge policy and evaluation settings
    #[serde(default)]
    pub review: ReviewConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub API token. If None, falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,
    /// REST API root, overridable for GitHub Enterprise
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Minimum comment score for a PR to be eligible
    pub required_score: i64,
    /// Number of PRs evaluated at once
    pub concurrency: usize,
    /// Title fragments; an empty list includes every open PR
    pub filters: Vec<String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            required_score: 1,
            concurrency: 4,
            filters: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, .pr-reviewer.toml in the
    /// current directory is used if present, otherwise defaults.
    /// The GITHUB_TOKEN env var fills in a token the file leaves unset.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)?
                } else {
                    Config::default()
                }
            }
        };

        Ok(config.with_token_fallback(std::env::var("GITHUB_TOKEN").ok()))
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Use `fallback` as the token unless the file already set one.
    pub fn with_token_fallback(mut self, fallback: Option<String>) -> Config {
        if self.github.token.is_none() {
            self.github.token = fallback.filter(|token| !token.is_empty());
        }
        self
    }
}
