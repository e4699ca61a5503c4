//! Error types for kirby-deploy
//!
//! Library code returns [`DeployError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// No config file in any of the searched locations
    #[error("no config file found (searched: {})", format_paths(.searched))]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// Config file exists but could not be read
    #[error("failed to read {file}: {source}")]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrongly typed values
    #[error("failed to parse {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config parsed but required values are missing or invalid
    #[error("invalid properties in {file}\n{}", format_issues(.issues))]
    ConfigInvalid {
        file: PathBuf,
        issues: Vec<crate::config::ConfigIssue>,
    },

    /// Webhooks are required for this push but not configured
    #[error("webhooks are enabled but {missing} is not configured (set `call_webhooks = false` to deploy without maintenance mode)")]
    WebhookConfig { missing: &'static str },

    /// Webhook base URL could not be parsed
    #[error("invalid webhook url '{url}': {message}")]
    WebhookUrl { url: String, message: String },

    /// The HTTP client for webhooks could not be built
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The mirror subprocess could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the subprocess output or waiting for it failed
    #[error("mirror process I/O error: {0}")]
    Process(#[source] std::io::Error),

    /// The confirmation prompt could not be shown
    #[error("confirmation prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_issues(issues: &[crate::config::ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
