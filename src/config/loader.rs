//! Configuration discovery and loading
//!
//! Lookup order:
//! 1. `--config <path>`
//! 2. `./kirby-deploy.toml`
//! 3. `<user config dir>/kirby-deploy/config.toml`
//!
//! A `.env` file in the working directory is loaded first, then
//! `KIRBY_DEPLOY_*` variables override values from the file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::resolve::resolve;
use super::types::{RawConfig, Settings};

pub const CONFIG_FILE_NAME: &str = "kirby-deploy.toml";

const ENV_OVERRIDES: &[&str] = &[
    "KIRBY_DEPLOY_HOST",
    "KIRBY_DEPLOY_USER",
    "KIRBY_DEPLOY_PASSWORD",
    "KIRBY_DEPLOY_URL",
    "KIRBY_DEPLOY_TOKEN",
    "KIRBY_DEPLOY_LFTP",
];

const KNOWN_KEYS: &[&str] = &[
    "host",
    "user",
    "password",
    "url",
    "token",
    "remote_dir",
    "folder_structure",
    "content",
    "media",
    "accounts",
    "sessions",
    "cache",
    "site",
    "verify_certificate",
    "check_composer_lock",
    "call_webhooks",
    "dry_run",
    "verbose",
    "parallel",
    "dereference",
    "exclude",
    "exclude_glob",
    "include",
    "include_glob",
    "lftp_settings",
    "lftp_flags",
    "lftp",
    "webhook_timeout_secs",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Settings together with where they came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub settings: Settings,
    pub file: PathBuf,
    pub warnings: Vec<ConfigWarning>,
}

/// Paths searched for a config file, in priority order
pub fn candidate_paths(explicit: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    let mut paths = vec![cwd.join(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("kirby-deploy").join("config.toml"));
    }
    paths
}

/// Discover, parse, override from the process environment, and resolve.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> DeployResult<LoadedConfig> {
    let env_file = cwd.join(".env");
    if env_file.exists() {
        if let Err(err) = dotenvy::from_path(&env_file) {
            tracing::warn!(file = %env_file.display(), error = %err, "failed to load .env");
        }
    }

    let searched = candidate_paths(explicit, cwd);
    let file = searched
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or(DeployError::ConfigNotFound { searched })?;

    load_from_path(&file, |key| std::env::var(key).ok())
}

/// Load a specific file with an injectable environment lookup.
pub fn load_from_path(
    file: &Path,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployResult<LoadedConfig> {
    let content = fs::read_to_string(file).map_err(|source| DeployError::ConfigRead {
        file: file.to_path_buf(),
        source,
    })?;
    let (raw, warnings) = parse_with_warnings(&content, file)?;
    let raw = with_env_overrides(raw, get_env);

    let settings = resolve(raw).map_err(|issues| DeployError::ConfigInvalid {
        file: file.to_path_buf(),
        issues,
    })?;
    tracing::debug!(file = %file.display(), host = %settings.host, "loaded config");

    Ok(LoadedConfig {
        settings,
        file: file.to_path_buf(),
        warnings,
    })
}

/// Parse TOML and collect unknown keys as warnings.
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> DeployResult<(RawConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let raw: RawConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::ConfigParse {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((raw, warnings))
}

/// Apply `KIRBY_DEPLOY_*` overrides
pub fn with_env_overrides(
    mut raw: RawConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> RawConfig {
    for key in ENV_OVERRIDES {
        let Some(value) = get_env(key) else {
            continue;
        };
        match *key {
            "KIRBY_DEPLOY_HOST" => raw.host = Some(value),
            "KIRBY_DEPLOY_USER" => raw.user = Some(value),
            "KIRBY_DEPLOY_PASSWORD" => raw.password = Some(value),
            "KIRBY_DEPLOY_URL" => raw.url = Some(value),
            "KIRBY_DEPLOY_TOKEN" => raw.token = Some(value),
            "KIRBY_DEPLOY_LFTP" => raw.lftp = Some(value),
            _ => {}
        }
    }
    raw
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in KNOWN_KEYS {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
