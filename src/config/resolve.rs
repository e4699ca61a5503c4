//! Pure resolution of [`RawConfig`] into [`Settings`].

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::domain::entities::Credentials;
use crate::domain::value_objects::{MirrorFilters, MirrorOptions};

use super::types::{FolderStructure, RawConfig, RawFolderStructure, Settings, WebhookSettings};

pub const DEFAULT_REMOTE_DIR: &str = "./";
pub const DEFAULT_PARALLEL: u32 = 10;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LFTP_PROGRAM: &str = "lftp";

/// A single validation problem, reported as `key (message)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub key: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.message)
    }
}

/// Apply defaults and validate. Fails closed: any issue means no settings.
pub fn resolve(raw: RawConfig) -> Result<Settings, Vec<ConfigIssue>> {
    let mut issues = Vec::new();

    let host = required(&mut issues, "host", raw.host);
    let user = required(&mut issues, "user", raw.user);
    let password = required(&mut issues, "password", raw.password);

    let parallel = match raw.parallel {
        None => DEFAULT_PARALLEL,
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or_else(|_| {
            issues.push(ConfigIssue::new("parallel", "is too large"));
            DEFAULT_PARALLEL
        }),
        Some(_) => {
            issues.push(ConfigIssue::new("parallel", "must be at least 1"));
            DEFAULT_PARALLEL
        }
    };

    let lftp_program = raw
        .lftp
        .unwrap_or_else(|| DEFAULT_LFTP_PROGRAM.to_string());
    if lftp_program.trim().is_empty() {
        issues.push(ConfigIssue::new("lftp", "must not be empty"));
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    let verify_certificate = raw.verify_certificate.unwrap_or(true);
    let mut lftp_settings = BTreeMap::new();
    lftp_settings.insert("ftp:ssl-force".to_string(), "true".to_string());
    lftp_settings.insert(
        "ssl:verify-certificate".to_string(),
        verify_certificate.to_string(),
    );
    for (key, value) in raw.lftp_settings.unwrap_or_default() {
        lftp_settings.insert(key, value.to_string());
    }

    let folder_structure = match raw.folder_structure {
        None => FolderStructure::default(),
        Some(RawFolderStructure::Preset(preset)) => FolderStructure::preset(preset),
        Some(RawFolderStructure::Custom(custom)) => custom,
    };

    Ok(Settings {
        host,
        credentials: Credentials::new(user, password),
        remote_dir: raw
            .remote_dir
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REMOTE_DIR.to_string()),
        folder_structure,
        check_composer_lock: raw.check_composer_lock.unwrap_or(true),
        dry_run: raw.dry_run.unwrap_or(true),
        verbose: raw.verbose.unwrap_or(false),
        filters: MirrorFilters {
            exclude: raw.exclude.unwrap_or_default(),
            exclude_glob: raw.exclude_glob.unwrap_or_default(),
            include: raw.include.unwrap_or_default(),
            include_glob: raw.include_glob.unwrap_or_default(),
        },
        mirror: MirrorOptions {
            parallel,
            dereference: raw.dereference.unwrap_or(true),
            passthrough: raw.lftp_flags.unwrap_or_default(),
        },
        lftp_settings,
        webhooks: WebhookSettings {
            enabled: raw.call_webhooks.unwrap_or(true),
            url: raw.url,
            token: raw.token,
            timeout: Duration::from_secs(
                raw.webhook_timeout_secs
                    .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS),
            ),
        },
        lftp_program,
    })
}

fn required(issues: &mut Vec<ConfigIssue>, key: &str, value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        Some(_) => {
            issues.push(ConfigIssue::new(key, "must not be empty"));
            String::new()
        }
        None => {
            issues.push(ConfigIssue::new(key, "is required"));
            String::new()
        }
    }
}
