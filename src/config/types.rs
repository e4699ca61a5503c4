//! Configuration type definitions
//!
//! [`RawConfig`] mirrors the file as written: every field optional.
//! [`Settings`] is the fully resolved form produced by [`super::resolve`].

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Credentials, Session};
use crate::domain::ports::WebhookTarget;
use crate::domain::services::FlagBuilder;
use crate::domain::value_objects::{
    Direction, FlagValue, MirrorFilters, MirrorOptions, PassthroughFlags,
};
use crate::error::{DeployError, DeployResult};

/// Config file as written by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Base URL of the site, used for webhooks
    pub url: Option<String>,
    /// Bearer token for webhooks
    pub token: Option<String>,
    pub remote_dir: Option<String>,
    pub folder_structure: Option<RawFolderStructure>,
    pub verify_certificate: Option<bool>,
    pub check_composer_lock: Option<bool>,
    pub call_webhooks: Option<bool>,
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
    pub parallel: Option<i64>,
    pub dereference: Option<bool>,
    pub exclude: Option<Vec<String>>,
    pub exclude_glob: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub include_glob: Option<Vec<String>>,
    pub lftp_settings: Option<BTreeMap<String, FlagValue>>,
    pub lftp_flags: Option<PassthroughFlags>,
    /// Program used to run the mirror tool
    pub lftp: Option<String>,
    pub webhook_timeout_secs: Option<u64>,
}

/// `folder_structure` as written: a preset name or an explicit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFolderStructure {
    Preset(FolderPreset),
    Custom(FolderStructure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FolderPreset {
    /// Everything under `site/`
    #[default]
    Flat,
    /// Public folder setup with `public/` and `storage/`
    Public,
}

/// Locations of the Kirby folders, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderStructure {
    pub content: String,
    pub media: String,
    pub accounts: String,
    pub sessions: String,
    pub cache: String,
    #[serde(default = "default_site")]
    pub site: String,
}

fn default_site() -> String {
    "site".to_string()
}

impl FolderStructure {
    pub fn preset(preset: FolderPreset) -> Self {
        match preset {
            FolderPreset::Flat => Self {
                content: "content".to_string(),
                media: "site/media".to_string(),
                accounts: "site/accounts".to_string(),
                sessions: "site/sessions".to_string(),
                cache: "site/cache".to_string(),
                site: default_site(),
            },
            FolderPreset::Public => Self {
                content: "content".to_string(),
                media: "public/media".to_string(),
                accounts: "storage/accounts".to_string(),
                sessions: "storage/sessions".to_string(),
                cache: "storage/cache".to_string(),
                site: default_site(),
            },
        }
    }
}

impl Default for FolderStructure {
    fn default() -> Self {
        Self::preset(FolderPreset::default())
    }
}

/// Webhook configuration; the token is never printed
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WebhookSettings {
    pub enabled: bool,
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for WebhookSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookSettings")
            .field("enabled", &self.enabled)
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<token>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub credentials: Credentials,
    pub remote_dir: String,
    pub folder_structure: FolderStructure,
    pub check_composer_lock: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub filters: MirrorFilters,
    pub mirror: MirrorOptions,
    /// `set` options, already merged with TLS defaults
    pub lftp_settings: BTreeMap<String, String>,
    pub webhooks: WebhookSettings,
    pub lftp_program: String,
}

impl Settings {
    /// Connection preamble for command scripts
    pub fn session(&self) -> Session {
        Session::new(
            self.lftp_settings
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            self.host.clone(),
            self.credentials.clone(),
        )
    }

    pub fn flag_builder(&self) -> FlagBuilder<'_> {
        FlagBuilder::new(&self.filters, &self.mirror)
    }

    /// Copy of these settings with different filters
    pub fn with_filters(&self, filters: MirrorFilters) -> Self {
        Self {
            filters,
            ..self.clone()
        }
    }

    pub fn with_dry_run(&self, dry_run: bool) -> Self {
        Self {
            dry_run,
            ..self.clone()
        }
    }

    /// Webhook target for a sync in `direction`.
    ///
    /// `Ok(None)` when webhooks do not apply (pull, or disabled). An error
    /// when they apply but the URL or token is missing, or the URL does not
    /// parse.
    pub fn webhook_target(&self, direction: Direction) -> DeployResult<Option<WebhookTarget>> {
        if !direction.is_push() || !self.webhooks.enabled {
            return Ok(None);
        }
        let url = non_empty(self.webhooks.url.as_deref())
            .ok_or(DeployError::WebhookConfig { missing: "url" })?;
        let token = non_empty(self.webhooks.token.as_deref())
            .ok_or(DeployError::WebhookConfig { missing: "token" })?;
        url::Url::parse(url).map_err(|e| DeployError::WebhookUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(WebhookTarget::new(url, token)))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
