//! Configuration module
//!
//! Two explicit stages:
//! 1. [`RawConfig`] - the TOML file plus `KIRBY_DEPLOY_*` overrides
//! 2. [`Settings`] - resolved by the pure [`resolve`] function
//!
//! Loading fails closed: missing or invalid required values yield an error,
//! never partially-filled settings.

mod loader;
mod resolve;
mod types;

pub use loader::{
    candidate_paths, load, load_from_path, parse_with_warnings, with_env_overrides,
    ConfigWarning, LoadedConfig, CONFIG_FILE_NAME,
};
pub use resolve::{
    resolve, ConfigIssue, DEFAULT_LFTP_PROGRAM, DEFAULT_PARALLEL, DEFAULT_REMOTE_DIR,
    DEFAULT_WEBHOOK_TIMEOUT_SECS,
};
pub use types::{
    FolderPreset, FolderStructure, RawConfig, RawFolderStructure, Settings, WebhookSettings,
};
