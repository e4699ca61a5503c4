//! kirby-deploy - FTP deployment for Kirby sites
//!
//! Drives `lftp mirror` to push a site (or pull single folders), previews
//! changes with a dry run, asks before applying them and brackets the
//! transfer with maintenance-mode webhooks.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployScope, SyncOutcome, SyncRequest, SyncUseCase};
pub use config::{LoadedConfig, Settings};
pub use domain::entities::{CommandScript, MirrorEvent, MirrorOutcome};
pub use domain::services::{classify_line, FlagBuilder, OutputClassifier, OutputStream};
pub use domain::value_objects::Direction;
pub use error::{DeployError, DeployResult};
