//! Composer lock check
//!
//! When the remote `composer.lock` matches the local one, `vendor/` and
//! `kirby/` are left out of the site deploy. Any failure keeps them in.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::config::Settings;
use crate::domain::entities::CommandScript;
use crate::domain::ports::MirrorRunner;
use crate::domain::value_objects::MirrorFilters;

use super::sync::join_remote;

pub const COMPOSER_LOCK: &str = "composer.lock";

/// Excludes added when vendor is unchanged
pub const VENDOR_EXCLUDES: &[&str] = &["^vendor/", "^kirby/"];

/// True when the local and remote lock files have the same digest.
pub async fn vendor_unchanged(
    runner: &dyn MirrorRunner,
    settings: &Settings,
    project_root: &Path,
) -> bool {
    let local_path = project_root.join(COMPOSER_LOCK);
    let local = match tokio::fs::read_to_string(&local_path).await {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(file = %local_path.display(), error = %err, "no local composer.lock");
            return false;
        }
    };

    let remote_path = match join_remote(&settings.remote_dir, COMPOSER_LOCK) {
        absolute if absolute.starts_with('/') => absolute,
        relative => format!("./{relative}"),
    };
    let script = CommandScript::cat(&settings.session(), remote_path.as_str());
    let remote = match runner.capture(&script).await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(error = %err, "could not read remote composer.lock");
            return false;
        }
    };

    let same = !remote.is_empty() && digest(&local) == digest(&remote);
    tracing::debug!(remote = %remote_path, same, "compared composer.lock");
    same
}

/// Add the vendor excludes to `filters`
pub fn skip_vendor(mut filters: MirrorFilters) -> MirrorFilters {
    filters
        .exclude
        .extend(VENDOR_EXCLUDES.iter().map(|e| e.to_string()));
    filters
}

fn digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
