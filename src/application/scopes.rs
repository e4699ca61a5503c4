//! Deploy Scopes
//!
//! Each command syncs one part of a Kirby project. A scope knows its local
//! folder and the filters that go with it; it never mutates the loaded
//! settings, it derives a copy.

use crate::config::{FolderStructure, Settings};
use crate::domain::value_objects::{Direction, MirrorFilters};

use super::sync::SyncRequest;

/// Part of the project a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployScope {
    /// Everything except content, media, accounts, sessions, cache and languages
    Site,
    Content,
    Accounts,
    Languages,
}

impl DeployScope {
    /// Local folder, relative to the project root
    pub fn source(&self, folders: &FolderStructure) -> String {
        match self {
            DeployScope::Site => "./".to_string(),
            DeployScope::Content => format!("./{}/", trim_dir(&folders.content)),
            DeployScope::Accounts => format!("./{}/", trim_dir(&folders.accounts)),
            DeployScope::Languages => format!("./{}/languages/", trim_dir(&folders.site)),
        }
    }

    /// Site deploys are push-only; other scopes honour `direction`.
    pub fn request(&self, folders: &FolderStructure, direction: Direction) -> SyncRequest {
        let direction = match self {
            DeployScope::Site => Direction::Push,
            _ => direction,
        };
        SyncRequest::new(self.source(folders), direction)
    }

    /// Filters for this scope.
    ///
    /// User filters are relative to the project root, so they only apply to
    /// the site scope; the folder scopes reset them.
    pub fn filters(&self, settings: &Settings) -> MirrorFilters {
        let folders = &settings.folder_structure;
        match self {
            DeployScope::Site => {
                let user = &settings.filters;
                let mut exclude = user.exclude.clone();
                exclude.push("^node_modules/".to_string());
                for folder in [
                    &folders.content,
                    &folders.media,
                    &folders.accounts,
                    &folders.sessions,
                    &folders.cache,
                ] {
                    exclude.push(format!("^{}", trim_dir(folder)));
                }
                exclude.push(format!("^{}/languages", trim_dir(&folders.site)));

                let mut exclude_glob = user.exclude_glob.clone();
                exclude_glob.extend([".*".to_string(), ".*/".to_string()]);
                let mut include_glob = user.include_glob.clone();
                include_glob.extend([".htaccess".to_string(), ".vite/".to_string()]);

                MirrorFilters {
                    exclude,
                    exclude_glob,
                    include: user.include.clone(),
                    include_glob,
                }
            }
            DeployScope::Content | DeployScope::Languages => MirrorFilters::hidden_excluded(),
            DeployScope::Accounts => MirrorFilters {
                include: vec![".htpasswd".to_string()],
                ..MirrorFilters::hidden_excluded()
            },
        }
    }

    /// Settings copy carrying this scope's filters
    pub fn settings(&self, settings: &Settings) -> Settings {
        settings.with_filters(self.filters(settings))
    }
}

fn trim_dir(path: &str) -> &str {
    let path = path.trim_start_matches("./");
    path.trim_end_matches('/')
}
