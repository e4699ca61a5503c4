//! Sync Request
//!
//! A local source folder and a direction. The remote side is derived from
//! the configured remote directory.

use crate::domain::value_objects::Direction;

/// What one sync call should mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Local path relative to the project root, `./` for the whole site
    pub source: String,
    pub direction: Direction,
}

impl SyncRequest {
    pub fn new(source: impl Into<String>, direction: Direction) -> Self {
        Self {
            source: source.into(),
            direction,
        }
    }

    pub fn is_site(&self) -> bool {
        self.source == "./"
    }

    /// Remote counterpart of `source`.
    ///
    /// The whole site maps onto `remote_dir` as configured; any other folder
    /// maps onto `./<remote_dir>/<source>`.
    pub fn remote_destination(&self, remote_dir: &str) -> String {
        if self.is_site() {
            return remote_dir.to_string();
        }
        let joined = join_remote(remote_dir, &self.source);
        if joined.starts_with('/') {
            joined
        } else {
            format!("./{joined}")
        }
    }
}

/// Join two POSIX paths, dropping `.` segments and resolving `..`.
///
/// A trailing slash on `path` is kept.
pub fn join_remote(base: &str, path: &str) -> String {
    let absolute = base.starts_with('/') || path.starts_with('/');
    let base = if path.starts_with('/') { "" } else { base };

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let mut joined = segments.join("/");
    if path.ends_with('/') && !joined.is_empty() {
        joined.push('/');
    }
    if absolute {
        joined.insert(0, '/');
    }
    joined
}
