//! Mirror Runner Port
//!
//! Runs a command script through the external mirroring tool. Exactly one
//! subprocess is live per call; the call resolves once that process exits.

use async_trait::async_trait;

use crate::domain::entities::{CommandScript, MirrorOutcome};
use crate::error::DeployResult;

use super::sync_events::SyncEventSink;

#[async_trait]
pub trait MirrorRunner: Send + Sync {
    /// Run a script to completion, reporting classified output to `events`.
    ///
    /// A non-zero exit code is not an error; only a failure to spawn or to
    /// read the process output is.
    async fn run(
        &self,
        script: &CommandScript,
        verbose: bool,
        events: &dyn SyncEventSink,
    ) -> DeployResult<MirrorOutcome>;

    /// Run a script and return its standard output (used for `cat`).
    async fn capture(&self, script: &CommandScript) -> DeployResult<String>;
}
