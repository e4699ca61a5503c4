//! lftp Mirror Runner
//!
//! Spawns one lftp process per call and reads stdout and stderr
//! concurrently, line by line, feeding each line to the classifier as it
//! arrives. Lines are read as bytes and decoded lossily, so a filename in a
//! legacy encoding never cuts a transfer short. The call resolves once the
//! process has exited.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::entities::{CommandScript, MirrorOutcome, PASSWORD_PLACEHOLDER};
use crate::domain::ports::{MirrorRunner, SyncEvent, SyncEventSink};
use crate::domain::services::{Masker, OutputClassifier, OutputStream};
use crate::error::{DeployError, DeployResult};

use super::launcher::Launcher;

/// `MirrorRunner` backed by the lftp command-line client
#[derive(Debug, Clone)]
pub struct LftpRunner {
    launcher: Launcher,
}

impl LftpRunner {
    pub fn new(launcher: Launcher) -> Self {
        Self { launcher }
    }

    /// Runner for `program` using the host launcher
    pub fn for_host(program: impl Into<String>) -> Self {
        Self::new(Launcher::for_host(program))
    }

    fn spawn_error(&self, source: std::io::Error) -> DeployError {
        DeployError::Spawn {
            program: self.launcher.executable().to_string(),
            source,
        }
    }
}

fn masker_for(script: &CommandScript) -> Masker {
    match script.password() {
        Some(password) => Masker::new().with_secret(password, PASSWORD_PLACEHOLDER),
        None => Masker::new(),
    }
}

/// Filenames are echoed as raw bytes; anything that is not UTF-8 is replaced.
fn decode_line(bytes: &[u8]) -> String {
    let line = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

struct LineHandler<'a> {
    classifier: OutputClassifier,
    masker: Masker,
    verbose: bool,
    events: &'a dyn SyncEventSink,
}

impl LineHandler<'_> {
    fn handle(&mut self, line: &str, stream: OutputStream) {
        let line = self.masker.mask(line);
        tracing::trace!(?stream, %line, "lftp output");
        if self.verbose {
            self.events.on_event(SyncEvent::Output {
                stream,
                line: line.clone(),
            });
        }
        if let Some(event) = self.classifier.feed(&line, stream) {
            self.events.on_event(SyncEvent::Mirror(event));
        }
    }
}

#[async_trait]
impl MirrorRunner for LftpRunner {
    async fn run(
        &self,
        script: &CommandScript,
        verbose: bool,
        events: &dyn SyncEventSink,
    ) -> DeployResult<MirrorOutcome> {
        tracing::debug!(
            program = self.launcher.executable(),
            script = %script.render_masked(),
            "spawning mirror process"
        );
        let mut child = self
            .launcher
            .command(&script.render())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| DeployError::Process(std::io::Error::other("stdout not captured")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| DeployError::Process(std::io::Error::other("stderr not captured")))?;

        let mut out_reader = BufReader::new(stdout);
        let mut err_reader = BufReader::new(stderr);
        // Partially read bytes stay in these buffers when the other branch wins.
        let mut out_buf = Vec::new();
        let mut err_buf = Vec::new();
        let mut out_done = false;
        let mut err_done = false;

        let mut handler = LineHandler {
            classifier: OutputClassifier::new(),
            masker: masker_for(script),
            verbose,
            events,
        };

        while !(out_done && err_done) {
            tokio::select! {
                read = out_reader.read_until(b'\n', &mut out_buf), if !out_done => {
                    if read.map_err(DeployError::Process)? == 0 {
                        out_done = true;
                    } else {
                        handler.handle(&decode_line(&out_buf), OutputStream::Stdout);
                        out_buf.clear();
                    }
                }
                read = err_reader.read_until(b'\n', &mut err_buf), if !err_done => {
                    if read.map_err(DeployError::Process)? == 0 {
                        err_done = true;
                    } else {
                        handler.handle(&decode_line(&err_buf), OutputStream::Stderr);
                        err_buf.clear();
                    }
                }
            }
        }

        let status = child.wait().await.map_err(DeployError::Process)?;
        let outcome = handler.classifier.finish(status.code());
        tracing::debug!(
            exit_code = ?status.code(),
            changes = outcome.has_changes(),
            errors = outcome.has_errors(),
            "mirror process exited"
        );
        Ok(outcome)
    }

    async fn capture(&self, script: &CommandScript) -> DeployResult<String> {
        tracing::debug!(script = %script.render_masked(), "capturing mirror tool output");
        let output = self
            .launcher
            .command(&script.render())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::warn!(stderr = %masker_for(script).mask(stderr.trim()), "mirror tool reported errors");
        }
        if !output.status.success() {
            return Err(DeployError::Process(std::io::Error::other(format!(
                "{} exited with {:?}",
                self.launcher.executable(),
                output.status.code()
            ))));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
