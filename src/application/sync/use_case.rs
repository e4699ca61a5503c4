//! Sync Use Case
//!
//! Orchestrates one sync:
//! 1. Check webhook configuration (before anything is spawned)
//! 2. Preview with `--dry-run` when dry-run is enabled
//! 3. Ask for confirmation when the preview found changes
//! 4. Run the committed mirror inside the maintenance window
//! 5. Report the outcome
//!
//! There are no retries; a failed sync needs a fresh invocation.

use std::sync::Arc;

use crate::config::Settings;
use crate::domain::entities::{CommandScript, MirrorOutcome};
use crate::domain::ports::{
    ConfirmPrompt, MirrorRunner, NoopEventSink, SyncEvent, SyncEventSink, WebhookNotifier,
};
use crate::error::{DeployError, DeployResult};

use super::maintenance::with_maintenance;
use super::outcome::SyncOutcome;
use super::request::SyncRequest;

/// Sync use case - parameterized by its ports so it can run without a
/// terminal, a network or the mirror tool.
pub struct SyncUseCase {
    runner: Arc<dyn MirrorRunner>,
    notifier: Arc<dyn WebhookNotifier>,
    prompt: Arc<dyn ConfirmPrompt>,
}

impl SyncUseCase {
    pub fn new(
        runner: Arc<dyn MirrorRunner>,
        notifier: Arc<dyn WebhookNotifier>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            runner,
            notifier,
            prompt,
        }
    }

    /// Execute without event reporting
    pub async fn execute(
        &self,
        request: &SyncRequest,
        settings: &Settings,
    ) -> DeployResult<SyncOutcome> {
        self.execute_with_events(request, settings, &NoopEventSink)
            .await
    }

    /// Execute, reporting progress to `events`.
    ///
    /// Only configuration problems are returned as `Err`; everything that
    /// happens after that ends in a [`SyncOutcome`].
    pub async fn execute_with_events(
        &self,
        request: &SyncRequest,
        settings: &Settings,
        events: &dyn SyncEventSink,
    ) -> DeployResult<SyncOutcome> {
        let direction = request.direction;
        let target_name = direction.target_name();
        let webhook_target = settings.webhook_target(direction)?;

        let remote = request.remote_destination(&settings.remote_dir);
        let builder = settings.flag_builder();
        let session = settings.session();
        let commit = CommandScript::mirror(
            &session,
            builder.invocation(direction, &request.source, &remote, false),
        );

        let (source, destination) = if direction.is_push() {
            (request.source.clone(), remote.clone())
        } else {
            (remote.clone(), request.source.clone())
        };
        tracing::info!(%direction, %source, %destination, dry_run = settings.dry_run, "sync");
        events.on_event(SyncEvent::Started {
            direction,
            source,
            destination,
            dry_run: settings.dry_run,
        });

        let masked = commit.render_masked();
        tracing::debug!(script = %masked, "mirror script");
        if settings.verbose {
            events.on_event(SyncEvent::Script { masked });
        }

        if settings.dry_run {
            events.on_event(SyncEvent::ReviewStarted);
            let preview = CommandScript::mirror(
                &session,
                builder.invocation(direction, &request.source, &remote, true),
            );
            let outcome = match self.runner.run(&preview, settings.verbose, events).await {
                Ok(outcome) => outcome,
                Err(err) => return Ok(failed(err, events)),
            };

            if !outcome.has_changes() {
                return Ok(up_to_date(target_name, events));
            }

            let question = format!("Apply changes to {target_name}?");
            let confirmed = match self.prompt.confirm(&question).await {
                Ok(answer) => answer,
                Err(err) => {
                    tracing::warn!(error = %err, "confirmation failed, treating as no");
                    false
                }
            };
            if !confirmed {
                tracing::info!(side = target_name, "sync aborted by operator");
                events.on_event(SyncEvent::Aborted {
                    target: target_name,
                });
                return Ok(SyncOutcome::Aborted {
                    target: target_name,
                });
            }
        }

        events.on_event(SyncEvent::ApplyStarted);
        let result = with_maintenance(
            self.notifier.as_ref(),
            webhook_target.as_ref(),
            events,
            self.runner.run(&commit, settings.verbose, events),
        )
        .await;

        Ok(match result {
            Err(err) => failed(err, events),
            Ok(outcome) if !outcome.has_changes() => up_to_date(target_name, events),
            Ok(outcome) => completed(outcome, events),
        })
    }
}

fn up_to_date(target: &'static str, events: &dyn SyncEventSink) -> SyncOutcome {
    events.on_event(SyncEvent::UpToDate { target });
    SyncOutcome::UpToDate { target }
}

fn completed(outcome: MirrorOutcome, events: &dyn SyncEventSink) -> SyncOutcome {
    tracing::info!(
        transferred = outcome.transferred_count(),
        removed = outcome.removed_count(),
        errors = outcome.error_count(),
        exit_code = ?outcome.exit_code(),
        "sync completed"
    );
    events.on_event(SyncEvent::Completed {
        transferred: outcome.transferred_count(),
        removed: outcome.removed_count(),
        errors: outcome.error_count(),
    });
    SyncOutcome::Completed { outcome }
}

fn failed(err: DeployError, events: &dyn SyncEventSink) -> SyncOutcome {
    let message = err.to_string();
    tracing::error!(error = %message, "sync failed");
    events.on_event(SyncEvent::Failed {
        message: message.clone(),
    });
    SyncOutcome::Failed { message }
}
