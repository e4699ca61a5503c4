//! Maintenance window around a committed transfer
//!
//! `start` is sent before the work, `finish` after it on every exit path,
//! including a panic inside the work. `finish` is sent if and only if
//! `start` was attempted, whatever `start` returned.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;

use crate::domain::ports::{SyncEvent, SyncEventSink, WebhookNotifier, WebhookTarget};
use crate::domain::value_objects::WebhookPhase;

/// Run `work` bracketed by start/finish webhooks when `target` is set.
pub async fn with_maintenance<F, T>(
    notifier: &dyn WebhookNotifier,
    target: Option<&WebhookTarget>,
    events: &dyn SyncEventSink,
    work: F,
) -> T
where
    F: Future<Output = T> + Send,
{
    let Some(target) = target else {
        return work.await;
    };

    notify(notifier, target, WebhookPhase::Start, events).await;
    let result = AssertUnwindSafe(work).catch_unwind().await;
    notify(notifier, target, WebhookPhase::Finish, events).await;

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

async fn notify(
    notifier: &dyn WebhookNotifier,
    target: &WebhookTarget,
    phase: WebhookPhase,
    events: &dyn SyncEventSink,
) {
    if !notifier.notify(target, phase).await {
        tracing::warn!(%phase, "webhook call failed, continuing");
        events.on_event(SyncEvent::WebhookFailed { phase });
    }
}
