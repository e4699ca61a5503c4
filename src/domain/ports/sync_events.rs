//! Sync Event Port
//!
//! Observable interface for sync runs: console rendering, NDJSON streams
//! and tests all hang off this.

use crate::domain::entities::MirrorEvent;
use crate::domain::services::OutputStream;
use crate::domain::value_objects::{Direction, WebhookPhase};

/// Event emitted during a sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A sync request was accepted
    Started {
        direction: Direction,
        source: String,
        destination: String,
        dry_run: bool,
    },

    /// Masked command script (verbose only)
    Script { masked: String },

    /// Preview run started
    ReviewStarted,

    /// Committed run started
    ApplyStarted,

    /// Raw subprocess output line, already masked (verbose only)
    Output { stream: OutputStream, line: String },

    /// Classified transfer/removal/error
    Mirror(MirrorEvent),

    /// Remote `composer.lock` matches the local one; vendor is left out
    VendorSkipped,

    /// A webhook call did not succeed
    WebhookFailed { phase: WebhookPhase },

    /// Nothing to do on the target side
    UpToDate { target: &'static str },

    /// The operator declined to apply the previewed changes
    Aborted { target: &'static str },

    /// Committed run finished with changes
    Completed {
        transferred: usize,
        removed: usize,
        errors: usize,
    },

    /// The committed run could not be carried out
    Failed { message: String },
}

/// `"Remote already up to date"` / `"Local already up to date"`
pub fn up_to_date_message(target: &str) -> String {
    let mut chars = target.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{} already up to date",
            first.to_uppercase(),
            chars.as_str()
        ),
        None => "Already up to date".to_string(),
    }
}

/// Final line of a committed run that changed something
pub fn completion_message(has_errors: bool) -> &'static str {
    if has_errors {
        "All done (but with errors, see output above)!"
    } else {
        "All done!"
    }
}

/// Trait for receiving sync events
pub trait SyncEventSink: Send + Sync {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingEventSink {
        events: Arc<Mutex<Vec<SyncEvent>>>,
    }

    impl SyncEventSink for RecordingEventSink {
        fn on_event(&self, event: SyncEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };
        sink.on_event(SyncEvent::ReviewStarted);
        sink.on_event(SyncEvent::UpToDate { target: "remote" });
        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[test]
    fn status_messages() {
        assert_eq!(up_to_date_message("remote"), "Remote already up to date");
        assert_eq!(up_to_date_message("local"), "Local already up to date");
        assert_eq!(completion_message(false), "All done!");
        assert_eq!(
            completion_message(true),
            "All done (but with errors, see output above)!"
        );
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopEventSink.on_event(SyncEvent::ApplyStarted);
    }
}
