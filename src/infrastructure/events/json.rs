//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::MirrorEvent;
use crate::domain::ports::{SyncEvent, SyncEventSink};
use crate::domain::services::OutputStream;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert("command".to_string(), self.command.into());
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn stream_name(stream: OutputStream) -> &'static str {
    match stream {
        OutputStream::Stdout => "stdout",
        OutputStream::Stderr => "stderr",
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let json = match event {
            SyncEvent::Started {
                direction,
                source,
                destination,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "direction": direction,
                "source": source,
                "destination": destination,
                "dry_run": dry_run,
            }),

            SyncEvent::Script { masked } => serde_json::json!({
                "event": "script",
                "script": masked,
            }),

            SyncEvent::ReviewStarted => serde_json::json!({ "event": "review" }),

            SyncEvent::ApplyStarted => serde_json::json!({ "event": "apply" }),

            SyncEvent::Output { stream, line } => serde_json::json!({
                "event": "output",
                "stream": stream_name(stream),
                "line": line,
            }),

            SyncEvent::Mirror(MirrorEvent::Transferred { path }) => serde_json::json!({
                "event": "item_transferred",
                "path": path,
            }),

            SyncEvent::Mirror(MirrorEvent::Removed { path }) => serde_json::json!({
                "event": "item_removed",
                "path": path,
            }),

            SyncEvent::Mirror(MirrorEvent::Error { message }) => serde_json::json!({
                "event": "item_error",
                "error": message,
            }),

            SyncEvent::VendorSkipped => serde_json::json!({ "event": "vendor_skipped" }),

            SyncEvent::WebhookFailed { phase } => serde_json::json!({
                "event": "webhook_failed",
                "phase": phase.as_str(),
            }),

            SyncEvent::UpToDate { target } => serde_json::json!({
                "event": "complete",
                "status": "up_to_date",
                "target": target,
            }),

            SyncEvent::Aborted { target } => serde_json::json!({
                "event": "complete",
                "status": "aborted",
                "target": target,
            }),

            SyncEvent::Completed {
                transferred,
                removed,
                errors,
            } => {
                let status = if errors == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "status": status,
                    "transferred": transferred,
                    "removed": removed,
                    "errors": errors,
                })
            }

            SyncEvent::Failed { message } => serde_json::json!({
                "event": "complete",
                "status": "failed",
                "error": message,
            }),
        };

        self.write_event(json);
    }
}
