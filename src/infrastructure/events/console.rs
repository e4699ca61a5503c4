//! Console Event Sink
//!
//! Human-readable progress: transferred files in blue with `→`, removed
//! files in red with `⨯`, tool errors on stderr. Verbose mode adds the
//! masked script and the raw tool output.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::MirrorEvent;
use crate::domain::ports::{completion_message, up_to_date_message, SyncEvent, SyncEventSink};
use crate::domain::services::OutputStream;
use crate::ui::{ColoredText, Icon};

/// Event sink for interactive terminals
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), color, unicode)
    }

    pub fn with_writers<O, E>(out: O, err: E, color: bool, unicode: bool) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            color,
            unicode,
        }
    }

    fn print(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
            let _ = out.flush();
        }
    }

    fn eprint(&self, line: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{line}");
            let _ = err.flush();
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        match event {
            SyncEvent::Started { .. } => {}

            SyncEvent::Script { masked } => {
                let badge = ColoredText::info(" LFTP ").bold().render(self.color);
                self.print(&format!("\n{badge} {masked}\n"));
            }

            SyncEvent::ReviewStarted => self.print("Review changes...\n"),

            SyncEvent::ApplyStarted => self.print("\nApply changes...\n"),

            SyncEvent::Output {
                stream: OutputStream::Stdout,
                line,
            } => self.print(&ColoredText::dim(line).render(self.color)),

            // Error-stream lines are reported as mirror errors below.
            SyncEvent::Output {
                stream: OutputStream::Stderr,
                ..
            } => {}

            SyncEvent::Mirror(MirrorEvent::Transferred { path }) => {
                let text = format!("{} {path}", Icon::Transfer.render(self.unicode));
                self.print(&ColoredText::transfer(text).render(self.color));
            }

            SyncEvent::Mirror(MirrorEvent::Removed { path }) => {
                let text = format!("{} {path}", Icon::Remove.render(self.unicode));
                self.print(&ColoredText::error(text).render(self.color));
            }

            SyncEvent::Mirror(MirrorEvent::Error { message }) => {
                self.eprint(&format!(
                    "{} {}",
                    self.icon(Icon::Error),
                    ColoredText::error(message).render(self.color)
                ));
            }

            SyncEvent::VendorSkipped => {
                self.print(&format!("{} Skipping vendor\n", self.icon(Icon::Info)));
            }

            SyncEvent::WebhookFailed { phase } => {
                self.eprint(&format!(
                    "{} {}",
                    self.icon(Icon::Warning),
                    ColoredText::warning(format!("Failed to call {phase} webhook"))
                        .render(self.color)
                ));
            }

            SyncEvent::UpToDate { target } => {
                self.print(&format!(
                    "{} {}",
                    self.icon(Icon::Success),
                    up_to_date_message(target)
                ));
            }

            SyncEvent::Aborted { .. } => {}

            SyncEvent::Completed { errors, .. } => {
                self.print(&format!(
                    "\n{} {}",
                    self.icon(Icon::Success),
                    completion_message(errors > 0)
                ));
            }

            SyncEvent::Failed { message } => {
                self.eprint(&format!(
                    "{} {}",
                    self.icon(Icon::Error),
                    ColoredText::error(message).render(self.color)
                ));
            }
        }
    }
}
