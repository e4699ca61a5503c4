//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `lftp/` - Mirror runner and host launcher
//! - `webhook/` - HTTP webhook notifier
//! - `prompt/` - Terminal confirmation prompt
//! - `events/` - Console and NDJSON event sinks
//! - `git` - Branch lookup

pub mod events;
pub mod git;
pub mod lftp;
pub mod prompt;
pub mod webhook;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use git::current_branch;
pub use lftp::{Launcher, LftpRunner};
pub use prompt::TerminalPrompt;
pub use webhook::HttpWebhookNotifier;
