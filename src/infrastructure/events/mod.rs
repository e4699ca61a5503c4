//! Event Sink Implementations
//!
//! Concrete implementations of `SyncEventSink`:
//! - `ConsoleEventSink`: colored, human-readable output
//! - `JsonEventSink`: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
