//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirm_prompt;
pub mod mirror_runner;
pub mod sync_events;
pub mod webhook_notifier;

pub use confirm_prompt::{is_affirmative, AssumeNo, AssumeYes, ConfirmPrompt};
pub use mirror_runner::MirrorRunner;
pub use sync_events::{
    completion_message, up_to_date_message, NoopEventSink, SyncEvent, SyncEventSink,
};
pub use webhook_notifier::{WebhookNotifier, WebhookTarget, WEBHOOK_ROUTE};
