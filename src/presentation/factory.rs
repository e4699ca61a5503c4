//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::SyncUseCase;
use crate::config::Settings;
use crate::domain::ports::{AssumeYes, ConfirmPrompt, MirrorRunner, SyncEventSink};
use crate::error::DeployResult;
use crate::infrastructure::{
    ConsoleEventSink, HttpWebhookNotifier, JsonEventSink, LftpRunner, TerminalPrompt,
};
use crate::ui::UiContext;

/// Mirror runner for the configured lftp program
pub fn create_runner(settings: &Settings) -> Arc<dyn MirrorRunner> {
    Arc::new(LftpRunner::for_host(settings.lftp_program.clone()))
}

/// Create a sync use case with all dependencies wired up
///
/// `assume_yes` replaces the terminal prompt with an automatic yes.
pub fn create_sync_use_case(
    runner: Arc<dyn MirrorRunner>,
    settings: &Settings,
    assume_yes: bool,
    ui: &UiContext,
) -> DeployResult<SyncUseCase> {
    let notifier = HttpWebhookNotifier::new(settings.webhooks.timeout)?;
    let prompt: Arc<dyn ConfirmPrompt> = if assume_yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(TerminalPrompt::new(ui.color))
    };
    Ok(SyncUseCase::new(runner, Arc::new(notifier), prompt))
}

/// Event sink matching the output mode
pub fn create_event_sink(ui: &UiContext, command: &'static str) -> Arc<dyn SyncEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::new(ui.color, ui.unicode))
    }
}
