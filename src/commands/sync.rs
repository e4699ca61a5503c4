use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use kirby_deploy::application::{skip_vendor, vendor_unchanged, DeployScope, SyncOutcome};
use kirby_deploy::config;
use kirby_deploy::domain::ports::SyncEvent;
use kirby_deploy::infrastructure::current_branch;
use kirby_deploy::presentation::output::{
    render_config_warning, render_scope_header, render_site_header,
};
use kirby_deploy::presentation::{
    create_event_sink, create_runner, create_sync_use_case, Cli,
};
use kirby_deploy::ui::UiContext;

pub async fn cmd_sync(cli: &Cli) -> Result<ExitCode> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let cwd = std::env::current_dir()?;

    let loaded = config::load(cli.config.as_deref(), &cwd)?;
    if !ui.json {
        for warning in &loaded.warnings {
            eprintln!("{}", render_config_warning(&ui, warning));
        }
    }

    let mut settings = loaded.settings;
    if let Some(dry_run) = cli.dry_run_override() {
        settings = settings.with_dry_run(dry_run);
    }
    settings.verbose |= cli.verbose > 0;

    let (scope, direction) = cli.scope();
    let request = scope.request(&settings.folder_structure, direction);
    let mut scoped = scope.settings(&settings);

    // Fail on webhook misconfiguration before anything talks to the server.
    scoped.webhook_target(request.direction)?;

    let runner = create_runner(&scoped);
    let events = create_event_sink(&ui, cli.command_name());

    if !ui.json {
        let branch = current_branch(&cwd).await;
        let header = match scope {
            DeployScope::Site => render_site_header(
                &ui,
                branch.as_deref(),
                &scoped.host,
                &scoped.remote_dir,
            ),
            _ => render_scope_header(
                &ui,
                request.direction,
                &request.source,
                branch.as_deref(),
                &scoped.host,
                &scoped.remote_dir,
            ),
        };
        let mut out = std::io::stdout().lock();
        writeln!(out, "{header}")?;
    }

    if scope == DeployScope::Site
        && scoped.check_composer_lock
        && vendor_unchanged(runner.as_ref(), &scoped, &cwd).await
    {
        scoped = scoped.with_filters(skip_vendor(scoped.filters.clone()));
        events.on_event(SyncEvent::VendorSkipped);
    }

    let use_case = create_sync_use_case(runner, &scoped, cli.yes, &ui)?;
    let outcome = use_case
        .execute_with_events(&request, &scoped, events.as_ref())
        .await?;

    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &SyncOutcome) -> ExitCode {
    if outcome.is_failure() || outcome.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
