//! Output Rendering
//!
//! Header lines and config warnings for the console.

use crate::application::join_remote;
use crate::config::ConfigWarning;
use crate::domain::value_objects::Direction;
use crate::ui::{ColoredText, Icon, UiContext};

/// `🚀 Deploy <branch> to <host>/<remote_dir>`
pub fn render_site_header(
    ui: &UiContext,
    branch: Option<&str>,
    host: &str,
    remote_dir: &str,
) -> String {
    let branch = branch
        .map(|b| format!(" {} ", ColoredText::info(b).render(ui.color)))
        .unwrap_or_else(|| " ".to_string());
    format!(
        "{} Deploy{}to {}\n",
        Icon::Deploy.render(ui.unicode),
        branch,
        ColoredText::accent(join_remote(host, remote_dir)).render(ui.color)
    )
}

/// `🗂️  Push ./content/ (<branch>) to <host>/<remote_dir>/content/`
pub fn render_scope_header(
    ui: &UiContext,
    direction: Direction,
    source: &str,
    branch: Option<&str>,
    host: &str,
    remote_dir: &str,
) -> String {
    let branch = branch
        .map(|b| format!(" ({b})"))
        .map(|b| ColoredText::info(b).render(ui.color))
        .unwrap_or_default();
    let verb = match direction {
        Direction::Push => "Push",
        Direction::Pull => "Pull",
    };
    let remote = join_remote(&join_remote(host, remote_dir), source);
    format!(
        "{} {} {}{} {} {}\n",
        Icon::Folder.render(ui.unicode),
        verb,
        ColoredText::accent(source).render(ui.color),
        branch,
        direction.preposition(),
        ColoredText::accent(remote).render(ui.color)
    )
}

/// Unknown config keys, with a suggestion when one is close
pub fn render_config_warning(ui: &UiContext, warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!("Unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{suggestion}'?)"));
    }
    format!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::warning(message).render(ui.color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;
    use std::path::PathBuf;

    fn plain() -> UiContext {
        UiContext::from_caps(
            false,
            0,
            None,
            TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: true,
                is_ci: false,
            },
        )
    }

    #[test]
    fn site_header_with_branch() {
        assert_eq!(
            render_site_header(&plain(), Some("main"), "ftp.example.com", "www"),
            "🚀 Deploy main to ftp.example.com/www\n"
        );
    }

    #[test]
    fn site_header_without_branch() {
        assert_eq!(
            render_site_header(&plain(), None, "ftp.example.com", "./"),
            "🚀 Deploy to ftp.example.com/\n"
        );
    }

    #[test]
    fn scope_header_for_pull() {
        assert_eq!(
            render_scope_header(
                &plain(),
                Direction::Pull,
                "./content/",
                Some("main"),
                "ftp.example.com",
                "www"
            ),
            "🗂️  Pull ./content/ (main) from ftp.example.com/www/content/\n"
        );
    }

    #[test]
    fn warning_includes_suggestion() {
        let warning = ConfigWarning {
            key: "paralel".to_string(),
            file: PathBuf::from("kirby-deploy.toml"),
            line: Some(6),
            suggestion: Some("parallel".to_string()),
        };
        assert_eq!(
            render_config_warning(&plain(), &warning),
            "⚠ Unknown config key 'paralel' in kirby-deploy.toml:6 (did you mean 'parallel'?)"
        );
    }
}
