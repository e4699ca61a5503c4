//! Interactive confirmation prompt
//!
//! Reads a line from the terminal via dialoguer. Without a terminal on
//! stdin the answer is always no.

use std::io;

use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::domain::ports::{is_affirmative, ConfirmPrompt};
use crate::error::{DeployError, DeployResult};

/// Yes/no prompt on the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    color: bool,
}

impl TerminalPrompt {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

#[async_trait]
impl ConfirmPrompt for TerminalPrompt {
    async fn confirm(&self, question: &str) -> DeployResult<bool> {
        if !io::stdin().is_terminal() {
            tracing::warn!("stdin is not a terminal, answering no (use --yes to apply)");
            return Ok(false);
        }

        let prompt = format!("{question} (y/n)");
        let color = self.color;
        let answer = tokio::task::spawn_blocking(move || {
            eprintln!();
            let theme = ColorfulTheme::default();
            let input = if color {
                Input::<String>::with_theme(&theme)
            } else {
                Input::<String>::new()
            };
            input.with_prompt(prompt).allow_empty(true).interact_text()
        })
        .await
        .map_err(|e| DeployError::Prompt(e.to_string()))?
        .map_err(|e| DeployError::Prompt(e.to_string()))?;

        Ok(is_affirmative(&answer))
    }
}
