//! Confirm Prompt Port
//!
//! Asks the operator a yes/no question. Injected so the orchestrator can be
//! driven without a terminal.

use async_trait::async_trait;

use crate::error::DeployResult;

#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Ask `question`; `Ok(true)` only for an affirmative answer.
    async fn confirm(&self, question: &str) -> DeployResult<bool>;
}

/// Case-insensitive "y" or "yes"; anything else is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Answers every question with yes (`--yes`).
pub struct AssumeYes;

#[async_trait]
impl ConfirmPrompt for AssumeYes {
    async fn confirm(&self, _question: &str) -> DeployResult<bool> {
        Ok(true)
    }
}

/// Answers every question with no.
pub struct AssumeNo;

#[async_trait]
impl ConfirmPrompt for AssumeNo {
    async fn confirm(&self, _question: &str) -> DeployResult<bool> {
        Ok(false)
    }
}
