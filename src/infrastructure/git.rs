//! Git branch lookup for the deploy header

use std::path::Path;

use tokio::process::Command;

/// Current branch of the checkout at `root`, if it is one.
pub async fn current_branch(root: &Path) -> Option<String> {
    if !root.join(".git").exists() {
        return None;
    }

    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .current_dir(root)
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
            (!branch.is_empty()).then_some(branch)
        }
        Ok(output) => {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git branch lookup failed"
            );
            None
        }
        Err(err) => {
            tracing::debug!(error = %err, "git not available");
            None
        }
    }
}
