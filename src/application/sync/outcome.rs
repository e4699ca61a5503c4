//! Sync Outcome
//!
//! Terminal states of one orchestrator run.

use crate::domain::entities::MirrorOutcome;
use crate::domain::ports::{completion_message, up_to_date_message};

/// How a sync ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing to transfer, found either in preview or in the committed run
    UpToDate { target: &'static str },
    /// The operator declined the previewed changes
    Aborted { target: &'static str },
    /// The committed run transferred or removed something
    Completed { outcome: MirrorOutcome },
    /// The mirror process could not be run
    Failed { message: String },
}

impl SyncOutcome {
    /// Final status line for the operator, if this outcome has one
    pub fn status_message(&self) -> Option<String> {
        match self {
            SyncOutcome::UpToDate { target } => Some(up_to_date_message(target)),
            SyncOutcome::Aborted { .. } => None,
            SyncOutcome::Completed { outcome } => {
                Some(completion_message(outcome.has_errors()).to_string())
            }
            SyncOutcome::Failed { message } => Some(message.clone()),
        }
    }

    /// True when changes were applied
    pub fn changed(&self) -> bool {
        matches!(self, SyncOutcome::Completed { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SyncOutcome::Failed { .. })
    }

    pub fn has_errors(&self) -> bool {
        match self {
            SyncOutcome::Completed { outcome } => outcome.has_errors(),
            SyncOutcome::Failed { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MirrorEvent;

    fn completed(events: Vec<MirrorEvent>) -> SyncOutcome {
        SyncOutcome::Completed {
            outcome: MirrorOutcome::from_events(events),
        }
    }

    #[test]
    fn status_messages() {
        assert_eq!(
            SyncOutcome::UpToDate { target: "remote" }.status_message(),
            Some("Remote already up to date".to_string())
        );
        assert_eq!(
            completed(vec![MirrorEvent::Transferred { path: "a".into() }]).status_message(),
            Some("All done!".to_string())
        );
        assert_eq!(
            completed(vec![
                MirrorEvent::Transferred { path: "a".into() },
                MirrorEvent::Error {
                    message: "denied".into()
                },
            ])
            .status_message(),
            Some("All done (but with errors, see output above)!".to_string())
        );
        assert_eq!(SyncOutcome::Aborted { target: "local" }.status_message(), None);
    }

    #[test]
    fn only_completed_counts_as_changed() {
        assert!(completed(vec![]).changed());
        assert!(!SyncOutcome::UpToDate { target: "local" }.changed());
        assert!(SyncOutcome::Failed {
            message: "x".into()
        }
        .is_failure());
    }
}
