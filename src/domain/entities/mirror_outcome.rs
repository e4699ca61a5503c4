//! MirrorOutcome entity - what one mirror run did
//!
//! Created empty when the subprocess spawns, accumulated as output arrives,
//! and handed out by value once the process has exited.

/// A semantic event classified from the mirror tool's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorEvent {
    /// A file was (or would be) transferred
    Transferred { path: String },
    /// A file or directory was (or would be) removed from the destination
    Removed { path: String },
    /// A line was written to the error stream
    Error { message: String },
}

impl MirrorEvent {
    /// Returns true if this event represents a change to the destination
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Transferred { .. } | Self::Removed { .. })
    }

    /// Returns true for error-stream events
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Aggregated result of one mirror subprocess run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorOutcome {
    events: Vec<MirrorEvent>,
    exit_code: Option<i32>,
}

impl MirrorOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an outcome from already-classified events
    pub fn from_events(events: Vec<MirrorEvent>) -> Self {
        Self {
            events,
            exit_code: None,
        }
    }

    /// Record one event; order of recording is preserved
    pub fn record(&mut self, event: MirrorEvent) {
        self.events.push(event);
    }

    /// Freeze the outcome with the process exit code
    pub fn finish(mut self, exit_code: Option<i32>) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// At least one transfer or removal was observed
    pub fn has_changes(&self) -> bool {
        self.events.iter().any(MirrorEvent::is_change)
    }

    /// At least one error-stream write was observed
    pub fn has_errors(&self) -> bool {
        self.events.iter().any(MirrorEvent::is_error)
    }

    pub fn events(&self) -> &[MirrorEvent] {
        &self.events
    }

    pub fn transferred_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MirrorEvent::Transferred { .. }))
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MirrorEvent::Removed { .. }))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_error()).count()
    }

    /// Exit code of the subprocess; `None` if killed by a signal or not yet exited
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcome_has_nothing() {
        let outcome = MirrorOutcome::new();
        assert!(!outcome.has_changes());
        assert!(!outcome.has_errors());
        assert!(outcome.events().is_empty());
    }

    #[test]
    fn errors_do_not_count_as_changes() {
        let outcome = MirrorOutcome::from_events(vec![MirrorEvent::Error {
            message: "connection refused".to_string(),
        }]);
        assert!(!outcome.has_changes());
        assert!(outcome.has_errors());
    }

    #[test]
    fn duplicate_paths_are_counted_separately() {
        let mut outcome = MirrorOutcome::new();
        outcome.record(MirrorEvent::Transferred {
            path: "a.txt".to_string(),
        });
        outcome.record(MirrorEvent::Transferred {
            path: "a.txt".to_string(),
        });
        outcome.record(MirrorEvent::Removed {
            path: "b".to_string(),
        });
        let outcome = outcome.finish(Some(0));
        assert_eq!(outcome.transferred_count(), 2);
        assert_eq!(outcome.removed_count(), 1);
        assert_eq!(outcome.exit_code(), Some(0));
    }
}
