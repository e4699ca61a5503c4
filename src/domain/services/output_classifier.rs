//! Output Classifier
//!
//! Maps lines of mirror output to [`MirrorEvent`]s using a fixed rule table.
//! Each line yields zero or one event; rules are tried in order.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{MirrorEvent, MirrorOutcome};

/// Which stream of the subprocess a line was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeKind {
    Transferred,
    Removed,
}

struct Rule {
    pattern: Regex,
    kind: ChangeKind,
}

static STDOUT_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        (r"Transferring file `(.*)'", ChangeKind::Transferred),
        (r"Removing old (?:file|directory) `(.*)'", ChangeKind::Removed),
    ]
    .into_iter()
    .map(|(pattern, kind)| Rule {
        pattern: Regex::new(pattern).expect("classifier patterns are valid"),
        kind,
    })
    .collect()
});

/// Classify a single output line.
pub fn classify_line(line: &str, stream: OutputStream) -> Option<MirrorEvent> {
    match stream {
        OutputStream::Stderr => {
            let message = line.trim_end();
            (!message.trim().is_empty()).then(|| MirrorEvent::Error {
                message: message.to_string(),
            })
        }
        OutputStream::Stdout => STDOUT_RULES.iter().find_map(|rule| {
            let path = rule.pattern.captures(line)?.get(1)?.as_str().to_string();
            Some(match rule.kind {
                ChangeKind::Transferred => MirrorEvent::Transferred { path },
                ChangeKind::Removed => MirrorEvent::Removed { path },
            })
        }),
    }
}

/// Classify a whole stdout snapshot, preserving line order.
pub fn classify_stdout(text: &str) -> Vec<MirrorEvent> {
    text.lines()
        .filter_map(|line| classify_line(line, OutputStream::Stdout))
        .collect()
}

/// Accumulates events for one subprocess run.
#[derive(Debug, Default)]
pub struct OutputClassifier {
    outcome: MirrorOutcome,
}

impl OutputClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and record a line, returning the event it produced.
    pub fn feed(&mut self, line: &str, stream: OutputStream) -> Option<MirrorEvent> {
        let event = classify_line(line, stream)?;
        self.outcome.record(event.clone());
        Some(event)
    }

    /// Freeze the accumulated outcome.
    pub fn finish(self, exit_code: Option<i32>) -> MirrorOutcome {
        self.outcome.finish(exit_code)
    }
}
