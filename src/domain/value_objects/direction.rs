//! Direction value object - which side of a mirror is the source
//!
//! - `Push`: local tree → remote server
//! - `Pull`: remote server → local tree

use serde::{Deserialize, Serialize};

/// Transfer direction of a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Mirror the local tree onto the remote server
    Push,
    /// Mirror the remote server onto the local tree
    Pull,
}

impl Direction {
    /// Returns true for push
    pub fn is_push(&self) -> bool {
        matches!(self, Direction::Push)
    }

    /// Name of the side that receives changes ("remote" or "local")
    pub fn target_name(&self) -> &'static str {
        match self {
            Direction::Push => "remote",
            Direction::Pull => "local",
        }
    }

    /// Preposition used in headers ("to" or "from")
    pub fn preposition(&self) -> &'static str {
        match self {
            Direction::Push => "to",
            Direction::Pull => "from",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Push => write!(f, "push"),
            Direction::Pull => write!(f, "pull"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_targets_remote() {
        assert!(Direction::Push.is_push());
        assert_eq!(Direction::Push.target_name(), "remote");
        assert_eq!(Direction::Push.preposition(), "to");
    }

    #[test]
    fn pull_targets_local() {
        assert!(!Direction::Pull.is_push());
        assert_eq!(Direction::Pull.target_name(), "local");
        assert_eq!(Direction::Pull.preposition(), "from");
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Push.to_string(), "push");
        assert_eq!(Direction::Pull.to_string(), "pull");
    }
}
