//! Mirror options - the settings-derived inputs of the flag builder

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Path and glob filters applied to a mirror
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorFilters {
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub exclude_glob: Vec<String>,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub include_glob: Vec<String>,
}

impl MirrorFilters {
    /// Filters used by scoped syncs: only hidden files are excluded
    pub fn hidden_excluded() -> Self {
        Self {
            exclude_glob: vec![".*".to_string(), ".*/".to_string()],
            ..Self::default()
        }
    }
}

/// Value of an entry in the passthrough flag map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Integer(i) => write!(f, "{}", i),
            FlagValue::Float(x) => write!(f, "{}", x),
            FlagValue::Text(s) => f.write_str(s),
        }
    }
}

/// Raw mirror flags supplied by the operator
///
/// Either a list rendered verbatim, or a map where `false` omits the flag,
/// `true` emits it bare and anything else emits `--flag value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PassthroughFlags {
    List(Vec<String>),
    Map(BTreeMap<String, FlagValue>),
}

impl Default for PassthroughFlags {
    fn default() -> Self {
        PassthroughFlags::List(Vec::new())
    }
}

/// Tuning knobs of the mirror command
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorOptions {
    /// Number of parallel transfers
    pub parallel: u32,
    /// Follow symbolic links instead of recreating them
    pub dereference: bool,
    /// Appended after all generated flags
    pub passthrough: PassthroughFlags,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            parallel: 10,
            dereference: true,
            passthrough: PassthroughFlags::default(),
        }
    }
}
