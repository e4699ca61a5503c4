//! MirrorInvocation entity - one fully-determined `mirror` directive
//!
//! Built once from resolved settings and a direction; never mutated.

use std::fmt;

/// A single argument of the mirror directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorArg {
    /// Flag without a value (`--delete`)
    Switch(String),
    /// Flag with a separate value (`--exclude ^vendor/`)
    Valued { flag: String, value: String },
    /// Flag with an inline value (`--parallel=10`)
    Joined { flag: String, value: String },
    /// Operator-supplied argument, rendered verbatim
    Raw(String),
}

impl MirrorArg {
    pub fn switch(flag: impl Into<String>) -> Self {
        Self::Switch(flag.into())
    }

    pub fn valued(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Valued {
            flag: flag.into(),
            value: value.into(),
        }
    }

    pub fn joined(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Joined {
            flag: flag.into(),
            value: value.into(),
        }
    }

    pub fn raw(arg: impl Into<String>) -> Self {
        Self::Raw(arg.into())
    }

    /// The flag name (`--exclude`), or the whole raw argument
    pub fn flag(&self) -> &str {
        match self {
            Self::Switch(flag) => flag,
            Self::Valued { flag, .. } | Self::Joined { flag, .. } => flag,
            Self::Raw(raw) => raw,
        }
    }

    /// The value, if the argument carries one
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Valued { value, .. } | Self::Joined { value, .. } => Some(value),
            Self::Switch(_) | Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for MirrorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch(flag) => f.write_str(flag),
            Self::Valued { flag, value } => write!(f, "{} {}", flag, quote_arg(value)),
            Self::Joined { flag, value } => write!(f, "{}={}", flag, quote_arg(value)),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// The `mirror` directive: flags plus source and destination operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorInvocation {
    args: Vec<MirrorArg>,
    source: String,
    destination: String,
}

impl MirrorInvocation {
    pub fn new(
        args: Vec<MirrorArg>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            args,
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn args(&self) -> &[MirrorArg] {
        &self.args
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Render the arguments as they appear in the script, one token per argument
    pub fn arg_tokens(&self) -> Vec<String> {
        self.args.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for MirrorInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mirror")?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(
            f,
            " {} {}",
            quote_arg(&self.source),
            quote_arg(&self.destination)
        )
    }
}

/// Quote a script word when it would otherwise be split or terminate the command.
pub fn quote_arg(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | ';' | '\\' | '&' | '|' | '#'));
    if !needs_quotes {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_render_by_kind() {
        assert_eq!(MirrorArg::switch("--delete").to_string(), "--delete");
        assert_eq!(
            MirrorArg::valued("--exclude", "^vendor/").to_string(),
            "--exclude ^vendor/"
        );
        assert_eq!(
            MirrorArg::joined("--parallel", "10").to_string(),
            "--parallel=10"
        );
        assert_eq!(MirrorArg::raw("--no-perms").to_string(), "--no-perms");
    }

    #[test]
    fn values_with_spaces_are_quoted() {
        assert_eq!(
            MirrorArg::valued("--exclude-glob", "my file.txt").to_string(),
            "--exclude-glob \"my file.txt\""
        );
    }

    #[test]
    fn quote_arg_escapes_quotes_and_backslashes() {
        assert_eq!(quote_arg(r#"a"b"#), r#""a\"b""#);
        assert_eq!(quote_arg(r"a\b"), r#""a\\b""#);
        assert_eq!(quote_arg(""), "\"\"");
        assert_eq!(quote_arg("./content/"), "./content/");
    }

    #[test]
    fn invocation_renders_mirror_directive() {
        let invocation = MirrorInvocation::new(
            vec![MirrorArg::switch("--reverse"), MirrorArg::valued("--include", ".htpasswd")],
            "./site/accounts/",
            "./site/accounts",
        );
        assert_eq!(
            invocation.to_string(),
            "mirror --reverse --include .htpasswd ./site/accounts/ ./site/accounts"
        );
        assert_eq!(invocation.arg_tokens().len(), 2);
    }
}
