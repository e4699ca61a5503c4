//! CommandScript entity - the line-oriented script handed to the mirror tool
//!
//! Directive order is fixed: `set` lines, `open`, `user`, one command, `bye`.
//! Credentials only ever leave this type through [`CommandScript::render`];
//! everything meant for humans goes through [`CommandScript::render_masked`].

use std::fmt;

use super::mirror_invocation::{quote_arg, MirrorInvocation};

pub const USER_PLACEHOLDER: &str = "<user>";
pub const PASSWORD_PLACEHOLDER: &str = "<password>";

/// FTP login credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &PASSWORD_PLACEHOLDER)
            .finish()
    }
}

/// Connection preamble shared by every script: options, host, login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    options: Vec<(String, String)>,
    host: String,
    credentials: Credentials,
}

impl Session {
    pub fn new(
        options: Vec<(String, String)>,
        host: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            options,
            host: host.into(),
            credentials,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// One line of the script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Set { option: String, value: String },
    Open { host: String },
    User(Credentials),
    Mirror(MirrorInvocation),
    Cat { path: String },
    Bye,
}

impl Directive {
    fn render(&self, masked: bool) -> String {
        match self {
            Directive::Set { option, value } => format!("set {} {}", option, quote_arg(value)),
            Directive::Open { host } => format!("open {}", quote_arg(host)),
            Directive::User(_) if masked => {
                format!("user {} {}", USER_PLACEHOLDER, PASSWORD_PLACEHOLDER)
            }
            Directive::User(credentials) => format!(
                "user {} {}",
                quote_arg(credentials.user()),
                quote_arg(credentials.password())
            ),
            Directive::Mirror(invocation) => invocation.to_string(),
            Directive::Cat { path } => format!("cat {}", quote_arg(path)),
            Directive::Bye => "bye".to_string(),
        }
    }
}

/// Complete script for one subprocess run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandScript {
    directives: Vec<Directive>,
}

impl CommandScript {
    /// Script that runs a single mirror
    pub fn mirror(session: &Session, invocation: MirrorInvocation) -> Self {
        Self::wrap(session, Directive::Mirror(invocation))
    }

    /// Script that prints a single remote file to stdout
    pub fn cat(session: &Session, path: impl Into<String>) -> Self {
        Self::wrap(session, Directive::Cat { path: path.into() })
    }

    fn wrap(session: &Session, command: Directive) -> Self {
        let mut directives: Vec<Directive> = session
            .options
            .iter()
            .map(|(option, value)| Directive::Set {
                option: option.clone(),
                value: value.clone(),
            })
            .collect();
        directives.push(Directive::Open {
            host: session.host.clone(),
        });
        directives.push(Directive::User(session.credentials.clone()));
        directives.push(command);
        directives.push(Directive::Bye);
        Self { directives }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Password of the `user` directive, if any (used to scrub echoed output)
    pub fn password(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            Directive::User(credentials) => Some(credentials.password()),
            _ => None,
        })
    }

    /// The script passed to the subprocess, credentials included
    pub fn render(&self) -> String {
        self.join(false)
    }

    /// The script with the `user` directive replaced by placeholders
    pub fn render_masked(&self) -> String {
        self.join(true)
    }

    fn join(&self, masked: bool) -> String {
        self.directives
            .iter()
            .map(|d| d.render(masked))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MirrorArg;

    fn session() -> Session {
        Session::new(
            vec![
                ("ftp:ssl-force".to_string(), "true".to_string()),
                ("ssl:verify-certificate".to_string(), "false".to_string()),
            ],
            "ftp.example.com",
            Credentials::new("alice", "secretpw"),
        )
    }

    fn invocation() -> MirrorInvocation {
        MirrorInvocation::new(
            vec![MirrorArg::switch("--delete"), MirrorArg::switch("--reverse")],
            "./content/",
            "./content",
        )
    }

    #[test]
    fn mirror_script_has_fixed_directive_order() {
        let script = CommandScript::mirror(&session(), invocation());
        let kinds: Vec<&str> = script
            .directives()
            .iter()
            .map(|d| match d {
                Directive::Set { .. } => "set",
                Directive::Open { .. } => "open",
                Directive::User(_) => "user",
                Directive::Mirror(_) => "mirror",
                Directive::Cat { .. } => "cat",
                Directive::Bye => "bye",
            })
            .collect();
        assert_eq!(kinds, vec!["set", "set", "open", "user", "mirror", "bye"]);
    }

    #[test]
    fn render_includes_credentials() {
        let script = CommandScript::mirror(&session(), invocation());
        assert!(script.render().contains("user alice secretpw"));
        assert_eq!(script.password(), Some("secretpw"));
    }

    #[test]
    fn masked_render_hides_credentials() {
        let script = CommandScript::mirror(&session(), invocation());
        let masked = script.render_masked();
        insta::assert_snapshot!(masked, @"set ftp:ssl-force true; set ssl:verify-certificate false; open ftp.example.com; user <user> <password>; mirror --delete --reverse ./content/ ./content; bye");
        assert!(!masked.contains("secretpw"));
        assert!(!masked.contains("alice"));
    }

    #[test]
    fn password_with_separator_is_quoted() {
        let session = Session::new(vec![], "host", Credentials::new("bob", "a;b c"));
        let script = CommandScript::cat(&session, "./composer.lock");
        assert_eq!(
            script.render(),
            "open host; user bob \"a;b c\"; cat ./composer.lock; bye"
        );
    }

    #[test]
    fn credentials_debug_is_masked() {
        let debug = format!("{:?}", Credentials::new("alice", "secretpw"));
        assert!(!debug.contains("secretpw"));
        assert!(debug.contains("<password>"));
    }
}
