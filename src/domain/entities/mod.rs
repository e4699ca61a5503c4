//! Domain Entities
//!
//! - `MirrorInvocation` - the mirror directive and its arguments
//! - `CommandScript` - the full script for one subprocess run
//! - `MirrorOutcome` - classified result of one run

mod command_script;
mod mirror_invocation;
mod mirror_outcome;

pub use command_script::{
    CommandScript, Credentials, Directive, Session, PASSWORD_PLACEHOLDER, USER_PLACEHOLDER,
};
pub use mirror_invocation::{quote_arg, MirrorArg, MirrorInvocation};
pub use mirror_outcome::{MirrorEvent, MirrorOutcome};
