//! Sync Module
//!
//! The preview → confirm → commit state machine for one mirror run.
//!
//! ## Structure
//!
//! - `request` - What to sync (`SyncRequest`)
//! - `outcome` - Terminal states (`SyncOutcome`)
//! - `maintenance` - Start/finish webhook bracketing
//! - `use_case` - The orchestrator itself (`SyncUseCase`)

mod maintenance;
mod outcome;
mod request;
mod use_case;

pub use maintenance::with_maintenance;
pub use outcome::SyncOutcome;
pub use request::{join_remote, SyncRequest};
pub use use_case::SyncUseCase;
