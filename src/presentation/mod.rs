//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Header and warning rendering
//! - Diagnostic logging setup
//!
//! ## Structure
//!
//! - `cli` - Clap definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering
//! - `logging` - `tracing` subscriber

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_event_sink, create_runner, create_sync_use_case};
