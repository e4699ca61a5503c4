//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncUseCase` - Preview, confirm and commit one mirror run
//!
//! ## Services
//!
//! - `DeployScope` - Per-command source folder and filters
//! - `vendor_unchanged` - Composer lock comparison for site deploys

pub mod composer;
pub mod scopes;
pub mod sync;

pub use composer::{skip_vendor, vendor_unchanged, COMPOSER_LOCK, VENDOR_EXCLUDES};
pub use scopes::DeployScope;
pub use sync::{join_remote, with_maintenance, SyncOutcome, SyncRequest, SyncUseCase};
