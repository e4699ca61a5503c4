//! Value Objects
//!
//! Small immutable types shared across layers.

mod direction;
mod mirror_options;
mod webhook_phase;

pub use direction::Direction;
pub use mirror_options::{FlagValue, MirrorFilters, MirrorOptions, PassthroughFlags};
pub use webhook_phase::WebhookPhase;
