//! Terminal UI
//!
//! Design tokens, terminal detection and the small text primitives the
//! console output is built from.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
pub use primitives::icon::Icon;
pub use primitives::text::ColoredText;
