//! Domain Services
//!
//! Pure functions over domain types; no I/O.

pub mod flag_builder;
pub mod masking;
pub mod output_classifier;

pub use flag_builder::{passthrough_args, FlagBuilder};
pub use masking::{mask_url_credentials, Masker};
pub use output_classifier::{classify_line, classify_stdout, OutputClassifier, OutputStream};
