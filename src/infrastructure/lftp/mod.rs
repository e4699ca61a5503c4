//! lftp integration
//!
//! - `launcher` - How the program is started on this host
//! - `runner` - `MirrorRunner` that streams and classifies output

mod launcher;
mod runner;

pub use launcher::Launcher;
pub use runner::LftpRunner;
