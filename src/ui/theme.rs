use crossterm::style::Color;

/// Design tokens for the kirby-deploy console.
///
/// All colors and icons used by the console come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
    /// Hosts and remote paths
    pub const ACCENT: Color = Color::Magenta;
    /// Transferred files
    pub const TRANSFER: Color = Color::Blue;
}

pub mod icons {
    pub const SUCCESS: &str = "✔";
    pub const ERROR: &str = "✖";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";
    pub const TRANSFER: &str = "→";
    pub const REMOVE: &str = "⨯";
    pub const DEPLOY: &str = "🚀";
    pub const FOLDER: &str = "🗂️ ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const INFO: &str = "[i]";
    pub const TRANSFER: &str = "->";
    pub const REMOVE: &str = "x";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const FOLDER: &str = "[SYNC]";
}
