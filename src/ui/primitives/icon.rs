use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Transfer,
    Remove,
    Deploy,
    Folder,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Info) => theme::icons::INFO,
            (true, Icon::Transfer) => theme::icons::TRANSFER,
            (true, Icon::Remove) => theme::icons::REMOVE,
            (true, Icon::Deploy) => theme::icons::DEPLOY,
            (true, Icon::Folder) => theme::icons::FOLDER,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Info) => theme::icons_ascii::INFO,
            (false, Icon::Transfer) => theme::icons_ascii::TRANSFER,
            (false, Icon::Remove) => theme::icons_ascii::REMOVE,
            (false, Icon::Deploy) => theme::icons_ascii::DEPLOY,
            (false, Icon::Folder) => theme::icons_ascii::FOLDER,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error | Icon::Remove => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Info => theme::colors::INFO,
            Icon::Transfer => theme::colors::TRANSFER,
            Icon::Deploy | Icon::Folder => return s.to_string(),
        };
        format!("{}", s.with(color))
    }
}
