use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const DEFAULT_THEME: &str = "slate";

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    prompt: Style::new().fg(Color::LightCyan),
    empty: Style::new().fg(Color::DarkGray),
    error: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
    status: Style::new().fg(Color::Gray),
};

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(200, 200, 200))
        .fg(Color::Rgb(120, 120, 0)),
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    error: Style::new()
        .fg(Color::Rgb(180, 20, 20))
        .add_modifier(Modifier::BOLD),
    status: Style::new().fg(Color::Rgb(80, 80, 80)),
};

const BUILTINS: &[(&str, Theme)] = &[(DEFAULT_THEME, SLATE), ("light", LIGHT)];

/// Look up a built-in theme, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILTINS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
        .map(|(_, theme)| *theme)
}

/// Names of the built-in themes.
#[must_use]
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(by_name("LIGHT"), Some(LIGHT));
        assert_eq!(by_name("slate"), Some(SLATE));
        assert_eq!(by_name("solarized"), None);
    }

    #[test]
    fn default_theme_is_registered() {
        assert!(names().any(|name| name == DEFAULT_THEME));
    }
}
