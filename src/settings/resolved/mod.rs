use quickpick::{Match, WebShortcut};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub prompt: String,
    pub theme_name: String,
    pub initial_query: String,
    pub reset_on_show: bool,
    pub log_level: String,
    pub max_results: usize,
    /// Entries listed for the empty query.
    pub common: Vec<Match>,
    /// Entries matched against typed queries.
    pub entries: Vec<Match>,
    pub web: Vec<WebShortcut>,
    pub opener: Vec<String>,
    pub terminal: Vec<String>,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}

#[cfg(test)]
pub(super) fn sample() -> ResolvedConfig {
    ResolvedConfig {
        prompt: "Launch".into(),
        theme_name: "slate".into(),
        initial_query: String::new(),
        reset_on_show: false,
        log_level: "info".into(),
        max_results: 20,
        common: vec![Match::application("Terminal", "/usr/bin/xterm", 1)],
        entries: vec![Match::file("notes.md", "/home/me/notes.md", 0)],
        web: WebShortcut::defaults(),
        opener: vec!["xdg-open".into()],
        terminal: vec!["x-terminal-emulator".into(), "-e".into()],
    }
}
