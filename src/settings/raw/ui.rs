use quickpick::ui::theme::DEFAULT_THEME;
use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_PROMPT: &str = "Launch";
pub(super) const DEFAULT_LOG_LEVEL: &str = "info";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) prompt: Option<String>,
    pub(super) theme: Option<String>,
    pub(super) initial_query: Option<String>,
    pub(super) reset_on_show: Option<bool>,
    pub(super) log_level: Option<String>,
}

pub(super) struct UiResolution {
    pub(super) prompt: String,
    pub(super) theme: String,
    pub(super) initial_query: String,
    pub(super) reset_on_show: bool,
    pub(super) log_level: String,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(prompt) = cli.prompt.clone() {
            self.prompt = Some(prompt);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.theme = Some(theme);
        }
        if let Some(level) = cli.log_level.clone() {
            self.log_level = Some(level);
        }
    }

    pub(super) fn finalize(self) -> UiResolution {
        UiResolution {
            prompt: self.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            theme: self.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
            initial_query: self.initial_query.unwrap_or_default(),
            reset_on_show: self.reset_on_show.unwrap_or(false),
            log_level: self
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
