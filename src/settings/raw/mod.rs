use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod launcher;
mod search;
mod ui;

use launcher::LauncherSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    ui: UiSection,
    search: SearchSection,
    launcher: LauncherSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.ui.apply_cli_overrides(cli);
        self.search.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "QUICKPICK__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            log_level: detect_source(
                cli.log_level.is_some(),
                self.ui.log_level.is_some(),
                "QUICKPICK__UI__LOG_LEVEL",
                "--log-level",
                "ui.log_level",
            ),
            max_results: detect_source(
                cli.max_results.is_some(),
                self.search.max_results.is_some(),
                "QUICKPICK__SEARCH__MAX_RESULTS",
                "--max-results",
                "search.max_results",
            ),
        };

        let ui = self.ui.finalize();
        let search = self.search.finalize();
        let launcher = self.launcher.finalize();

        let config = ResolvedConfig {
            prompt: ui.prompt,
            theme_name: ui.theme,
            initial_query: ui.initial_query,
            reset_on_show: ui.reset_on_show,
            log_level: ui.log_level,
            max_results: search.max_results,
            common: search.common,
            entries: search.entries,
            web: search.web,
            opener: launcher.opener,
            terminal: launcher.terminal,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
