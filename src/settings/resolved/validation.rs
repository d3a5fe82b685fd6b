use quickpick::logging::parse_level;
use quickpick::ui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if config.max_results == 0 {
        return Err(ConfigError::invalid(
            "search.max_results",
            config.max_results.to_string(),
            sources.source_for_max_results(),
            "must be at least 1",
        ));
    }

    if theme::by_name(&config.theme_name).is_none() {
        let known: Vec<&str> = theme::names().collect();
        return Err(ConfigError::invalid(
            "ui.theme",
            config.theme_name.clone(),
            sources.source_for_theme(),
            format!("unknown theme (expected one of: {})", known.join(", ")),
        ));
    }

    if parse_level(&config.log_level).is_err() {
        return Err(ConfigError::invalid(
            "ui.log_level",
            config.log_level.clone(),
            sources.source_for_log_level(),
            "expected off, error, warn, info, debug or trace",
        ));
    }

    for (key, list) in [
        ("search.common", &config.common),
        ("search.entries", &config.entries),
    ] {
        for entry in list {
            if entry.name.is_empty() || entry.path.is_empty() {
                return Err(ConfigError::invalid(
                    key,
                    format!("{{ name = {:?}, path = {:?} }}", entry.name, entry.path),
                    SettingSource::ConfigKey(key),
                    "entries need a name and a path",
                ));
            }
        }
    }

    for web in &config.web {
        if web.prefix.is_empty() || web.url.is_empty() {
            return Err(ConfigError::invalid(
                "search.web",
                format!("{{ prefix = {:?}, url = {:?} }}", web.prefix, web.url),
                SettingSource::ConfigKey("search.web"),
                "shortcuts need a prefix and a url",
            ));
        }
    }

    for (key, argv) in [
        ("launcher.opener", &config.opener),
        ("launcher.terminal", &config.terminal),
    ] {
        if argv.iter().all(|arg| arg.trim().is_empty()) {
            return Err(ConfigError::invalid(
                key,
                argv.join(" "),
                SettingSource::ConfigKey(key),
                "must name a program",
            ));
        }
    }

    Ok(())
}
