use quickpick::providers::{DEFAULT_MAX_RESULTS, default_common};
use quickpick::{Match, WebShortcut};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Search configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
    pub(super) max_results: Option<usize>,
    pub(super) common: Option<Vec<EntrySection>>,
    pub(super) entries: Vec<EntrySection>,
    pub(super) web: Option<Vec<WebSection>>,
}

/// A catalog entry as written in a config file.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct EntrySection {
    pub(super) name: String,
    pub(super) path: String,
    #[serde(default)]
    pub(super) application: bool,
    #[serde(default)]
    pub(super) score: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct WebSection {
    pub(super) prefix: String,
    pub(super) label: String,
    pub(super) url: String,
}

pub(super) struct SearchResolution {
    pub(super) max_results: usize,
    pub(super) common: Vec<Match>,
    pub(super) entries: Vec<Match>,
    pub(super) web: Vec<WebShortcut>,
}

impl EntrySection {
    fn into_match(self) -> Match {
        let name = self.name.trim().to_string();
        let path = self.path.trim().to_string();
        if self.application {
            Match::application(name, path, self.score)
        } else {
            Match::file(name, path, self.score)
        }
    }
}

impl SearchSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(max_results) = cli.max_results {
            self.max_results = Some(max_results);
        }
    }

    pub(super) fn finalize(self) -> SearchResolution {
        // Explicit empty lists disable the built-in entries and shortcuts.
        let common = match self.common {
            Some(common) => common.into_iter().map(EntrySection::into_match).collect(),
            None => default_common(),
        };
        let web = match self.web {
            Some(web) => web
                .into_iter()
                .map(|web| WebShortcut::new(web.prefix.trim(), web.label, web.url))
                .collect(),
            None => WebShortcut::defaults(),
        };

        SearchResolution {
            max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            common,
            entries: self.entries.into_iter().map(EntrySection::into_match).collect(),
            web,
        }
    }
}
