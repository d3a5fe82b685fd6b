use std::collections::HashSet;

use frizbee::{Options, match_list};
use serde::{Deserialize, Serialize};

use super::{TERMINAL_PREFIX, calculator};
use crate::error::SearchError;
use crate::systems::search::Searcher;
use crate::types::Match;

/// Score given to `>` command entries so they lead the list.
const COMMAND_SCORE: i64 = 20_000;
/// Score given to web shortcut and calculator entries.
const WEB_SCORE: i64 = 10_000;
pub const DEFAULT_MAX_RESULTS: usize = 20;

const GOOGLE: &str = "https://www.google.com/search?q=";
const YOUTUBE: &str = "https://www.youtube.com/results?search_query=";
const GITHUB: &str = "https://github.com/search?q=";

/// A `prefix: term` shortcut that turns the term into a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebShortcut {
    /// Prefix including its trailing colon, e.g. `g:`.
    pub prefix: String,
    pub label: String,
    /// URL the encoded term is appended to.
    pub url: String,
}

impl WebShortcut {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            label: label.into(),
            url: url.into(),
        }
    }

    /// Shortcuts available when none are configured.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("g:", "Google", GOOGLE),
            Self::new("google:", "Google", GOOGLE),
            Self::new("yt:", "YouTube", YOUTUBE),
            Self::new("youtube:", "YouTube", YOUTUBE),
            Self::new("gh:", "GitHub", GITHUB),
            Self::new("github:", "GitHub", GITHUB),
            Self::new("wiki:", "Wikipedia", "https://en.wikipedia.org/wiki/"),
        ]
    }

    fn resolve(&self, query: &str) -> Option<Match> {
        let term = query.strip_prefix(self.prefix.as_str())?.trim();
        if term.is_empty() {
            return None;
        }
        Some(Match::application(
            format!("{}: {term}", self.label),
            format!("{}{}", self.url, urlencoding::encode(term)),
            WEB_SCORE,
        ))
    }
}

/// Fuzzy search over a fixed list of configured entries.
///
/// The empty query returns the `common` entries; anything else is matched
/// against the names of all entries.
#[derive(Debug, Clone)]
pub struct CatalogSearcher {
    common: Vec<Match>,
    entries: Vec<Match>,
    web: Vec<WebShortcut>,
    max_results: usize,
}

impl CatalogSearcher {
    #[must_use]
    pub fn new(common: Vec<Match>, entries: Vec<Match>) -> Self {
        let mut entries = entries;
        let mut seen: HashSet<String> = entries.iter().map(|entry| entry.path.clone()).collect();
        for entry in &common {
            if seen.insert(entry.path.clone()) {
                entries.push(entry.clone());
            }
        }

        Self {
            common,
            entries,
            web: WebShortcut::defaults(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn with_web_shortcuts(mut self, web: Vec<WebShortcut>) -> Self {
        self.web = web;
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    fn common_items(&self) -> Vec<Match> {
        let mut items = self.common.clone();
        items.sort_by(|a, b| b.score.cmp(&a.score));
        items.truncate(self.max_results);
        items
    }

    fn fuzzy(&self, query: &str) -> Vec<Match> {
        let haystacks: Vec<&str> = self.entries.iter().map(|entry| entry.name.as_str()).collect();
        let mut results: Vec<Match> = match_list(query, &haystacks, options_for_query(query))
            .into_iter()
            .filter(|found| found.score > 0)
            .filter_map(|found| {
                let entry = self.entries.get(found.index_in_haystack as usize)?;
                let mut result = entry.clone();
                result.score = entry.score + i64::from(found.score);
                Some(result)
            })
            .collect();
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(self.max_results);
        results
    }
}

impl Searcher for CatalogSearcher {
    fn search(&self, query: &str) -> Result<Vec<Match>, SearchError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(self.common_items());
        }

        if let Some(command) = trimmed.strip_prefix('>').map(str::trim)
            && !command.is_empty()
        {
            return Ok(vec![Match::application(
                format!("Run: {command}"),
                format!("{TERMINAL_PREFIX}{command}"),
                COMMAND_SCORE,
            )]);
        }

        if let Some(result) = self.web.iter().find_map(|shortcut| shortcut.resolve(trimmed)) {
            return Ok(vec![result]);
        }

        if let Some(result) = calculator::evaluate(trimmed, WEB_SCORE) {
            return Ok(vec![result]);
        }

        Ok(self.fuzzy(trimmed))
    }
}

/// Entries listed for the empty query when none are configured.
#[must_use]
pub fn default_common() -> Vec<Match> {
    let (calc, editor, terminal) = if cfg!(target_os = "windows") {
        ("calc.exe", "notepad.exe", "terminal:powershell")
    } else if cfg!(target_os = "macos") {
        (
            "/System/Applications/Calculator.app",
            "/System/Applications/TextEdit.app",
            "/System/Applications/Utilities/Terminal.app",
        )
    } else {
        ("terminal:bc -l", "terminal:nano", "terminal:sh")
    };

    vec![
        Match::application("Calculator", calc, 1000),
        Match::application("Text Editor", editor, 900),
        Match::application("Terminal", terminal, 800),
    ]
}

/// Builds fuzzy matching options for the provided query.
fn options_for_query(query: &str) -> Options {
    let length = query.chars().count();
    let allowed_typos: u16 = match length {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    };

    Options {
        prefilter: true,
        max_typos: Some(allowed_typos),
        sort: false,
        ..Options::default()
    }
}
