use serde::{Deserialize, Serialize};

/// One candidate result produced by a search collaborator.
///
/// The `score` is carried for display only; the controller keeps whatever
/// order the searcher produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub name: String,
    pub path: String,
    #[serde(rename = "is_app", alias = "application", default)]
    pub is_application: bool,
    #[serde(default)]
    pub score: i64,
}

impl Match {
    /// Build a match for an application entry.
    #[must_use]
    pub fn application(name: impl Into<String>, path: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_application: true,
            score,
        }
    }

    /// Build a match for a plain file entry.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_application: false,
            score,
        }
    }

    /// Short label describing the entry kind.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        if self.is_application { "app" } else { "file" }
    }
}
