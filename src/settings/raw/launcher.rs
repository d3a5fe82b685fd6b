use quickpick::providers::{default_opener, default_terminal};
use serde::Deserialize;

/// Commands used to open paths, prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LauncherSection {
    pub(super) opener: Option<Vec<String>>,
    pub(super) terminal: Option<Vec<String>>,
}

pub(super) struct LauncherResolution {
    pub(super) opener: Vec<String>,
    pub(super) terminal: Vec<String>,
}

impl LauncherSection {
    pub(super) fn finalize(self) -> LauncherResolution {
        LauncherResolution {
            opener: self.opener.unwrap_or_else(default_opener),
            terminal: self.terminal.unwrap_or_else(default_terminal),
        }
    }
}
