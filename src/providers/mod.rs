//! Default collaborators used by the `quickpick` binary.
//!
//! A fuzzy catalog over configured entries, with web shortcuts, `>` commands
//! and a calculator, plus a launcher that hands paths to an external command.
//! Embedders can plug their own [`Searcher`](crate::Searcher) and [`Launcher`](crate::Launcher).

mod calculator;
mod catalog;
mod command;

pub use catalog::{CatalogSearcher, DEFAULT_MAX_RESULTS, WebShortcut, default_common};
pub use command::{CommandLauncher, default_opener, default_terminal};

/// Path prefix for entries that run a shell command in a terminal.
pub const TERMINAL_PREFIX: &str = "terminal:";

/// Path prefix for informational entries that open nothing.
pub const RESULT_PREFIX: &str = "result:";
