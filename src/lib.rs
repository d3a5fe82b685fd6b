//! Core crate exports for building and running the `quickpick` launcher overlay.
//!
//! The selection state machine lives in [`controller`] and knows nothing about
//! terminals or threads. [`ui`] drives it from a ratatui event loop and hands
//! searches and launches to the background workers in [`systems`].

pub mod app_dirs;
pub mod controller;
pub mod error;
pub mod logging;
pub mod providers;
pub mod systems;
pub mod types;
pub mod ui;

pub use controller::{Effect, ResultsView, RowView, SelectionController, SelectionState};
pub use error::{LaunchError, SearchError};
pub use providers::{CatalogSearcher, CommandLauncher, WebShortcut};
pub use systems::launch::Launcher;
pub use systems::search::Searcher;
pub use types::{Direction, Match, SearchRequest};
pub use ui::{App, SessionOutcome, Theme, UiOptions, run};
