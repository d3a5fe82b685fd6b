//! Interactive terminal UI for the launcher overlay.
//!
//! [`App`] glues the [`SelectionController`](crate::SelectionController) to
//! the search and launch workers and to the terminal: it forwards keys and
//! clicks to the controller, performs the effects the controller asks for and
//! draws the controller's view every frame.

mod actions;
pub mod components;
mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod theme;

#[cfg(test)]
mod tests;

pub use input::SearchInput;
pub use runtime::run;
pub use state::{App, SessionOutcome, UiOptions};
pub use theme::Theme;
