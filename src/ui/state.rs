use std::sync::Arc;

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use super::input::SearchInput;
use super::theme::Theme;
use crate::controller::{Effect, SelectionController, scroll_into_view};
use crate::systems::launch::Launcher;
use crate::systems::search::Searcher;

mod launch_runtime;
mod search_runtime;

use launch_runtime::LaunchRuntime;
use search_runtime::SearchRuntime;

/// Presentation and lifecycle options for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
    /// Label drawn in front of the input.
    pub prompt: String,
    /// Start every `run` with a fresh, empty session.
    pub reset_on_show: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            prompt: "Launch".to_string(),
            reset_on_show: false,
        }
    }
}

/// How a visible session ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SessionOutcome {
    /// Path that was opened successfully, if the session ended with a launch.
    pub launched: Option<String>,
    /// Query text when the window was hidden.
    pub query: String,
}

impl<'a> Drop for App<'a> {
    fn drop(&mut self) {
        self.search.shutdown();
        self.launch.shutdown();
    }
}

pub struct App<'a> {
    pub(crate) controller: SelectionController,
    pub search_input: SearchInput<'a>,
    pub(crate) options: UiOptions,
    pub theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    /// First visible result row.
    pub(crate) scroll_offset: usize,
    /// Body of the result table as last drawn, used for pointer hit-testing.
    pub(crate) results_area: Rect,
    pub(crate) show_logs: bool,
    pub(super) search: SearchRuntime,
    pub(super) launch: LaunchRuntime,
    visible: bool,
    started: bool,
    /// Bumped whenever the overlay is shown or hidden, so launches answered
    /// after their session ended are recognised.
    session: u64,
    launched: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(searcher: Arc<dyn Searcher>, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            controller: SelectionController::new(),
            search_input: SearchInput::default(),
            options: UiOptions::default(),
            theme: Theme::default(),
            throbber_state: ThrobberState::default(),
            scroll_offset: 0,
            results_area: Rect::default(),
            show_logs: false,
            search: SearchRuntime::spawn(searcher),
            launch: LaunchRuntime::spawn(launcher),
            visible: false,
            started: false,
            session: 0,
            launched: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Prefill the input before the first search is issued.
    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.search_input = SearchInput::new(query.clone());
        self.controller = SelectionController::with_query(query);
        self
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    #[must_use]
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Make the overlay visible, issuing the startup search the first time.
    pub(crate) fn show(&mut self) {
        self.visible = true;
        self.session += 1;
        self.launched = None;
        if !self.started {
            self.started = true;
            let effect = self.controller.start();
            self.apply(effect);
        } else if self.options.reset_on_show {
            self.search_input.set_text("");
            self.scroll_offset = 0;
            let effect = self.controller.reset();
            self.apply(effect);
        }
    }

    pub(crate) fn hide_window(&mut self) {
        log::debug!("hiding overlay");
        self.visible = false;
        self.session += 1;
    }

    pub(crate) fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            launched: self.launched.clone(),
            query: self.controller.query().to_string(),
        }
    }

    pub(crate) fn session(&self) -> u64 {
        self.session
    }

    /// Path of the newest launch of this session still waiting for an answer.
    pub(crate) fn opening(&self) -> Option<&str> {
        self.launch.latest_in(self.session)
    }

    pub(crate) fn record_launch(&mut self, path: String) {
        self.launched = Some(path);
    }

    /// Perform a side effect requested by the controller.
    pub(crate) fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Search(request) => self.search.issue(request),
            Effect::Launch(path) => {
                if !self.launch.open(path.clone(), self.session) {
                    let error = crate::error::LaunchError::WorkerGone;
                    if let Some(effect) = self.controller.on_launch_finished(&path, Err(error)) {
                        self.apply(effect);
                    }
                }
            }
            Effect::HideWindow => self.hide_window(),
        }
    }

    /// Rows of result table body that fit on screen.
    pub(crate) fn viewport_rows(&self) -> usize {
        usize::from(self.results_area.height)
    }

    pub(crate) fn sync_scroll(&mut self) {
        self.scroll_offset = scroll_into_view(
            self.scroll_offset,
            self.controller.selected_index(),
            self.viewport_rows(),
        );
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.search.is_in_flight() || self.launch.is_busy()
    }
}
