//! List-selection and query-dispatch state machine behind the overlay.
//!
//! [`SelectionController`] owns the query, the most recently completed result
//! set and the selected row. Every handler mutates that state synchronously
//! and hands back the side effects the host must perform (issue a search,
//! launch a path, hide the window). The host feeds the outcome of those
//! effects back through [`SelectionController::on_search_results`] and
//! [`SelectionController::on_launch_finished`].
//!
//! Rendering goes through [`SelectionController::view`], a pure projection
//! of the state that is never read back.

mod view;


use crate::error::{LaunchError, SearchError};
use crate::types::{Direction, Match, SearchRequest};

pub use view::{EMPTY_MESSAGE, ResultsView, RowView, scroll_into_view};

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the search collaborator for the tagged query.
    Search(SearchRequest),
    /// Open the given path with the launch collaborator.
    Launch(String),
    /// Hide the overlay window.
    HideWindow,
}

/// Query, result set and selection of one overlay session.
///
/// `selected` is `None` exactly when `results` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    query: String,
    results: Vec<Match>,
    selected: Option<usize>,
}

impl SelectionState {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[Match] {
        &self.results
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_match(&self) -> Option<&Match> {
        self.selected.and_then(|index| self.results.get(index))
    }

    fn replace_results(&mut self, results: Vec<Match>) {
        self.selected = if results.is_empty() { None } else { Some(0) };
        self.results = results;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Status {
    /// No search has completed yet.
    #[default]
    Pending,
    Ready,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
    status: Status,
    next_request_id: u64,
    launching: Option<String>,
    notice: Option<String>,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a prefilled input, as if the user had typed `query`.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            state: SelectionState {
                query: query.into(),
                ..SelectionState::default()
            },
            ..Self::default()
        }
    }

    /// Issue the startup search for the current query.
    pub fn start(&mut self) -> Effect {
        let query = self.state.query.clone();
        self.on_query_change(query)
    }

    /// Drop the session and start over with an empty query.
    pub fn reset(&mut self) -> Effect {
        self.state = SelectionState::default();
        self.status = Status::Pending;
        self.notice = None;
        self.start()
    }

    /// Record new input text and request a search for it.
    ///
    /// Earlier requests keep running; their answers are dropped on arrival.
    pub fn on_query_change(&mut self, text: impl Into<String>) -> Effect {
        let query = text.into();
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.notice = None;
        self.state.query.clone_from(&query);
        log::debug!("search #{} issued for {query:?}", self.next_request_id);
        Effect::Search(SearchRequest {
            id: self.next_request_id,
            query,
        })
    }

    /// Apply the outcome of a search if it still belongs to the current query.
    ///
    /// Returns `true` when the result set was applied.
    pub fn on_search_results(
        &mut self,
        for_query: &str,
        outcome: Result<Vec<Match>, SearchError>,
    ) -> bool {
        if for_query != self.state.query {
            log::trace!("dropping stale results for {for_query:?}");
            return false;
        }

        match outcome {
            Ok(matches) => {
                log::debug!("{} results for {for_query:?}", matches.len());
                self.state.replace_results(matches);
                self.status = Status::Ready;
            }
            Err(err) => {
                log::warn!("search for {for_query:?} failed: {err}");
                self.state.replace_results(Vec::new());
                self.status = Status::Failed(err.to_string());
            }
        }
        true
    }

    /// Move the selection one row, without wrapping.
    ///
    /// Returns `true` when the selection changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(selected) = self.state.selected else {
            return false;
        };

        let last = self.state.results.len().saturating_sub(1);
        let next = match direction {
            Direction::Next if selected < last => selected + 1,
            Direction::Previous if selected > 0 => selected - 1,
            _ => return false,
        };
        self.state.selected = Some(next);
        true
    }

    /// Confirm the selected row.
    pub fn activate(&mut self) -> Option<Effect> {
        let path = self.state.selected_match()?.path.clone();
        log::info!("launching {path}");
        self.notice = None;
        self.launching = Some(path.clone());
        Some(Effect::Launch(path))
    }

    /// Select the clicked row and confirm it in one step.
    pub fn pointer_select(&mut self, index: usize) -> Option<Effect> {
        if index >= self.state.results.len() {
            return None;
        }
        self.state.selected = Some(index);
        self.activate()
    }

    /// Dismiss the overlay. Query, results and selection are kept.
    pub fn cancel(&mut self) -> Effect {
        Effect::HideWindow
    }

    /// Handle the answer of the launch collaborator.
    ///
    /// Success hides the window; failure leaves the window and selection as
    /// they are and keeps a notice for the user.
    pub fn on_launch_finished(
        &mut self,
        path: &str,
        outcome: Result<(), LaunchError>,
    ) -> Option<Effect> {
        self.forget_launch(path);

        match outcome {
            Ok(()) => {
                self.notice = None;
                Some(Effect::HideWindow)
            }
            Err(err) => {
                log::warn!("failed to open {path}: {err}");
                self.notice = Some(format!("Could not open {path}: {err}"));
                None
            }
        }
    }

    /// Stop tracking a launch whose answer no longer concerns this session.
    pub fn forget_launch(&mut self, path: &str) {
        if self.launching.as_deref() == Some(path) {
            self.launching = None;
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.state.query()
    }

    #[must_use]
    pub fn results(&self) -> &[Match] {
        self.state.results()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    /// Path of the most recently activated launch still in flight.
    ///
    /// Only the newest activation is tracked; hosts that allow overlapping
    /// launches should ask their launch queue for the full picture.
    #[must_use]
    pub fn launching(&self) -> Option<&str> {
        self.launching.as_deref()
    }

    /// Message about the last failed launch.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Project the state into what the result list should show.
    #[must_use]
    pub fn view(&self) -> ResultsView<'_> {
        match &self.status {
            Status::Pending => ResultsView::Loading,
            Status::Failed(message) => ResultsView::Failed(message.as_str()),
            Status::Ready if self.state.results.is_empty() => ResultsView::Empty,
            Status::Ready => ResultsView::Rows(view::rows(&self.state)),
        }
    }
}
