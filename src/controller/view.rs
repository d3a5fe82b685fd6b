use super::SelectionState;
use crate::types::Match;

/// Text shown in place of the list when a search finds nothing.
pub const EMPTY_MESSAGE: &str = "No results found";

/// What the result area should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView<'a> {
    /// Waiting for the first search to complete.
    Loading,
    Rows(Vec<RowView<'a>>),
    /// The last search completed without matches.
    Empty,
    /// The last search failed with the given message.
    Failed(&'a str),
}

impl ResultsView<'_> {
    /// Rows to render; empty for every non-list state.
    #[must_use]
    pub fn rows(&self) -> &[RowView<'_>] {
        match self {
            Self::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Message to render instead of rows, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading | Self::Rows(_) => None,
            Self::Empty => Some(EMPTY_MESSAGE.to_string()),
            Self::Failed(message) => Some(format!("Error: {message}")),
        }
    }
}

/// A rendered row and whether it carries the selection marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub index: usize,
    pub item: &'a Match,
    pub selected: bool,
}

pub(super) fn rows(state: &SelectionState) -> Vec<RowView<'_>> {
    state
        .results
        .iter()
        .enumerate()
        .map(|(index, item)| RowView {
            index,
            item,
            selected: state.selected == Some(index),
        })
        .collect()
}

/// Compute the first visible row so that `selected` is fully in view.
///
/// Scrolls as little as possible: an already visible row keeps the current
/// offset, a row above the viewport becomes the first row and a row below
/// it becomes the last one.
#[must_use]
pub fn scroll_into_view(offset: usize, selected: Option<usize>, viewport: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if viewport == 0 {
        return offset;
    }

    if selected < offset {
        selected
    } else if selected >= offset + viewport {
        selected + 1 - viewport
    } else {
        offset
    }
}
