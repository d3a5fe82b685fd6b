//! Search collaborator seam and the background worker that drives it.

mod commands;
mod worker;

use crate::error::SearchError;
use crate::types::Match;

pub(crate) use commands::{SearchCommand, SearchResult};
pub(crate) use worker::spawn;

/// Resolves a query into an ordered list of matches.
///
/// Runs on the search worker thread, so it may block.
pub trait Searcher: Send + Sync + 'static {
    fn search(&self, query: &str) -> Result<Vec<Match>, SearchError>;
}

impl<F> Searcher for F
where
    F: Fn(&str) -> Result<Vec<Match>, SearchError> + Send + Sync + 'static,
{
    fn search(&self, query: &str) -> Result<Vec<Match>, SearchError> {
        self(query)
    }
}
