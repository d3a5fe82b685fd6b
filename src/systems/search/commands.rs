use crate::error::SearchError;
use crate::types::{Match, SearchRequest};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
    /// Run the searcher for a tagged query.
    Query(SearchRequest),
    /// Stop the background worker thread.
    Shutdown,
}

/// Answer for one [`SearchCommand::Query`].
#[derive(Debug)]
pub(crate) struct SearchResult {
    /// Identifier of the request that produced this answer.
    pub id: u64,
    /// Query the answer belongs to.
    pub query: String,
    pub outcome: Result<Vec<Match>, SearchError>,
}
