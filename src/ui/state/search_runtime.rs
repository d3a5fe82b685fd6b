use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::systems::search::{self, SearchCommand, SearchResult, Searcher};
use crate::types::SearchRequest;

/// UI-side handle on the search worker.
pub(crate) struct SearchRuntime {
    tx: Sender<SearchCommand>,
    rx: Receiver<SearchResult>,
    latest_query_id: Arc<AtomicU64>,
    issued: Option<SearchRequest>,
    last_answered: u64,
}

impl SearchRuntime {
    pub(crate) fn spawn(searcher: Arc<dyn Searcher>) -> Self {
        let (tx, rx, latest_query_id) = search::spawn(searcher);
        Self {
            tx,
            rx,
            latest_query_id,
            issued: None,
            last_answered: 0,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }

    pub(crate) fn issue(&mut self, request: SearchRequest) {
        self.latest_query_id.store(request.id, AtomicOrdering::Release);
        self.issued = Some(request.clone());
        if self.tx.send(SearchCommand::Query(request)).is_err() {
            log::error!("search worker is gone; request dropped");
        }
    }

    pub(crate) fn record_answer(&mut self, id: u64) {
        self.last_answered = self.last_answered.max(id);
    }

    /// Whether the most recent request is still unanswered.
    pub(crate) fn is_in_flight(&self) -> bool {
        self.issued
            .as_ref()
            .is_some_and(|request| request.id > self.last_answered)
    }

    /// Give up on the most recent request, returning it.
    pub(crate) fn abandon(&mut self) -> Option<SearchRequest> {
        let request = self.issued.clone().filter(|_| self.is_in_flight())?;
        self.last_answered = request.id;
        Some(request)
    }

    pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
        self.rx.try_recv()
    }
}
