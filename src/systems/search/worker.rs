use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::Searcher;
use super::commands::{SearchCommand, SearchResult};
use crate::error::SearchError;
use crate::types::SearchRequest;

/// Launches the background search worker thread and returns communication channels.
///
/// The returned counter must be bumped to the id of every issued request; the
/// worker skips queued requests that are older than it.
pub(crate) fn spawn(
    searcher: Arc<dyn Searcher>,
) -> (Sender<SearchCommand>, Receiver<SearchResult>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_query_id);

    thread::spawn(move || worker_loop(searcher.as_ref(), command_rx, result_tx, thread_latest));

    (command_tx, result_rx, latest_query_id)
}

fn worker_loop(
    searcher: &dyn Searcher,
    command_rx: Receiver<SearchCommand>,
    result_tx: Sender<SearchResult>,
    latest_query_id: Arc<AtomicU64>,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(searcher, &result_tx, &latest_query_id, command) {
            break;
        }
    }
}

fn handle_command(
    searcher: &dyn Searcher,
    result_tx: &Sender<SearchResult>,
    latest_query_id: &AtomicU64,
    command: SearchCommand,
) -> bool {
    match command {
        SearchCommand::Query(SearchRequest { id, query }) => {
            if id < latest_query_id.load(Ordering::Acquire) {
                log::trace!("skipping superseded search #{id}");
                return true;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| searcher.search(&query)))
                .unwrap_or_else(|_| Err(SearchError::rejected("searcher panicked")));
            result_tx.send(SearchResult { id, query, outcome }).is_ok()
        }
        SearchCommand::Shutdown => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Match;
    use std::sync::Mutex;
    use std::time::Duration;

    fn echo_searcher() -> Arc<dyn Searcher> {
        Arc::new(|query: &str| -> Result<Vec<Match>, SearchError> {
            Ok(vec![Match::file(query, format!("/tmp/{query}"), 1)])
        })
    }

    #[test]
    fn shutdown_command_stops_worker() {
        let (tx, rx, latest) = spawn(echo_searcher());
        assert_eq!(latest.load(Ordering::Relaxed), 0);
        tx.send(SearchCommand::Shutdown).unwrap();
        assert!(rx.recv_timeout(Duration::from_secs(1)).is_err());
    }

    #[test]
    fn search_results_are_forwarded() {
        let (tx, rx, latest) = spawn(echo_searcher());
        latest.store(1, Ordering::Release);
        tx.send(SearchCommand::Query(SearchRequest {
            id: 1,
            query: "readme".into(),
        }))
        .expect("send query");

        let result = rx
            .recv_timeout(Duration::from_secs(1))
            .expect("receive search result");

        assert_eq!(result.id, 1);
        assert_eq!(result.query, "readme");
        assert_eq!(result.outcome.unwrap()[0].path, "/tmp/readme");
        tx.send(SearchCommand::Shutdown).expect("send shutdown");
    }

    #[test]
    fn superseded_requests_are_skipped() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let searcher: Arc<dyn Searcher> = Arc::new(move |query: &str| -> Result<Vec<Match>, SearchError> {
            recorder.lock().unwrap().push(query.to_string());
            Ok(Vec::new())
        });
        let (tx, rx, latest) = spawn(searcher);

        latest.store(2, Ordering::Release);
        tx.send(SearchCommand::Query(SearchRequest { id: 1, query: "ab".into() }))
            .unwrap();
        tx.send(SearchCommand::Query(SearchRequest { id: 2, query: "abc".into() }))
            .unwrap();

        let result = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(result.id, 2);
        assert_eq!(*seen.lock().unwrap(), vec!["abc".to_string()]);
        tx.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn panicking_searcher_reports_failure() {
        let searcher: Arc<dyn Searcher> = Arc::new(|_: &str| -> Result<Vec<Match>, SearchError> {
            panic!("index corrupted")
        });
        let (tx, rx, _latest) = spawn(searcher);
        tx.send(SearchCommand::Query(SearchRequest { id: 1, query: "x".into() }))
            .unwrap();

        let result = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(result.outcome.is_err());
    }
}
