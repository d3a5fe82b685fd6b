use std::sync::mpsc::TryRecvError;

use super::App;
use crate::error::{LaunchError, SearchError};
use crate::systems::launch::LaunchResult;
use crate::systems::search::SearchResult;

impl<'a> App<'a> {
    /// Drain any search results waiting on the receiver channel.
    pub(crate) fn pump_search_results(&mut self) {
        loop {
            match self.search.try_recv() {
                Ok(result) => self.handle_search_result(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if let Some(request) = self.search.abandon() {
                        self.controller
                            .on_search_results(&request.query, Err(SearchError::WorkerGone));
                    }
                    break;
                }
            }
        }
    }

    /// Drain finished launches and act on their outcome.
    pub(crate) fn pump_launch_results(&mut self) {
        loop {
            match self.launch.try_recv() {
                Ok((result, session)) => self.handle_launch_result(result, session),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    for pending in self.launch.drain_pending() {
                        let result = LaunchResult {
                            path: pending.path,
                            outcome: Err(LaunchError::WorkerGone),
                        };
                        self.handle_launch_result(result, pending.session);
                    }
                    break;
                }
            }
        }
    }

    /// Apply a search result if it still belongs to the current query.
    fn handle_search_result(&mut self, result: SearchResult) {
        self.search.record_answer(result.id);
        if self
            .controller
            .on_search_results(&result.query, result.outcome)
        {
            self.scroll_offset = 0;
            self.sync_scroll();
        }
    }

    /// Act on a finished launch. Answers for an earlier session are only
    /// logged: they must not hide or report on the current one.
    fn handle_launch_result(&mut self, result: LaunchResult, session: u64) {
        if session != self.session() {
            match &result.outcome {
                Ok(()) => log::info!("opened {} after its session closed", result.path),
                Err(err) => log::warn!("failed to open {}: {err}", result.path),
            }
            self.controller.forget_launch(&result.path);
            return;
        }

        let succeeded = result.outcome.is_ok();
        let follow_up = self
            .controller
            .on_launch_finished(&result.path, result.outcome);
        if succeeded {
            log::info!("opened {}", result.path);
            self.record_launch(result.path);
        }
        if let Some(effect) = follow_up {
            self.apply(effect);
        }
    }
}
