use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::systems::launch::{self, LaunchCommand, LaunchResult, Launcher};

/// A launch waiting for its answer, tagged with the overlay session that
/// requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingLaunch {
    pub(crate) path: String,
    pub(crate) session: u64,
}

/// UI-side handle on the launch worker.
pub(crate) struct LaunchRuntime {
    tx: Sender<LaunchCommand>,
    rx: Receiver<LaunchResult>,
    /// In request order; the worker answers in the same order.
    pending: VecDeque<PendingLaunch>,
}

impl LaunchRuntime {
    pub(crate) fn spawn(launcher: Arc<dyn Launcher>) -> Self {
        let (tx, rx) = launch::spawn(launcher);
        Self {
            tx,
            rx,
            pending: VecDeque::new(),
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(LaunchCommand::Shutdown);
    }

    /// Queue a launch for `session`. Returns `false` when the worker is gone.
    pub(crate) fn open(&mut self, path: String, session: u64) -> bool {
        if self.tx.send(LaunchCommand::Open(path.clone())).is_err() {
            return false;
        }
        self.pending.push_back(PendingLaunch { path, session });
        true
    }

    pub(crate) fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Most recent unanswered launch requested in `session`.
    pub(crate) fn latest_in(&self, session: u64) -> Option<&str> {
        self.pending
            .iter()
            .rev()
            .find(|pending| pending.session == session)
            .map(|pending| pending.path.as_str())
    }

    /// Next answer from the worker, with the session that asked for it.
    pub(crate) fn try_recv(&mut self) -> Result<(LaunchResult, u64), TryRecvError> {
        let result = self.rx.try_recv()?;
        let position = self
            .pending
            .iter()
            .position(|pending| pending.path == result.path);
        let session = position
            .and_then(|position| self.pending.remove(position))
            .map_or(0, |pending| pending.session);
        Ok((result, session))
    }

    /// Forget every launch still waiting for an answer.
    pub(crate) fn drain_pending(&mut self) -> Vec<PendingLaunch> {
        self.pending.drain(..).collect()
    }
}
