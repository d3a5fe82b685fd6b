use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::Launcher;
use crate::error::LaunchError;

/// Commands understood by the background launch worker.
#[derive(Debug)]
pub(crate) enum LaunchCommand {
    Open(String),
    Shutdown,
}

/// Answer for one [`LaunchCommand::Open`].
#[derive(Debug)]
pub(crate) struct LaunchResult {
    pub path: String,
    pub outcome: Result<(), LaunchError>,
}

/// Launches the background worker that runs every launch to completion.
pub(crate) fn spawn(launcher: Arc<dyn Launcher>) -> (Sender<LaunchCommand>, Receiver<LaunchResult>) {
    let (command_tx, command_rx) = mpsc::channel::<LaunchCommand>();
    let (result_tx, result_rx) = mpsc::channel();

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            let LaunchCommand::Open(path) = command else {
                break;
            };
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| launcher.launch(&path)))
                .unwrap_or_else(|_| {
                    Err(LaunchError::Spawn {
                        program: path.clone(),
                        reason: "launcher panicked".into(),
                    })
                });
            if result_tx.send(LaunchResult { path, outcome }).is_err() {
                break;
            }
        }
    });

    (command_tx, result_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn launch_outcomes_are_reported_in_order() {
        let launcher: Arc<dyn Launcher> = Arc::new(|path: &str| -> Result<(), LaunchError> {
            if path.ends_with(".missing") {
                Err(LaunchError::Unsupported(path.to_string()))
            } else {
                Ok(())
            }
        });
        let (tx, rx) = spawn(launcher);

        tx.send(LaunchCommand::Open("/apps/calc".into())).unwrap();
        tx.send(LaunchCommand::Open("/docs/gone.missing".into())).unwrap();

        let first = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(first.path, "/apps/calc");
        assert!(first.outcome.is_ok());

        let second = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(second.path, "/docs/gone.missing");
        assert_eq!(
            second.outcome,
            Err(LaunchError::Unsupported("/docs/gone.missing".into()))
        );

        tx.send(LaunchCommand::Shutdown).unwrap();
    }
}
