//! Launch collaborator seam and the worker thread that runs it.

mod worker;

use crate::error::LaunchError;

pub(crate) use worker::{LaunchCommand, LaunchResult, spawn};

/// Opens a resolved path. Runs on the launch worker thread, so it may block.
pub trait Launcher: Send + Sync + 'static {
    fn launch(&self, path: &str) -> Result<(), LaunchError>;
}

impl<F> Launcher for F
where
    F: Fn(&str) -> Result<(), LaunchError> + Send + Sync + 'static,
{
    fn launch(&self, path: &str) -> Result<(), LaunchError> {
        self(path)
    }
}
