use thiserror::Error;

/// Failure reported by a search collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The searcher rejected the query.
    #[error("{0}")]
    Rejected(String),

    /// The background worker went away before answering.
    #[error("search worker stopped unexpectedly")]
    WorkerGone,
}

impl SearchError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

/// Failure reported by a launch collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// Nothing to open.
    #[error("cannot launch an empty path")]
    EmptyPath,

    /// The configured command could not be started.
    #[error("failed to run `{program}`: {reason}")]
    Spawn { program: String, reason: String },

    /// The command ran but reported failure.
    #[error("`{program}` exited with {status}")]
    Exited { program: String, status: String },

    /// No command is configured for this kind of path.
    #[error("no command configured to open `{0}`")]
    Unsupported(String),

    /// The background worker went away before answering.
    #[error("launch worker stopped unexpectedly")]
    WorkerGone,
}

impl LaunchError {
    pub fn spawn(program: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            reason: err.to_string(),
        }
    }
}
