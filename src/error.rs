//! Error types for backport

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while backporting
#[derive(Debug, Error)]
pub enum Error {
    /// A git command exited with a non-zero status
    #[error("git {command} failed: {stderr}")]
    GitCommand {
        /// The git subcommand and arguments that were run
        command: String,
        /// Captured stderr from the failed invocation
        stderr: String,
    },

    /// GitHub client construction or configuration failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// An octocrab request failed
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Hosting platform error (used by alternative service implementations)
    #[error("platform error: {0}")]
    Platform(String),

    /// The trigger event payload could not be read or decoded
    #[error("failed to parse event payload: {0}")]
    Event(String),

    /// The pull request is merged but the payload carries no merge commit
    #[error("pull request #{0} has no merge commit")]
    MissingMergeCommit(u64),

    /// An I/O operation failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
