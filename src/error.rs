use std::io;
use thiserror::Error;

/// Errors that can occur while querying git or the process table
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to launch '{program}': {source}")]
    ToolUnavailable {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Command '{command}' failed with exit code {exit_code}: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Could not switch to branch '{branch}'. Reason:\n{reason}")]
    CheckoutFailed { branch: String, reason: String },

    #[error("No upstream configured for the current branch")]
    RemoteNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;
