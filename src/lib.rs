pub mod error;
pub mod git;
pub mod push;

// Re-export commonly used types for convenience
pub use error::{GitError, Result};
pub use git::{CommandOutput, CommandRunner, CommitLog, Repository};
pub use push::{ProcessInspector, PsInspector, PushResolver};
