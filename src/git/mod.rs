pub mod executor;
pub mod history;
pub mod repository;

// Re-export commonly used types
pub use executor::{CommandOutput, CommandRunner};
pub use history::{CommitLog, parse_subject_lines};
pub use repository::Repository;
