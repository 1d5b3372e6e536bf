use crate::error::{GitError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of executing an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes external commands and captures their output as text
///
/// Every call spawns one child process and blocks until it exits and both
/// output streams are drained. There is no timeout and no retry: an
/// unresponsive child blocks the caller indefinitely.
#[derive(Debug)]
pub struct CommandRunner {
    working_dir: PathBuf,
}

impl CommandRunner {
    /// Create a new CommandRunner that spawns commands in the given directory
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Execute a command and return its output, failing on a non-zero exit
    ///
    /// The first element of `argv` is the program, the rest are its
    /// arguments. Example: runner.run(&["git", "rev-parse", "HEAD"])
    pub fn run(&self, argv: &[&str]) -> Result<CommandOutput> {
        let output = self.run_unchecked(argv)?;

        if !output.success {
            return Err(GitError::CommandFailed {
                command: argv.join(" "),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output)
    }

    /// Execute a command without treating a non-zero exit as an error
    ///
    /// Used where the exit code is not the signal: checkout reports success
    /// on stderr, and the upstream lookup is probed for `fatal:` text.
    pub fn run_unchecked(&self, argv: &[&str]) -> Result<CommandOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| GitError::CommandFailed {
            command: String::new(),
            exit_code: -1,
            stderr: "Empty command".to_string(),
        })?;

        tracing::debug!(command = %argv.join(" "), "spawning command");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| GitError::ToolUnavailable {
                program: (*program).to_string(),
                source: e,
            })?;

        Ok(Self::capture(&output))
    }

    /// Decode raw process output into a CommandOutput
    fn capture(output: &Output) -> CommandOutput {
        CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        }
    }

    /// Get the directory commands are spawned in
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}
