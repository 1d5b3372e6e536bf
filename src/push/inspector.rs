use crate::error::Result;
use crate::git::executor::CommandRunner;

/// Reads another process's invocation arguments from the OS
///
/// A hook runs as a child of the push command it is validating, so the only
/// way to see that command's arguments is to look the parent up in the
/// process table. The trait exists so tests can substitute canned command
/// lines instead of spawning real pushes.
pub trait ProcessInspector {
    /// Get the full command string of this process's parent, trimmed
    ///
    /// Includes the executable name and all flags/arguments as one
    /// space-delimited string; an argument containing a literal space is
    /// indistinguishable from two arguments after this point.
    fn parent_command_line(&self) -> Result<String>;
}

/// ProcessInspector backed by `ps`
#[derive(Debug)]
pub struct PsInspector {
    runner: CommandRunner,
}

impl PsInspector {
    pub fn new() -> Self {
        Self {
            runner: CommandRunner::new("."),
        }
    }
}

impl Default for PsInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessInspector for PsInspector {
    fn parent_command_line(&self) -> Result<String> {
        let pid = std::os::unix::process::parent_id().to_string();
        let output = self.runner.run(&["ps", "-ocommand=", "-p", &pid])?;

        Ok(output.stdout.trim().to_string())
    }
}
