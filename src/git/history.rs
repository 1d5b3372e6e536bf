use crate::error::Result;
use crate::git::executor::CommandRunner;

/// Reads formatted commit log entries from a repository
///
/// Borrowed from a `Repository` via `Repository::log()`; holds no state of
/// its own beyond the runner it executes through.
#[derive(Debug)]
pub struct CommitLog<'a> {
    runner: &'a CommandRunner,
}

impl<'a> CommitLog<'a> {
    pub(crate) fn new(runner: &'a CommandRunner) -> Self {
        Self { runner }
    }

    /// Get one formatted line per commit in the given range
    ///
    /// The format template is wrapped in literal double quotes before being
    /// handed to git, so each output line arrives quoted and has the quotes
    /// stripped again here. Templates containing unescaped quotes are the
    /// caller's responsibility.
    ///
    /// Quirk, kept on purpose: a range matching zero commits produces a
    /// single empty entry, because splitting empty output on newline yields
    /// one empty line. Callers filter empty entries themselves.
    pub fn subjects(&self, format: &str, range: &str) -> Result<Vec<String>> {
        let pretty = format!("--pretty=format:\"{format}\"");
        let output = self.runner.run(&["git", "log", pretty.as_str(), range])?;

        Ok(parse_subject_lines(&output.stdout))
    }

    /// Get the full message body of exactly one commit
    pub fn body(&self, long_sha: &str) -> Result<String> {
        let output = self
            .runner
            .run(&["git", "log", "--pretty=format:\"%B\"", "-n", "1", long_sha])?;

        Ok(strip_wrapping_quotes(&output.stdout).trim().to_string())
    }
}

/// Split formatted log output into lines and unwrap the quoting
pub fn parse_subject_lines(output: &str) -> Vec<String> {
    output
        .split('\n')
        .map(|line| strip_wrapping_quotes(line).to_string())
        .collect()
}

/// Strip exactly one leading and one trailing character
///
/// The stripped characters are the double quotes this component wrapped the
/// format template in. Nothing checks that they actually are quotes; input
/// shorter than two characters collapses to the empty string.
fn strip_wrapping_quotes(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
