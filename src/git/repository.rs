use crate::error::{GitError, Result};
use crate::git::executor::CommandRunner;
use crate::git::history::CommitLog;
use std::env;
use std::path::{Path, PathBuf};

/// Answers simple questions about a git repository by shelling out to git
///
/// Every query re-executes git; nothing is cached. Repository state can
/// change between calls within a hook's lifetime, so each answer reflects
/// the live state at the moment of the call.
#[derive(Debug)]
pub struct Repository {
    path: PathBuf,
    runner: CommandRunner,
}

impl Repository {
    /// Create a Repository rooted at the given directory
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let runner = CommandRunner::new(&path);

        Self { path, runner }
    }

    /// Create a Repository rooted at the current working directory
    pub fn from_current_dir() -> Result<Self> {
        let current_dir = env::current_dir().map_err(GitError::IoError)?;
        Ok(Self::new(current_dir))
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the git executable exists on this system
    ///
    /// Only a spawn failure counts as "not installed". The probe command
    /// exits non-zero outside a repository, but that still proves git is
    /// there, so the exit code is ignored.
    pub fn git_installed(&self) -> bool {
        self.runner.run_unchecked(&["git", "rev-parse"]).is_ok()
    }

    /// Check whether the working directory is inside a git work tree
    pub fn is_inside_repository(&self) -> Result<bool> {
        let output = self.runner.run(&["git", "rev-parse", "--is-inside-work-tree"])?;
        Ok(output.stdout.trim() == "true")
    }

    /// Get the abbreviated ref name of HEAD
    pub fn current_branch(&self) -> Result<String> {
        let output = self.runner.run(&["git", "rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.stdout.trim().to_string())
    }

    /// Get the configured user name
    pub fn current_user(&self) -> Result<String> {
        let output = self.runner.run(&["git", "config", "user.name"])?;
        Ok(output.stdout.trim().to_string())
    }

    /// Switch the work tree to the given branch
    ///
    /// Exit status is deliberately not consulted: success is detected by
    /// matching stderr against git's own phrasing (see `checkout_succeeded`).
    /// Any other stderr content fails with that text as the reason.
    pub fn checkout(&self, branch: &str) -> Result<()> {
        let output = self.runner.run_unchecked(&["git", "checkout", branch])?;

        if checkout_succeeded(branch, &output.stderr) {
            Ok(())
        } else {
            Err(GitError::CheckoutFailed {
                branch: branch.to_string(),
                reason: output.stderr,
            })
        }
    }

    /// List branches whose history contains the given commit
    ///
    /// `remote` selects remote-tracking branches instead of local ones.
    /// Lines are trimmed and empty lines dropped; git's order is preserved.
    pub fn branches_with_commit(&self, sha: &str, remote: bool) -> Result<Vec<String>> {
        let output = if remote {
            self.runner.run(&["git", "branch", "-r", "--contains", sha])?
        } else {
            self.runner.run(&["git", "branch", "--contains", sha])?
        };

        Ok(clean_lines(&output.stdout))
    }

    /// List the names of all configured remotes
    pub fn remotes(&self) -> Result<Vec<String>> {
        let output = self.runner.run(&["git", "remote"])?;
        Ok(clean_lines(&output.stdout))
    }

    /// Get the upstream tracking ref of HEAD in `<remote>/<branch>` form
    ///
    /// Failure is detected by the `fatal:` substring in the command's
    /// output rather than its exit status.
    pub fn upstream_ref(&self) -> Result<String> {
        let output = self.runner.run_unchecked(&[
            "git",
            "rev-parse",
            "--abbrev-ref",
            "--symbolic-full-name",
            "@{upstream}",
        ])?;

        if output.stdout.contains("fatal:") || output.stderr.contains("fatal:") {
            return Err(GitError::RemoteNotFound);
        }

        Ok(output.stdout.trim().to_string())
    }

    /// Get a commit log reader for this repository
    pub fn log(&self) -> CommitLog<'_> {
        CommitLog::new(&self.runner)
    }

    /// Get the command runner for this repository
    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }
}

/// Detect checkout success from stderr text
///
/// git prints the success message for checkout on stderr instead of stdout,
/// and only in one of two phrasings. Matching those literal strings is the
/// whole detection mechanism; a phrasing change in git breaks it, which is
/// why it lives in this one function.
fn checkout_succeeded(branch: &str, stderr: &str) -> bool {
    let switched = format!("Switched to branch '{branch}'");
    let already_on = format!("Already on '{branch}'");

    stderr.contains(&switched) || stderr.contains(&already_on)
}

/// Trim each line and drop empty ones, preserving order
fn clean_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
