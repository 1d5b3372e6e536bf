use crate::error::Result;
use crate::git::repository::Repository;
use crate::push::inspector::{ProcessInspector, PsInspector};

/// Reconstructs the in-flight push command's remote, branch, and force flag
///
/// git gives a hook no structured access to the push invocation that spawned
/// it, so everything here is recovered from the parent process's command
/// line, with repository configuration as the fallback when the command line
/// says nothing.
#[derive(Debug)]
pub struct PushResolver<I> {
    repository: Repository,
    inspector: I,
}

impl PushResolver<PsInspector> {
    /// Create a resolver that inspects the real parent process via `ps`
    pub fn new(repository: Repository) -> Self {
        Self::with_inspector(repository, PsInspector::new())
    }
}

impl<I: ProcessInspector> PushResolver<I> {
    /// Create a resolver with a custom process inspector
    pub fn with_inspector(repository: Repository, inspector: I) -> Self {
        Self {
            repository,
            inspector,
        }
    }

    /// Get the parent process's command line, trimmed, verbatim
    pub fn push_command_line(&self) -> Result<String> {
        let line = self.inspector.parent_command_line()?;
        Ok(line.trim().to_string())
    }

    /// Check whether the push was forced
    ///
    /// Naive substring search over the whole command line. It matches
    /// `--force-with-lease` and any token that merely contains `-f`; callers
    /// rely on that exact behavior, so it stays a substring search.
    pub fn push_forced(&self) -> Result<bool> {
        let line = self.push_command_line()?;
        Ok(line.contains("--force") || line.contains("-f"))
    }

    /// Get the remote the push targets
    ///
    /// Non-option positions are (0 command, 1 subcommand, 2 remote,
    /// 3 branch), computed after flag tokens are filtered out. When no
    /// remote appears on the command line, the branch's configured upstream
    /// decides; `RemoteNotFound` if there is none.
    pub fn push_remote(&self) -> Result<String> {
        let line = self.push_command_line()?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let args = non_option_arguments(&tokens);

        if args.len() > 2 {
            return Ok(args[2].to_string());
        }

        let upstream = self.repository.upstream_ref()?;
        Ok(remote_of_upstream(&upstream).to_string())
    }

    /// Get the branch the push targets
    ///
    /// An explicit branch token may be a `source:destination` refspec, in
    /// which case the destination half is the answer. With no branch token,
    /// the current branch is.
    pub fn push_branch(&self) -> Result<String> {
        let line = self.push_command_line()?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let args = non_option_arguments(&tokens);

        if args.len() > 3 {
            return Ok(refspec_destination(args[3]).to_string());
        }

        self.repository.current_branch()
    }
}

/// Filter out flag tokens, preserving the order of the rest
///
/// A token belonging to a value-bearing flag (the value, not the flag) does
/// not start with `-` and is kept as if it were positional. Known
/// limitation: downstream callers depend on the positional indices this
/// produces, so no flag-arity knowledge is applied.
pub fn non_option_arguments<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    tokens
        .iter()
        .copied()
        .filter(|token| !token.starts_with('-'))
        .collect()
}

/// Get the destination half of a `source:destination` refspec
///
/// A token without a colon is its own destination.
pub fn refspec_destination(spec: &str) -> &str {
    match spec.split_once(':') {
        Some((_, destination)) => destination,
        None => spec,
    }
}

/// Get the remote segment of a `<remote>/<branch>` upstream ref
pub fn remote_of_upstream(upstream: &str) -> &str {
    match upstream.split_once('/') {
        Some((remote, _)) => remote,
        None => upstream,
    }
}
