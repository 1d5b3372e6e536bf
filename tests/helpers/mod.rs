use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Helper to create a test git repository
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    // Initialize git repo with a deterministic branch name
    Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(&repo_path)
        .output()
        .expect("Failed to init git repo");

    // Configure git
    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(&repo_path)
        .output()
        .expect("Failed to set git user.name");

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(&repo_path)
        .output()
        .expect("Failed to set git user.email");

    (temp_dir, repo_path)
}

/// Helper to create a commit
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) {
    let file_path = repo_path.join(file);
    fs::write(&file_path, content).expect("Failed to write file");

    Command::new("git")
        .args(["add", file])
        .current_dir(repo_path)
        .output()
        .expect("Failed to add file");

    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(repo_path)
        .output()
        .expect("Failed to commit");
}

/// Helper to wire `main` to an `origin/main` upstream without any network
///
/// Points a remote-tracking ref at HEAD and sets the branch config git
/// consults when resolving `@{upstream}`.
#[allow(dead_code)]
pub fn configure_upstream(repo_path: &Path) {
    Command::new("git")
        .args(["remote", "add", "origin", "."])
        .current_dir(repo_path)
        .output()
        .expect("Failed to add remote");

    Command::new("git")
        .args(["update-ref", "refs/remotes/origin/main", "HEAD"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to create tracking ref");

    Command::new("git")
        .args(["config", "branch.main.remote", "origin"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to set branch remote");

    Command::new("git")
        .args(["config", "branch.main.merge", "refs/heads/main"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to set branch merge ref");
}

/// Helper to get the full SHA of HEAD
#[allow(dead_code)]
pub fn head_sha(repo_path: &Path) -> String {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to resolve HEAD");

    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
