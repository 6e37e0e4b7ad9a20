#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};
use summercake::git::{CommandOutput, CommandRunner};
use summercake::{GitResult, Session};
use tempfile::TempDir;

/// Helper to run git in a directory, panicking on failure
pub fn git(repo_path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Helper to create a test git repository
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"]);
    git(&repo_path, &["config", "user.name", "Test User"]);
    git(&repo_path, &["config", "user.email", "test@example.com"]);
    git(&repo_path, &["config", "commit.gpgsign", "false"]);

    (temp_dir, repo_path)
}

/// Helper to create a commit
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
}

/// Helper to open a session on a test repository
pub fn open_session(repo_path: &Path) -> Session {
    let mut session = Session::new();
    session.open(repo_path).expect("Failed to open repository");
    session
}

/// Runner that counts invocations and always succeeds with empty output
#[derive(Debug, Clone, Default)]
pub struct CountingRunner {
    calls: Arc<Mutex<usize>>,
}

impl CountingRunner {
    pub fn count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CommandRunner for CountingRunner {
    fn run(&self, _cwd: Option<&Path>, _args: &[&str]) -> GitResult<CommandOutput> {
        *self.calls.lock().unwrap() += 1;
        Ok(CommandOutput {
            output: String::new(),
            exit_code: 0,
            success: true,
        })
    }
}
