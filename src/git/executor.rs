use crate::error::{GitError, GitResult};
use std::path::Path;
use std::process::{Command, Output};

const DEFAULT_PROGRAM: &str = "git";

/// Result of running a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// stdout followed by stderr
    pub output: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Runs one external command and captures its output
///
/// Implementations must never go through a shell: arguments are passed to
/// the process as-is. An `Err` means the process could not be started at all;
/// a non-zero exit is reported through [`CommandOutput::success`].
pub trait CommandRunner: Send {
    fn run(&self, cwd: Option<&Path>, args: &[&str]) -> GitResult<CommandOutput>;

    /// Executable name used when describing a command
    fn program(&self) -> &str {
        DEFAULT_PROGRAM
    }
}

/// Executes the git binary as a child process
#[derive(Debug, Clone)]
pub struct GitExecutor {
    program: String,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create an executor that runs `git` from `PATH`
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Create an executor for a specific git executable
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Merge stdout and stderr into a single CommandOutput
    fn process_output(output: Output) -> CommandOutput {
        let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
        merged.push_str(&String::from_utf8_lossy(&output.stderr));

        CommandOutput {
            output: merged,
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        }
    }
}

impl CommandRunner for GitExecutor {
    fn run(&self, cwd: Option<&Path>, args: &[&str]) -> GitResult<CommandOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        tracing::debug!(program = %self.program, ?args, cwd = ?cwd, "spawning git");

        let output = cmd.output().map_err(|e| {
            GitError::LaunchFailed(format!("Failed to execute {}: {}", self.program, e))
        })?;

        Ok(Self::process_output(output))
    }

    fn program(&self) -> &str {
        &self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_version() {
        let executor = GitExecutor::new();

        let output = executor.run(None, &["--version"]).unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
        assert!(output.output.starts_with("git version"));
    }

    #[test]
    fn test_failure_keeps_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let executor = GitExecutor::new();

        // Not a repository, git exits non-zero and explains on stderr
        let output = executor
            .run(Some(temp_dir.path()), &["status", "--porcelain"])
            .unwrap();
        assert!(!output.success);
        assert_ne!(output.exit_code, 0);
        assert!(!output.output.is_empty());
    }

    #[test]
    fn test_arguments_not_shell_interpreted() {
        let temp_dir = TempDir::new().unwrap();
        let executor = GitExecutor::new();

        Command::new("git")
            .args(["init"])
            .current_dir(temp_dir.path())
            .output()
            .unwrap();

        let output = executor
            .run(Some(temp_dir.path()), &["status", "--porcelain", "--", "$(whoami)"])
            .unwrap();
        assert!(output.success);
        assert!(output.output.is_empty());
    }

    #[test]
    fn test_missing_program_is_launch_failure() {
        let executor = GitExecutor::with_program("definitely-not-a-real-git-binary");

        let result = executor.run(None, &["status"]);
        assert!(matches!(result, Err(GitError::LaunchFailed(_))));
    }

    #[test]
    fn test_program() {
        assert_eq!(GitExecutor::new().program(), "git");
        assert_eq!(GitExecutor::with_program("/usr/bin/git").program(), "/usr/bin/git");
    }
}
