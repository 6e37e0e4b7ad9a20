use crate::error::{GitError, GitResult};
use crate::git::executor::{CommandOutput, CommandRunner, GitExecutor};
use crate::git::observer::{SessionEvent, SessionObserver};
use crate::git::parser::{
    self, BranchEntry, CommitEntry, FileEntry, FileStatus, RemoteEntry, LOG_FORMAT,
};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Number of commits returned by history queries unless the caller says otherwise
pub const DEFAULT_LOG_LIMIT: usize = 100;

/// Directory whose presence marks a repository root
const REPOSITORY_MARKER: &str = ".git";

/// A handle on (at most) one open repository
///
/// Every per-repository operation fails with [`GitError::NoRepositoryOpen`]
/// until [`open`](Self::open), [`clone_repository`](Self::clone_repository)
/// or [`init`](Self::init) succeeds, and no process is spawned in that case.
/// Each query re-runs git and returns a fresh list.
pub struct Session<R: CommandRunner = GitExecutor> {
    root: Option<PathBuf>,
    runner: R,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session<GitExecutor> {
    /// Create an unbound session that runs `git` from `PATH`
    pub fn new() -> Self {
        Self::with_runner(GitExecutor::new())
    }
}

impl Default for Session<GitExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner + fmt::Debug> fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("root", &self.root)
            .field("runner", &self.runner)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<R: CommandRunner> Session<R> {
    /// Create an unbound session over a custom command runner
    pub fn with_runner(runner: R) -> Self {
        Self {
            root: None,
            runner,
            observers: Vec::new(),
        }
    }

    /// Register an observer and return the session
    pub fn with_observer<O: SessionObserver + 'static>(mut self, observer: O) -> Self {
        self.add_observer(observer);
        self
    }

    pub fn add_observer<O: SessionObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Root of the open repository, if any
    pub fn current_repository(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.root.is_some()
    }

    /// Bind the session to an existing repository
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> GitResult<()> {
        let path = path.as_ref();
        if !path.join(REPOSITORY_MARKER).exists() {
            return self.fail(GitError::InvalidRepository(path.to_path_buf()));
        }

        self.root = Some(path.to_path_buf());
        self.emit(SessionEvent::RepositoryOpened(path.to_path_buf()));
        Ok(())
    }

    /// Clone `url` into `dest` and open the result
    pub fn clone_repository<P: AsRef<Path>>(&mut self, url: &str, dest: P) -> GitResult<()> {
        let dest = dest.as_ref();
        let dest_arg = dest.to_string_lossy().into_owned();
        self.run_in(None, &["clone", url, dest_arg.as_str()])?;
        self.open(dest)
    }

    /// Run `git init` inside `path` and open the result
    pub fn init<P: AsRef<Path>>(&mut self, path: P) -> GitResult<()> {
        let path = path.as_ref();
        self.run_in(Some(path), &["init"])?;
        self.open(path)
    }

    /// Unbind the current repository
    pub fn close(&mut self) {
        if self.root.take().is_some() {
            self.emit(SessionEvent::RepositoryClosed);
        }
    }

    /// Run git with `args` inside the open repository
    ///
    /// Returns the captured output on a zero exit status. A non-zero exit
    /// becomes [`GitError::CommandFailed`] carrying the same captured text.
    pub fn execute(&self, args: &[&str]) -> GitResult<String> {
        let Some(root) = self.root.as_deref() else {
            return self.fail(GitError::NoRepositoryOpen);
        };
        self.run_in(Some(root), args)
    }

    /// Run git inside the open repository, treating a non-zero exit as "no result"
    ///
    /// Only success is reported to observers.
    fn try_execute(&self, args: &[&str]) -> GitResult<Option<String>> {
        let Some(root) = self.root.as_deref() else {
            return self.fail(GitError::NoRepositoryOpen);
        };

        let command = self.describe(args);
        let output = self.spawn(Some(root), args)?;
        if !output.success {
            tracing::debug!(%command, exit_code = output.exit_code, "git query produced no result");
            return Ok(None);
        }

        self.emit(SessionEvent::CommandExecuted {
            command,
            output: output.output.clone(),
        });
        Ok(Some(output.output))
    }

    fn run_in(&self, cwd: Option<&Path>, args: &[&str]) -> GitResult<String> {
        let command = self.describe(args);
        let output = self.spawn(cwd, args)?;

        if !output.success {
            tracing::warn!(%command, exit_code = output.exit_code, "git command failed");
            return self.fail(GitError::CommandFailed {
                command,
                exit_code: output.exit_code,
                output: output.output,
            });
        }

        self.emit(SessionEvent::CommandExecuted {
            command,
            output: output.output.clone(),
        });
        Ok(output.output)
    }

    fn spawn(&self, cwd: Option<&Path>, args: &[&str]) -> GitResult<CommandOutput> {
        match self.runner.run(cwd, args) {
            Ok(output) => Ok(output),
            Err(e) => self.fail(e),
        }
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.runner.program(), args.join(" "))
    }

    fn emit(&self, event: SessionEvent) {
        for observer in &self.observers {
            observer.notify(&event);
        }
    }

    fn fail<T>(&self, error: GitError) -> GitResult<T> {
        self.emit(SessionEvent::Error(error.to_string()));
        Err(error)
    }

    // Working tree

    /// List changed, untracked and ignored files
    pub fn status(&self) -> GitResult<Vec<FileEntry>> {
        let output = self.execute(&["status", "--porcelain", "--ignore-submodules"])?;
        Ok(parser::parse_status_porcelain(&output))
    }

    pub fn stage(&self, path: &str) -> GitResult<()> {
        self.execute(&["add", path])?;
        Ok(())
    }

    pub fn unstage(&self, path: &str) -> GitResult<()> {
        self.execute(&["reset", "HEAD", path])?;
        Ok(())
    }

    pub fn commit(&self, message: &str) -> GitResult<()> {
        self.execute(&["commit", "-m", message])?;
        Ok(())
    }

    /// Throw away unstaged changes to `path`
    pub fn discard(&self, path: &str) -> GitResult<()> {
        self.execute(&["checkout", "--", path])?;
        Ok(())
    }

    /// Unstaged diff of one file
    pub fn diff(&self, path: &str) -> GitResult<String> {
        self.execute(&["diff", path])
    }

    /// Staged diff of one file
    pub fn staged_diff(&self, path: &str) -> GitResult<String> {
        self.execute(&["diff", "--staged", path])
    }

    /// Diff text for every modified or staged file, skipping empty diffs
    ///
    /// A file git refuses to diff is left out and the rest are still returned.
    pub fn working_tree_diffs(&self) -> GitResult<Vec<FileDiff>> {
        let mut diffs = Vec::new();

        for entry in self.status()? {
            if !matches!(entry.status, FileStatus::Modified | FileStatus::Staged) {
                continue;
            }

            let diff = match self.entry_diff(&entry) {
                Ok(diff) => diff,
                Err(GitError::CommandFailed { exit_code, .. }) => {
                    tracing::debug!(path = %entry.path, exit_code, "skipping file git could not diff");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if diff.trim().is_empty() {
                continue;
            }

            diffs.push(FileDiff {
                path: entry.path,
                status: entry.status,
                diff,
            });
        }

        Ok(diffs)
    }

    // Modified entries fall back to the staged diff when the worktree matches the index
    fn entry_diff(&self, entry: &FileEntry) -> GitResult<String> {
        if entry.status == FileStatus::Staged {
            return self.staged_diff(&entry.path);
        }

        let unstaged = self.diff(&entry.path)?;
        if unstaged.trim().is_empty() {
            self.staged_diff(&entry.path)
        } else {
            Ok(unstaged)
        }
    }

    // History

    /// Most recent commits first, at most `limit` of them
    pub fn log(&self, limit: usize) -> GitResult<Vec<CommitEntry>> {
        let count = format!("-n{}", limit);
        let output = self.execute(&log_args(&count))?;
        Ok(parser::parse_log(&output))
    }

    /// Summary of a single commit, `None` if git printed nothing parseable
    pub fn commit_info(&self, hash: &str) -> GitResult<Option<CommitEntry>> {
        let output = self.execute(&["show", hash, LOG_FORMAT, "--date=short", "-s"])?;
        Ok(parser::parse_commit(&output))
    }

    /// Full `git show` text of a commit
    pub fn commit_diff(&self, hash: &str) -> GitResult<String> {
        self.execute(&["show", hash])
    }

    // Branches

    /// Local and remote-tracking branches
    pub fn branches(&self) -> GitResult<Vec<BranchEntry>> {
        let output = self.execute(&["branch", "-a"])?;
        Ok(parser::parse_branch_list(&output))
    }

    /// Name of the checked-out branch, `None` when HEAD is detached
    pub fn current_branch(&self) -> GitResult<Option<String>> {
        Ok(self
            .branches()?
            .into_iter()
            .find(|b| b.is_current && !b.is_remote)
            .map(|b| b.name))
    }

    pub fn create_branch(&self, name: &str) -> GitResult<()> {
        self.execute(&["branch", name])?;
        Ok(())
    }

    pub fn checkout_branch(&self, name: &str) -> GitResult<()> {
        self.execute(&["checkout", name])?;
        Ok(())
    }

    pub fn merge_branch(&self, name: &str) -> GitResult<()> {
        self.execute(&["merge", name])?;
        Ok(())
    }

    pub fn delete_branch(&self, name: &str) -> GitResult<()> {
        self.execute(&["branch", "-d", name])?;
        Ok(())
    }

    // Remotes

    pub fn remotes(&self) -> GitResult<Vec<RemoteEntry>> {
        let output = self.execute(&["remote", "-v"])?;
        Ok(parser::parse_remote_list(&output))
    }

    pub fn add_remote(&self, name: &str, url: &str) -> GitResult<()> {
        self.execute(&["remote", "add", name, url])?;
        Ok(())
    }

    pub fn remove_remote(&self, name: &str) -> GitResult<()> {
        self.execute(&["remote", "remove", name])?;
        Ok(())
    }

    pub fn push(&self, remote: &str, branch: &str) -> GitResult<()> {
        self.execute(&["push", remote, branch])?;
        Ok(())
    }

    pub fn pull(&self, remote: &str, branch: &str) -> GitResult<()> {
        self.execute(&["pull", remote, branch])?;
        Ok(())
    }

    // Tags

    pub fn tags(&self) -> GitResult<Vec<String>> {
        let output = self.execute(&["tag"])?;
        Ok(parser::parse_tag_list(&output))
    }

    /// Tag `commit`, or HEAD when no commit is given
    pub fn create_tag(&self, name: &str, commit: Option<&str>) -> GitResult<()> {
        let mut args = vec!["tag", name];
        if let Some(hash) = commit.filter(|h| !h.is_empty()) {
            args.push(hash);
        }
        self.execute(&args)?;
        Ok(())
    }

    pub fn delete_tag(&self, name: &str) -> GitResult<()> {
        self.execute(&["tag", "-d", name])?;
        Ok(())
    }

    /// Query everything a repository view displays in one go
    pub fn state(&self, log_limit: usize) -> GitResult<RepositoryState> {
        let Some(root) = self.root.clone() else {
            return self.fail(GitError::NoRepositoryOpen);
        };

        let files = self.status()?;
        // No output when HEAD is unborn
        let count = format!("-n{}", log_limit);
        let commits = self
            .try_execute(&log_args(&count))?
            .map(|output| parser::parse_log(&output))
            .unwrap_or_default();
        let branches = self.branches()?;
        let remotes = self.remotes()?;
        let tags = self.tags()?;

        let current_branch = branches
            .iter()
            .find(|b| b.is_current && !b.is_remote)
            .map(|b| b.name.clone());

        Ok(RepositoryState {
            root,
            current_branch,
            files,
            commits,
            branches,
            remotes,
            tags,
        })
    }
}

fn log_args(count: &str) -> [&str; 4] {
    ["log", LOG_FORMAT, "--date=short", count]
}

/// Diff text for one changed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: String,
    pub status: FileStatus,
    pub diff: String,
}

/// Snapshot of an open repository
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryState {
    pub root: PathBuf,
    pub current_branch: Option<String>,
    pub files: Vec<FileEntry>,
    pub commits: Vec<CommitEntry>,
    pub branches: Vec<BranchEntry>,
    pub remotes: Vec<RemoteEntry>,
    pub tags: Vec<String>,
}

impl RepositoryState {
    /// Check if the working tree has no reported files
    pub fn is_clean(&self) -> bool {
        self.files
            .iter()
            .all(|f| f.status == FileStatus::Ignored)
    }

    /// No branch is checked out (detached HEAD or unborn branch list)
    pub fn is_detached(&self) -> bool {
        self.current_branch.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Runner that records every invocation and replays one canned response
    #[derive(Debug, Clone, Default)]
    struct FakeRunner {
        calls: Arc<Mutex<Vec<Vec<String>>>>,
        output: String,
        success: bool,
    }

    impl FakeRunner {
        fn replying(output: &str, success: bool) -> Self {
            Self {
                calls: Arc::default(),
                output: output.to_string(),
                success,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_call(&self) -> Vec<String> {
            self.calls.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, _cwd: Option<&Path>, args: &[&str]) -> GitResult<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push(args.iter().map(|a| a.to_string()).collect());
            Ok(CommandOutput {
                output: self.output.clone(),
                exit_code: if self.success { 0 } else { 1 },
                success: self.success,
            })
        }
    }

    fn fake_repo_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        temp_dir
    }

    fn recording_session(runner: FakeRunner) -> (Session<FakeRunner>, Arc<Mutex<Vec<SessionEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let session = Session::with_runner(runner)
            .with_observer(move |e: &SessionEvent| sink.lock().unwrap().push(e.clone()));
        (session, events)
    }

    #[test]
    fn test_unbound_session_spawns_nothing() {
        let runner = FakeRunner::replying("", true);
        let session = Session::with_runner(runner.clone());

        assert!(matches!(session.status(), Err(GitError::NoRepositoryOpen)));
        assert!(matches!(session.log(10), Err(GitError::NoRepositoryOpen)));
        assert!(matches!(session.stage("a.txt"), Err(GitError::NoRepositoryOpen)));
        assert!(matches!(session.branches(), Err(GitError::NoRepositoryOpen)));
        assert!(matches!(session.tags(), Err(GitError::NoRepositoryOpen)));
        assert!(matches!(session.push("origin", "main"), Err(GitError::NoRepositoryOpen)));
        assert!(matches!(session.state(10), Err(GitError::NoRepositoryOpen)));
        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn test_open_requires_marker() {
        let temp_dir = TempDir::new().unwrap();
        let (mut session, events) = recording_session(FakeRunner::replying("", true));

        let result = session.open(temp_dir.path());
        assert!(matches!(result, Err(GitError::InvalidRepository(_))));
        assert!(!session.is_open());
        assert!(matches!(events.lock().unwrap()[0], SessionEvent::Error(_)));
    }

    #[test]
    fn test_open_and_close_emit_events() {
        let repo = fake_repo_dir();
        let (mut session, events) = recording_session(FakeRunner::replying("", true));

        session.open(repo.path()).unwrap();
        assert_eq!(session.current_repository(), Some(repo.path()));

        session.close();
        assert!(!session.is_open());
        session.close();

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                SessionEvent::RepositoryOpened(repo.path().to_path_buf()),
                SessionEvent::RepositoryClosed,
            ]
        );
    }

    #[test]
    fn test_execute_emits_command_executed() {
        let repo = fake_repo_dir();
        let (mut session, events) = recording_session(FakeRunner::replying("?? a.txt\n", true));
        session.open(repo.path()).unwrap();

        let files = session.status().unwrap();
        assert_eq!(files.len(), 1);

        let events = events.lock().unwrap();
        assert_eq!(
            events[1],
            SessionEvent::CommandExecuted {
                command: "git status --porcelain --ignore-submodules".to_string(),
                output: "?? a.txt\n".to_string(),
            }
        );
    }

    #[test]
    fn test_failure_carries_output() {
        let repo = fake_repo_dir();
        let (mut session, events) =
            recording_session(FakeRunner::replying("fatal: bad revision", false));
        session.open(repo.path()).unwrap();

        let err = session.commit_diff("nope").unwrap_err();
        assert_eq!(err.output(), Some("fatal: bad revision"));
        assert!(matches!(err, GitError::CommandFailed { exit_code: 1, .. }));

        let events = events.lock().unwrap();
        match events.last() {
            Some(SessionEvent::Error(msg)) => assert!(msg.contains("fatal: bad revision")),
            other => panic!("expected error event, got {:?}", other),
        }
    }

    #[test]
    fn test_argument_vectors() {
        let repo = fake_repo_dir();
        let runner = FakeRunner::replying("", true);
        let mut session = Session::with_runner(runner.clone());
        session.open(repo.path()).unwrap();

        session.unstage("a b.txt").unwrap();
        assert_eq!(runner.last_call(), vec!["reset", "HEAD", "a b.txt"]);

        session.discard("x").unwrap();
        assert_eq!(runner.last_call(), vec!["checkout", "--", "x"]);

        session.log(25).unwrap();
        assert_eq!(runner.last_call(), vec!["log", LOG_FORMAT, "--date=short", "-n25"]);

        session.staged_diff("f").unwrap();
        assert_eq!(runner.last_call(), vec!["diff", "--staged", "f"]);

        session.create_tag("v1", None).unwrap();
        assert_eq!(runner.last_call(), vec!["tag", "v1"]);

        session.create_tag("v2", Some("abc123")).unwrap();
        assert_eq!(runner.last_call(), vec!["tag", "v2", "abc123"]);

        session.delete_branch("old").unwrap();
        assert_eq!(runner.last_call(), vec!["branch", "-d", "old"]);

        session.add_remote("origin", "https://x.git").unwrap();
        assert_eq!(runner.last_call(), vec!["remote", "add", "origin", "https://x.git"]);

        session.execute(&["status", ""]).unwrap();
        assert_eq!(runner.last_call(), vec!["status", ""]);
    }

    #[test]
    fn test_clone_failure_does_not_bind() {
        let temp_dir = TempDir::new().unwrap();
        let runner = FakeRunner::replying("fatal: repository not found", false);
        let mut session = Session::with_runner(runner.clone());

        let result = session.clone_repository("https://invalid/x.git", temp_dir.path().join("x"));
        assert!(matches!(result, Err(GitError::CommandFailed { .. })));
        assert!(!session.is_open());
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn test_init_with_real_git() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = Session::new();

        session.init(temp_dir.path()).unwrap();
        assert!(session.is_open());
        assert!(temp_dir.path().join(".git").exists());

        fs::write(temp_dir.path().join("new.txt"), "hi").unwrap();
        let files = session.status().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].status, FileStatus::Untracked);
    }

    #[test]
    fn test_working_tree_diffs_real_git() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();
        let mut session = Session::new();
        session.init(path).unwrap();

        for args in [
            ["config", "user.name", "Test User"],
            ["config", "user.email", "test@example.com"],
        ] {
            Command::new("git").args(args).current_dir(path).output().unwrap();
        }

        fs::write(path.join("tracked.txt"), "one\n").unwrap();
        session.stage("tracked.txt").unwrap();
        session.commit("Initial commit").unwrap();

        fs::write(path.join("tracked.txt"), "two\n").unwrap();
        fs::write(path.join("added.txt"), "new\n").unwrap();
        session.stage("added.txt").unwrap();
        fs::write(path.join("untracked.txt"), "skip\n").unwrap();

        let diffs = session.working_tree_diffs().unwrap();
        let paths: Vec<&str> = diffs.iter().map(|d| d.path.as_str()).collect();

        assert_eq!(diffs.len(), 2);
        assert!(paths.contains(&"tracked.txt"));
        assert!(paths.contains(&"added.txt"));
        assert!(diffs.iter().all(|d| d.diff.contains("diff --git")));
    }

    /// Runner that answers each command through a closure
    struct ScriptedRunner<F>(F);

    impl<F> CommandRunner for ScriptedRunner<F>
    where
        F: Fn(&[&str]) -> (String, bool) + Send,
    {
        fn run(&self, _cwd: Option<&Path>, args: &[&str]) -> GitResult<CommandOutput> {
            let (output, success) = (self.0)(args);
            Ok(CommandOutput {
                output,
                exit_code: if success { 0 } else { 128 },
                success,
            })
        }

        fn program(&self) -> &str {
            "/opt/git/bin/git"
        }
    }

    #[test]
    fn test_working_tree_diffs_skips_undiffable_file() {
        let repo = fake_repo_dir();
        let runner = ScriptedRunner(|args: &[&str]| match args {
            ["status", ..] => (" M broken.txt\n M good.txt\n".to_string(), true),
            ["diff", "broken.txt"] => ("fatal: bad path".to_string(), false),
            ["diff", "good.txt"] => ("diff --git a/good.txt b/good.txt\n+x\n".to_string(), true),
            _ => (String::new(), true),
        });
        let mut session = Session::with_runner(runner);
        session.open(repo.path()).unwrap();

        let diffs = session.working_tree_diffs().unwrap();

        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].path, "good.txt");
    }

    #[test]
    fn test_state_unborn_head_reports_no_error() {
        let repo = fake_repo_dir();
        let runner = ScriptedRunner(|args: &[&str]| match args {
            ["log", ..] => ("fatal: your current branch 'main' does not have any commits yet".to_string(), false),
            _ => (String::new(), true),
        });
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut session = Session::with_runner(runner)
            .with_observer(move |e: &SessionEvent| sink.lock().unwrap().push(e.clone()));
        session.open(repo.path()).unwrap();

        let state = session.state(10).unwrap();

        assert!(state.commits.is_empty());
        let events = events.lock().unwrap();
        assert!(!events.iter().any(|e| matches!(e, SessionEvent::Error(_))));
        assert!(!events.iter().any(
            |e| matches!(e, SessionEvent::CommandExecuted { command, .. } if command.contains(" log "))
        ));
    }

    #[test]
    fn test_command_named_after_runner_program() {
        let repo = fake_repo_dir();
        let (tx, rx) = std::sync::mpsc::channel();
        let tx = Mutex::new(tx);
        let mut session = Session::with_runner(ScriptedRunner(|_: &[&str]| (String::new(), true)))
            .with_observer(move |e: &SessionEvent| {
                if let SessionEvent::CommandExecuted { command, .. } = e {
                    tx.lock().unwrap().send(command.clone()).unwrap();
                }
            });
        session.open(repo.path()).unwrap();

        session.tags().unwrap();
        assert_eq!(rx.recv().unwrap(), "/opt/git/bin/git tag");
    }
}
