use crate::git::observer::{SessionEvent, SessionObserver};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Appends one line per session event to a history file
#[derive(Debug)]
pub struct AuditLogger {
    log_path: PathBuf,
    repo_path: Mutex<Option<PathBuf>>,
}

impl AuditLogger {
    /// Create a new AuditLogger with the default log path
    pub fn new() -> std::io::Result<Self> {
        Self::with_path(Self::default_log_path()?)
    }

    /// Create an AuditLogger with a custom log path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self {
            log_path,
            repo_path: Mutex::new(None),
        })
    }

    /// Get the default log path: ~/.config/summercake/history.log
    fn default_log_path() -> std::io::Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "HOME environment variable not set",
            )
        })?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("summercake")
            .join("history.log"))
    }

    /// Log a command execution
    pub fn log_command(&self, command: &str, exit_code: i32) -> std::io::Result<()> {
        self.append(&format!("[exit:{}] {}", exit_code, command))
    }

    /// Log a failure reported by the session
    pub fn log_error(&self, message: &str) -> std::io::Result<()> {
        self.append(&format!("[ERROR] {}", message.trim().replace('\n', "\\n")))
    }

    /// Record one session event
    pub fn log_event(&self, event: &SessionEvent) -> std::io::Result<()> {
        match event {
            SessionEvent::RepositoryOpened(path) => {
                self.set_repo(Some(path.clone()));
                self.append("[OPEN]")
            }
            SessionEvent::RepositoryClosed => {
                let result = self.append("[CLOSE]");
                self.set_repo(None);
                result
            }
            SessionEvent::CommandExecuted { command, .. } => self.log_command(command, 0),
            SessionEvent::Error(message) => self.log_error(message),
        }
    }

    fn set_repo(&self, path: Option<PathBuf>) {
        *self.repo_path.lock().unwrap_or_else(|e| e.into_inner()) = path;
    }

    fn append(&self, body: &str) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());
        let repo = self
            .repo_path
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());

        let log_entry = format!("[{}] [{}] [{}] {}\n", timestamp, user, repo, body);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(log_entry.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(&self.log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            // Rotate: history.log -> history.log.1
            let backup_path = self.log_path.with_extension("log.1");
            fs::rename(&self.log_path, backup_path)?;
        }

        Ok(())
    }

    /// Get the log file path
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

impl SessionObserver for AuditLogger {
    fn notify(&self, event: &SessionEvent) {
        if let Err(e) = self.log_event(event) {
            tracing::warn!(path = %self.log_path.display(), "failed to write audit log: {}", e);
        }
    }
}
