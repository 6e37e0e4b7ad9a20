use std::path::PathBuf;

/// Notifications emitted by a [`Session`](crate::git::Session)
///
/// These are informational only. The data an operation produces is always
/// carried by its return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RepositoryOpened(PathBuf),
    RepositoryClosed,
    CommandExecuted { command: String, output: String },
    Error(String),
}

/// Receives session notifications (UI panels, audit logs, ...)
pub trait SessionObserver: Send + Sync {
    fn notify(&self, event: &SessionEvent);
}

impl<F> SessionObserver for F
where
    F: Fn(&SessionEvent) + Send + Sync,
{
    fn notify(&self, event: &SessionEvent) {
        self(event)
    }
}
