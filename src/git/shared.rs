use crate::error::{GitError, GitResult};
use crate::git::executor::{CommandRunner, GitExecutor};
use crate::git::session::Session;
use std::sync::{Arc, Mutex};

/// A [`Session`] that can be driven from async code
///
/// Each call runs on tokio's blocking pool while holding the session lock,
/// so only one git process runs against the working directory at a time
/// and the async caller is never blocked.
#[derive(Debug)]
pub struct SharedSession<R: CommandRunner = GitExecutor> {
    inner: Arc<Mutex<Session<R>>>,
}

impl<R: CommandRunner> Clone for SharedSession<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: CommandRunner + 'static> SharedSession<R> {
    pub fn new(session: Session<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` against the session on the blocking pool
    pub async fn run<T, F>(&self, f: F) -> GitResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Session<R>) -> GitResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);

        tokio::task::spawn_blocking(move || {
            // Poisoning only means an earlier closure panicked
            let mut session = inner.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut *session)
        })
        .await
        .map_err(|e| GitError::TaskFailed(e.to_string()))?
    }

    /// Run `f` synchronously on the current thread
    pub fn with_blocking<T>(&self, f: impl FnOnce(&mut Session<R>) -> T) -> T {
        let mut session = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *session)
    }
}
