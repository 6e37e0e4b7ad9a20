pub mod advisory;
pub mod audit;
pub mod config;
pub mod error;
pub mod git;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult, GitError, GitResult};
pub use git::{GitVersion, RepositoryState, Session, SessionEvent, SessionObserver, SharedSession};
