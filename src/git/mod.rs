pub mod executor;
pub mod observer;
pub mod parser;
pub mod session;
pub mod shared;
pub mod version;

// Re-export commonly used types
pub use executor::{CommandOutput, CommandRunner, GitExecutor};
pub use observer::{SessionEvent, SessionObserver};
pub use parser::{
    BranchEntry, CommitEntry, FileEntry, FileStatus, RemoteEntry, parse_branch_list,
    parse_commit, parse_log, parse_remote_list, parse_status_porcelain, parse_tag_list,
};
pub use session::{DEFAULT_LOG_LIMIT, FileDiff, RepositoryState, Session};
pub use shared::SharedSession;
pub use version::GitVersion;
