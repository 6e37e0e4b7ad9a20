pub mod settings;

pub use settings::{AdvisoryConfig, AuditConfig, Config, ConfigError, GitConfig};
