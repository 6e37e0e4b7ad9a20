pub mod context;
pub mod provider;

pub use context::ContextBuilder;
pub use provider::{
    AdvisoryError, AdvisoryProvider, AdvisoryRequest, AdvisoryResponse, RequestKind, dispatch,
};
