use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while asking an advisory provider
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("Provider '{0}' is not configured")]
    NotConfigured(String),

    #[error("Advisory features are disabled (set [advisory] enabled = true)")]
    Disabled,

    #[error("Nothing to send: no changes with diff content")]
    EmptyContent,

    #[error("Advisory request failed: {0}")]
    RequestFailed(String),
}

/// What the collaborator is being asked to do with the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestKind {
    GenerateCommitMessage,
    CodeReview,
}

/// Diff text packaged for an advisory provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryRequest {
    pub kind: RequestKind,
    pub content: String,
    pub parameters: BTreeMap<String, String>,
    pub estimated_tokens: usize,
}

/// Free text returned by a provider, passed through untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryResponse {
    pub content: String,
}

/// A remote model that turns repository content into free-text advice
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    fn name(&self) -> &str;

    fn is_configured(&self) -> bool;

    async fn send(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError>;
}

/// Send `request` if the provider is ready to take it
pub async fn dispatch(
    provider: &dyn AdvisoryProvider,
    request: &AdvisoryRequest,
) -> Result<AdvisoryResponse, AdvisoryError> {
    if !provider.is_configured() {
        return Err(AdvisoryError::NotConfigured(provider.name().to_string()));
    }
    if request.content.trim().is_empty() {
        return Err(AdvisoryError::EmptyContent);
    }

    provider.send(request).await
}
