use crate::advisory::provider::{AdvisoryError, AdvisoryRequest, RequestKind};
use crate::config::AdvisoryConfig;
use crate::error::AppResult;
use crate::git::{CommandRunner, FileDiff, Session};
use std::collections::BTreeMap;

const TRUNCATION_MARKER: &str = "\n... [truncated]";

/// Turns repository content into advisory requests within a size budget
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    max_chars: usize,
}

impl ContextBuilder {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Builder for the configured budget, refused while advisory use is turned off
    pub fn from_config(config: &AdvisoryConfig) -> Result<Self, AdvisoryError> {
        if !config.enabled {
            return Err(AdvisoryError::Disabled);
        }
        Ok(Self::new(config.max_diff_chars))
    }

    /// Ask for a commit message describing the current working tree
    pub fn commit_message_request<R: CommandRunner>(
        &self,
        session: &Session<R>,
    ) -> AppResult<AdvisoryRequest> {
        let diffs = session.working_tree_diffs()?;
        if diffs.is_empty() {
            return Err(AdvisoryError::EmptyContent.into());
        }

        let mut parameters = BTreeMap::new();
        parameters.insert("files".to_string(), diffs.len().to_string());

        Ok(self.build(RequestKind::GenerateCommitMessage, Self::format_diffs(&diffs), parameters))
    }

    /// Ask for a review of one commit
    pub fn code_review_request<R: CommandRunner>(
        &self,
        session: &Session<R>,
        hash: &str,
    ) -> AppResult<AdvisoryRequest> {
        let diff = session.commit_diff(hash)?;
        if diff.trim().is_empty() {
            return Err(AdvisoryError::EmptyContent.into());
        }

        let mut parameters = BTreeMap::new();
        parameters.insert("commit".to_string(), hash.to_string());

        Ok(self.build(RequestKind::CodeReview, diff, parameters))
    }

    /// One `File: <path>` section per diff
    pub fn format_diffs(diffs: &[FileDiff]) -> String {
        let mut content = String::new();
        for file in diffs {
            content.push_str(&format!("File: {}\n", file.path));
            content.push_str(&file.diff);
            content.push_str("\n\n");
        }
        content
    }

    /// Estimate tokens using 4 characters ≈ 1 token heuristic
    pub fn estimate_tokens(text: &str) -> usize {
        text.len().div_ceil(4)
    }

    fn build(
        &self,
        kind: RequestKind,
        content: String,
        parameters: BTreeMap<String, String>,
    ) -> AdvisoryRequest {
        let content = self.truncate(content);
        let estimated_tokens = Self::estimate_tokens(&content);

        AdvisoryRequest {
            kind,
            content,
            parameters,
            estimated_tokens,
        }
    }

    fn truncate(&self, mut content: String) -> String {
        if content.len() <= self.max_chars {
            return content;
        }

        tracing::debug!(
            len = content.len(),
            max = self.max_chars,
            "advisory content exceeds budget, truncating"
        );

        let mut end = self.max_chars;
        while !content.is_char_boundary(end) {
            end -= 1;
        }
        content.truncate(end);
        content.push_str(TRUNCATION_MARKER);
        content
    }
}
