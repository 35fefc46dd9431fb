//! Core types for backport

use serde::{Deserialize, Serialize};

/// The merged pull request a backport originates from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourcePullRequest {
    /// Pull request number
    pub number: u64,
    /// Pull request title (used for title templating)
    pub title: String,
    /// Merge commit SHA on the default branch
    pub merge_commit: String,
}

/// A pull request on the hosting platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// Merge strategies enabled on the repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeMethods {
    /// Merge commits are allowed
    pub merge_commit: bool,
    /// Rebase merging is allowed
    pub rebase_merge: bool,
    /// Squash merging is allowed
    pub squash_merge: bool,
}

/// Hosting platform configuration
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

/// Outcome of one backport target
#[derive(Debug, Clone)]
pub enum BackportOutcome {
    /// A backport PR was opened
    Created(PullRequest),
    /// The target failed; the message was posted on the source PR
    Failed(String),
}

/// Per-target result of a backport run
#[derive(Debug, Clone)]
pub struct BackportResult {
    /// Target maintenance branch
    pub base: String,
    /// Branch the backport commit was (or would have been) pushed to
    pub head: String,
    /// What happened for this target
    pub outcome: BackportOutcome,
}

impl BackportResult {
    /// Whether this target produced a PR
    pub const fn is_created(&self) -> bool {
        matches!(self.outcome, BackportOutcome::Created(_))
    }
}
