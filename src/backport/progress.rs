//! Progress callback trait for interface-agnostic updates
//!
//! Lets different interfaces (CLI, automation wrappers) receive progress
//! updates while targets are processed.

use crate::error::Error;
use crate::types::PullRequest;
use async_trait::async_trait;

/// Backport run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking the repository's allowed merge methods
    CheckingMergeMethods,
    /// Processing backport targets
    Backporting,
    /// Run complete
    Complete,
}

/// Per-target status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    /// Backport started for this target
    Started,
    /// The target failed with an error message
    Failed(String),
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a backport run.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when a target starts or fails
    async fn on_target(&self, base: &str, head: &str, status: TargetStatus);

    /// Called when a backport PR is created
    async fn on_pr_created(&self, base: &str, pr: &PullRequest);

    /// Called when a backport branch is deleted after its PR merged
    async fn on_branch_deleted(&self, head: &str);

    /// Called when a non-fatal error occurs
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_target(&self, _base: &str, _head: &str, _status: TargetStatus) {}
    async fn on_pr_created(&self, _base: &str, _pr: &PullRequest) {}
    async fn on_branch_deleted(&self, _head: &str) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
