//! Hosting platform services
//!
//! Provides the API surface the orchestrator needs from the code host.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{HostConfig, MergeMethods, PullRequest};
use async_trait::async_trait;

/// Hosting service trait for repository and PR operations
///
/// This trait abstracts the code-hosting API so the backport logic can be
/// exercised against a mock in tests.
#[async_trait]
pub trait HostingService: Send + Sync {
    /// Merge strategies currently enabled on the repository
    async fn merge_methods(&self) -> Result<MergeMethods>;

    /// Open a pull request from `head` into `base`
    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest>;

    /// Add labels to a pull request
    async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<()>;

    /// Whether a pull request has been merged
    ///
    /// A "not found" response means "not merged", not an error.
    async fn is_merged(&self, pr_number: u64) -> Result<bool>;

    /// Post a comment on a pull request
    async fn create_comment(&self, pr_number: u64, body: &str) -> Result<()>;

    /// Get the platform configuration
    fn config(&self) -> &HostConfig;
}
