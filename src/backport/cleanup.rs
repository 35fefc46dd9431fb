//! Backport branch cleanup
//!
//! Deletes a backport branch once its PR is confirmed merged. This runs
//! right after PR creation within the same run, so a PR merged later will
//! still report "not merged" here; it is not a background poller.

use crate::error::Result;
use crate::git::GitWorkspace;
use crate::platform::HostingService;
use tracing::{debug, info};

/// Delete the head branch of a backport PR if that PR is already merged
///
/// Returns whether the branch was deleted. A "not found" answer from the
/// host counts as "not merged".
pub async fn cleanup_backport_branch(
    workspace: &GitWorkspace,
    platform: &dyn HostingService,
    base: &str,
    head: &str,
    pr_number: u64,
) -> Result<bool> {
    if platform.is_merged(pr_number).await? {
        info!(base, head, pr_number, "backport PR merged, deleting branch");
        workspace.delete_remote_branch(head)?;
        Ok(true)
    } else {
        debug!(base, head, pr_number, "backport PR not merged, keeping branch");
        Ok(false)
    }
}
