//! Backport execution
//!
//! Runs the per-target backport procedure: branch creation, cherry-pick,
//! commit, push, PR creation, labels, and failure reporting.

use crate::backport::cleanup::cleanup_backport_branch;
use crate::backport::progress::{Phase, ProgressCallback, TargetStatus};
use crate::backport::targets::render_title;
use crate::config::BackportConfig;
use crate::error::Result;
use crate::git::GitWorkspace;
use crate::platform::HostingService;
use crate::types::{BackportOutcome, BackportResult, PullRequest, SourcePullRequest};
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::{info, warn};

/// Run the backport for every resolved target
///
/// Targets are processed one at a time against the shared working copy.
/// A failing target is reported as a comment on the source PR and does not
/// stop the remaining targets. Failures outside a single target's scope
/// (merge-method lookup, comment posting) abort the whole run.
pub async fn run_backport(
    source: &SourcePullRequest,
    targets: &BTreeMap<String, String>,
    config: &BackportConfig,
    workspace: &GitWorkspace,
    platform: &dyn HostingService,
    progress: &dyn ProgressCallback,
) -> Result<Vec<BackportResult>> {
    progress.on_phase(Phase::CheckingMergeMethods).await;
    warn_on_unsafe_merge_methods(platform, progress).await?;

    progress.on_phase(Phase::Backporting).await;

    let mut results = Vec::with_capacity(targets.len());
    for (base, head) in targets {
        progress.on_target(base, head, TargetStatus::Started).await;

        match backport_target(base, head, source, config, workspace, platform).await {
            Ok(pr) => {
                progress.on_pr_created(base, &pr).await;

                if config.delete_branch {
                    match cleanup_backport_branch(workspace, platform, base, head, pr.number).await
                    {
                        Ok(true) => progress.on_branch_deleted(head).await,
                        Ok(false) => {}
                        // The PR exists, so a cleanup failure is not a target failure
                        Err(e) => progress.on_error(&e).await,
                    }
                }

                results.push(BackportResult {
                    base: base.clone(),
                    head: head.clone(),
                    outcome: BackportOutcome::Created(pr),
                });
            }
            Err(err) => {
                let message = err.to_string();
                progress
                    .on_target(base, head, TargetStatus::Failed(message.clone()))
                    .await;

                let comment = remediation_comment(base, head, &source.merge_commit, &message);
                platform.create_comment(source.number, &comment).await?;

                results.push(BackportResult {
                    base: base.clone(),
                    head: head.clone(),
                    outcome: BackportOutcome::Failed(message),
                });
            }
        }
    }

    progress.on_phase(Phase::Complete).await;

    Ok(results)
}

/// Warn when the repository allows merge strategies whose merge commits
/// do not carry a single well-defined diff to cherry-pick
async fn warn_on_unsafe_merge_methods(
    platform: &dyn HostingService,
    progress: &dyn ProgressCallback,
) -> Result<()> {
    let methods = platform.merge_methods().await?;
    let config = platform.config();

    if methods.merge_commit || methods.rebase_merge {
        let message = format!(
            "{}/{} allows merge commits or rebase merging; backports only work \
             reliably for squash or single-commit rebase merges",
            config.owner, config.repo
        );
        warn!("{message}");
        progress.on_message(&message).await;
    }

    Ok(())
}

/// Backport the source commit onto one target branch
async fn backport_target(
    base: &str,
    head: &str,
    source: &SourcePullRequest,
    config: &BackportConfig,
    workspace: &GitWorkspace,
    platform: &dyn HostingService,
) -> Result<PullRequest> {
    workspace.switch(base)?;
    workspace.switch_create(head)?;

    if let Err(err) = apply_commit(workspace, &source.merge_commit, &config.files_to_skip) {
        // Compensating rollback for the in-progress pick; the workspace may
        // already be clean, so the abort itself is best-effort.
        if let Err(abort_err) = workspace.abort_cherry_pick() {
            info!("cherry-pick abort skipped: {abort_err}");
        }
        return Err(err);
    }

    workspace.push(head)?;

    let title = render_title(&config.title_template, base, &source.title);
    let body = format!(
        "Backport of #{} to `{base}`.\n\nCherry-picked from {}.",
        source.number, source.merge_commit
    );
    let pr = platform.create_pull_request(head, base, &title, &body).await?;

    if !config.labels_to_add.is_empty() {
        platform.add_labels(pr.number, &config.labels_to_add).await?;
    }

    Ok(pr)
}

/// Cherry-pick the commit, drop skipped files, and commit with a sign-off
fn apply_commit(workspace: &GitWorkspace, sha: &str, files_to_skip: &[String]) -> Result<()> {
    workspace.cherry_pick_no_commit(sha)?;

    for path in files_to_skip {
        workspace.restore_from_head(path)?;
    }

    workspace.commit_staged()
}

/// Build the failure comment posted on the source PR
///
/// Contains the error message and a manual recovery sequence that is fully
/// reproducible from the target, the commit, and the error alone.
pub fn remediation_comment(base: &str, head: &str, commit: &str, error: &str) -> String {
    let mut body = format!("The backport to `{base}` failed:\n\n```\n{error}\n```\n\n");

    let _ = write!(
        body,
        "To backport manually, run these commands in your terminal:\n\
         ```bash\n\
         # Fetch latest updates from the remote\n\
         git fetch\n\
         # Create a new working tree\n\
         git worktree add .worktrees/backport {base}\n\
         # Navigate to the new working tree\n\
         cd .worktrees/backport\n\
         # Create a new branch\n\
         git switch --create {head}\n\
         # Cherry-pick the merged commit of this pull request and resolve the conflicts\n\
         git cherry-pick -x --mainline 1 {commit}\n\
         # Push it to the remote\n\
         git push --set-upstream origin {head}\n\
         # Go back to the original working tree\n\
         cd ../..\n\
         # Delete the working tree\n\
         git worktree remove .worktrees/backport\n\
         ```\n\n\
         Then, create a pull request where the `base` branch is `{base}` \
         and the `compare`/`head` branch is `{head}`."
    );

    body
}
