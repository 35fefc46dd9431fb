//! Backport engine
//!
//! Resolves targets from labels and runs the per-target backport procedure:
//! 1. Targets - parse `backport <base> [<head>]` labels
//! 2. Execution - cherry-pick, push, open PRs, report failures
//! 3. Cleanup - delete backport branches whose PRs merged

mod cleanup;
mod execute;
mod progress;
mod targets;

pub use cleanup::cleanup_backport_branch;
pub use execute::{remediation_comment, run_backport};
pub use progress::{NoopProgress, Phase, ProgressCallback, TargetStatus};
pub use targets::{render_title, resolve_targets, TriggerAction};
