//! Backport command - run the full backport for a trigger event

use async_trait::async_trait;
use backport::backport::{
    resolve_targets, run_backport, Phase, ProgressCallback, TargetStatus, TriggerAction,
};
use backport::config::{parse_bool_input, parse_list, parse_unique_list, BackportConfig};
use backport::error::{Error, Result};
use backport::event::BackportEvent;
use backport::git::{GitIdentity, GitWorkspace};
use backport::platform::GitHubService;
use backport::types::{PullRequest, SourcePullRequest};
use std::path::PathBuf;
use tracing::info;

/// Inputs for one backport run, as collected by the CLI
pub struct BackportArgs {
    /// API and clone token
    pub github_token: String,
    /// Title template for backport PRs
    pub title_template: String,
    /// Optional head branch name prefix
    pub branch_name: Option<String>,
    /// Raw `delete-branch` input ("true" enables)
    pub delete_branch: Option<String>,
    /// Raw comma-delimited labels input
    pub add_labels: Option<String>,
    /// Raw comma-delimited files-to-skip input
    pub files_to_skip: Option<String>,
    /// Path to the event payload JSON
    pub event_path: PathBuf,
    /// Directory the repository is cloned under
    pub workdir: PathBuf,
    /// Optional GitHub Enterprise host
    pub host: Option<String>,
    /// Committer name
    pub git_user_name: String,
    /// Committer email
    pub git_user_email: String,
}

/// CLI progress callback that prints to stdout
struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::CheckingMergeMethods => println!("Checking repository merge methods..."),
            Phase::Backporting => println!("Backporting..."),
            Phase::Complete => println!("Done!"),
        }
    }

    async fn on_target(&self, base: &str, head: &str, status: TargetStatus) {
        match status {
            TargetStatus::Started => println!("  Backporting to {base} (branch {head})..."),
            TargetStatus::Failed(msg) => println!("  ✗ Backport to {base} failed: {msg}"),
        }
    }

    async fn on_pr_created(&self, base: &str, pr: &PullRequest) {
        println!("  ✓ Created PR #{} for {base}", pr.number);
        println!("    {}", pr.html_url);
    }

    async fn on_branch_deleted(&self, head: &str) {
        println!("  ✓ Deleted merged backport branch {head}");
    }

    async fn on_error(&self, error: &Error) {
        eprintln!("Error: {error}");
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}

/// Run the backport command
pub async fn run_backport_command(args: BackportArgs) -> Result<()> {
    let event = BackportEvent::from_path(&args.event_path)?;
    let pr_number = event.pull_request.number;

    if !event.pull_request.merged {
        info!(pr_number, "pull request is not merged");
        println!("Pull request #{pr_number} is not merged - nothing to backport");
        return Ok(());
    }

    let trigger = TriggerAction::from_event(&event);
    let targets = resolve_targets(
        &trigger,
        &event.label_names(),
        args.branch_name.as_deref(),
        pr_number,
    );

    if targets.is_empty() {
        info!(pr_number, "no backport labels found");
        println!("No backport labels on #{pr_number} - nothing to do");
        return Ok(());
    }

    let source = SourcePullRequest {
        number: pr_number,
        title: event.pull_request.title.clone(),
        merge_commit: event
            .pull_request
            .merge_commit_sha
            .clone()
            .ok_or(Error::MissingMergeCommit(pr_number))?,
    };

    let config = BackportConfig {
        title_template: args.title_template,
        branch_name_prefix: args.branch_name,
        delete_branch: parse_bool_input(args.delete_branch.as_deref()),
        labels_to_add: parse_unique_list(args.add_labels.as_deref()),
        files_to_skip: parse_list(args.files_to_skip.as_deref()),
    };

    let owner = event.repository.owner.login.clone();
    let repo = event.repository.name.clone();

    let platform = GitHubService::new(&args.github_token, owner.clone(), repo.clone(), args.host.clone())?;

    let identity = GitIdentity {
        name: args.git_user_name,
        email: args.git_user_email,
    };
    let dest = args.workdir.join(&repo);
    println!("Cloning {owner}/{repo}...");
    let workspace = GitWorkspace::clone_repo(
        &args.github_token,
        &owner,
        &repo,
        args.host.as_deref(),
        &dest,
        identity,
    )?;

    let progress = CliProgress;
    let results = run_backport(&source, &targets, &config, &workspace, &platform, &progress).await?;

    let created = results.iter().filter(|r| r.is_created()).count();
    println!();
    println!(
        "Backported to {created} of {} target{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    );
    for result in results.iter().filter(|r| !r.is_created()) {
        eprintln!("  {} failed - see the comment on #{pr_number}", result.base);
    }

    Ok(())
}
