//! backport - label-driven backports of merged pull requests
//!
//! CLI binary meant to run inside a CI job triggered by pull request
//! `closed` and `labeled` events.

use anyhow::Result;
use backport::config::DEFAULT_TITLE_TEMPLATE;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "backport")]
#[command(about = "Backport merged pull requests to maintenance branches via labels")]
#[command(version)]
struct Cli {
    /// Token used for cloning the repository and calling the hosting API
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// Title template for backport PRs ({{base}} and {{originalTitle}})
    #[arg(long, env = "INPUT_TITLE_TEMPLATE", default_value = DEFAULT_TITLE_TEMPLATE)]
    title_template: String,

    /// Prefix for generated backport branch names
    #[arg(long, env = "INPUT_BRANCH_NAME")]
    branch_name: Option<String>,

    /// Delete the backport branch once its PR is merged ("true" to enable)
    #[arg(long, env = "INPUT_DELETE_BRANCH")]
    delete_branch: Option<String>,

    /// Comma-delimited labels to add to every backport PR
    #[arg(long, env = "INPUT_ADD_LABELS")]
    add_labels: Option<String>,

    /// Comma-delimited paths excluded from the backported diff
    #[arg(long, env = "INPUT_FILES_TO_SKIP")]
    files_to_skip: Option<String>,

    /// Path to the JSON event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// Directory the repository is cloned under
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    workdir: PathBuf,

    /// GitHub Enterprise host (defaults to github.com)
    #[arg(long)]
    host: Option<String>,

    /// Committer name for backport commits
    #[arg(long, default_value = "github-actions[bot]")]
    git_user_name: String,

    /// Committer email for backport commits
    #[arg(long, default_value = "github-actions[bot]@users.noreply.github.com")]
    git_user_email: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();

    cli::run_backport_command(cli::BackportArgs {
        github_token: args.github_token,
        title_template: args.title_template,
        branch_name: args.branch_name,
        delete_branch: args.delete_branch,
        add_labels: args.add_labels,
        files_to_skip: args.files_to_skip,
        event_path: args.event_path,
        workdir: args.workdir,
        host: args.host,
        git_user_name: args.git_user_name,
        git_user_email: args.git_user_email,
    })
    .await?;

    Ok(())
}
