//! Git workspace operations
//!
//! Thin wrapper over the `git` CLI. Every invocation runs with `-C <root>`
//! and carries the committer identity as per-invocation `-c` overrides, so
//! no global git configuration is touched.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Committer identity applied to every git invocation
#[derive(Debug, Clone)]
pub struct GitIdentity {
    /// `user.name` value
    pub name: String,
    /// `user.email` value
    pub email: String,
}

impl Default for GitIdentity {
    fn default() -> Self {
        Self {
            name: "github-actions[bot]".to_string(),
            email: "github-actions[bot]@users.noreply.github.com".to_string(),
        }
    }
}

/// A local clone of the repository being backported
#[derive(Debug)]
pub struct GitWorkspace {
    root: PathBuf,
    identity: GitIdentity,
}

impl GitWorkspace {
    /// Open an existing clone
    pub fn open(root: impl Into<PathBuf>, identity: GitIdentity) -> Result<Self> {
        let workspace = Self {
            root: root.into(),
            identity,
        };
        workspace.run(&["rev-parse", "--git-dir"])?;
        Ok(workspace)
    }

    /// Clone the repository over HTTPS using an access token
    pub fn clone_repo(
        token: &str,
        owner: &str,
        repo: &str,
        host: Option<&str>,
        dest: &Path,
        identity: GitIdentity,
    ) -> Result<Self> {
        let host = host.unwrap_or("github.com");
        let url = format!("https://x-access-token:{token}@{host}/{owner}/{repo}.git");

        debug!(owner, repo, host, dest = %dest.display(), "cloning repository");
        let output = Command::new("git")
            .arg("clone")
            .arg(&url)
            .arg(dest)
            .output()?;

        if !output.status.success() {
            return Err(Error::GitCommand {
                command: format!("clone {owner}/{repo}"),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(Self {
            root: dest.to_path_buf(),
            identity,
        })
    }

    /// Path of the working copy
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Switch to an existing branch
    pub fn switch(&self, branch: &str) -> Result<()> {
        self.run(&["switch", branch]).map(drop)
    }

    /// Create a new branch and switch to it
    pub fn switch_create(&self, branch: &str) -> Result<()> {
        self.run(&["switch", "--create", branch]).map(drop)
    }

    /// Cherry-pick a commit without committing, recording the origin commit
    ///
    /// Stages the picked changes and leaves the message in `MERGE_MSG` for
    /// [`Self::commit_staged`]. Conflicts surface as errors; the caller is
    /// responsible for running [`Self::abort_cherry_pick`].
    pub fn cherry_pick_no_commit(&self, sha: &str) -> Result<()> {
        self.run(&["cherry-pick", "-x", "-n", sha]).map(drop)
    }

    /// Abort an in-progress cherry-pick, if any
    pub fn abort_cherry_pick(&self) -> Result<()> {
        self.run(&["cherry-pick", "--abort"]).map(drop)
    }

    /// Restore a path to its state at `HEAD`, discarding staged changes to it
    pub fn restore_from_head(&self, path: &str) -> Result<()> {
        self.run(&["checkout", "HEAD", "--", path]).map(drop)
    }

    /// Commit the staged changes with the pending message and a sign-off
    pub fn commit_staged(&self) -> Result<()> {
        self.run(&["commit", "--no-edit", "--signoff"]).map(drop)
    }

    /// Push a branch to `origin`, setting the upstream
    pub fn push(&self, branch: &str) -> Result<()> {
        self.run(&["push", "--set-upstream", "origin", branch])
            .map(drop)
    }

    /// Force-delete a branch on `origin`
    pub fn delete_remote_branch(&self, branch: &str) -> Result<()> {
        self.run(&["push", "origin", "--delete", "--force", branch])
            .map(drop)
    }

    /// Run a git subcommand in the workspace, returning trimmed stdout
    fn run(&self, args: &[&str]) -> Result<String> {
        debug!(args = args.join(" "), "running git");
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .arg("-c")
            .arg(format!("user.name={}", self.identity.name))
            .arg("-c")
            .arg(format!("user.email={}", self.identity.email))
            .args(args)
            .output()?;

        if !output.status.success() {
            return Err(Error::GitCommand {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
