//! Trigger event payload
//!
//! Deserializes the webhook payload the hosting platform writes for
//! `pull_request` events (`closed`, `labeled`).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A label attached to a pull request
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    /// Label name, e.g. `backport 1.x`
    pub name: String,
}

/// Pull request fields consumed from the payload
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Whether the PR was merged (only meaningful on `closed`)
    #[serde(default)]
    pub merged: bool,
    /// Merge commit SHA; present once the PR is merged
    pub merge_commit_sha: Option<String>,
    /// Full current label set
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Repository owner
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    /// Owner login
    pub login: String,
}

/// Repository fields consumed from the payload
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryPayload {
    /// Repository name
    pub name: String,
    /// Repository owner
    pub owner: Owner,
}

/// The `pull_request` event payload
#[derive(Debug, Clone, Deserialize)]
pub struct BackportEvent {
    /// Action kind, e.g. `closed` or `labeled`
    pub action: String,
    /// The label that triggered the event (only on `labeled`)
    pub label: Option<Label>,
    /// The pull request the event refers to
    pub pull_request: PullRequestPayload,
    /// The repository the event fired in
    pub repository: RepositoryPayload,
}

impl BackportEvent {
    /// Read and decode an event payload from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Event(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&raw).map_err(|e| Error::Event(e.to_string()))
    }

    /// Label names currently attached to the pull request
    pub fn label_names(&self) -> Vec<String> {
        self.pull_request
            .labels
            .iter()
            .map(|l| l.name.clone())
            .collect()
    }
}
