//! Mock hosting service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use backport::error::{Error, Result};
use backport::platform::HostingService;
use backport::types::{HostConfig, MergeMethods, PullRequest};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
}

/// Call record for `add_labels`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLabelsCall {
    pub pr_number: u64,
    pub labels: Vec<String>,
}

/// Call record for `create_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentCall {
    pub pr_number: u64,
    pub body: String,
}

/// Simple mock hosting service for testing
///
/// Features:
/// - Auto-incrementing PR numbers (starting at 100)
/// - Call tracking for verification
/// - Configurable merge-method and is-merged responses
/// - Error injection for failure path testing
pub struct MockHostingService {
    config: HostConfig,
    next_pr_number: AtomicU64,
    merge_methods: Mutex<MergeMethods>,
    is_merged_responses: Mutex<HashMap<u64, bool>>,
    // Call tracking
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
    add_labels_calls: Mutex<Vec<AddLabelsCall>>,
    create_comment_calls: Mutex<Vec<CreateCommentCall>>,
    is_merged_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_create_pr: Mutex<Option<String>>,
    error_on_add_labels: Mutex<Option<String>>,
}

impl MockHostingService {
    /// Create a new mock with a default config
    pub fn new() -> Self {
        Self::with_config(HostConfig {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            host: None,
        })
    }

    /// Create a new mock with the given config
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            config,
            next_pr_number: AtomicU64::new(100),
            merge_methods: Mutex::new(MergeMethods::default()),
            is_merged_responses: Mutex::new(HashMap::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            add_labels_calls: Mutex::new(Vec::new()),
            create_comment_calls: Mutex::new(Vec::new()),
            is_merged_calls: Mutex::new(Vec::new()),
            error_on_create_pr: Mutex::new(None),
            error_on_add_labels: Mutex::new(None),
        }
    }

    // === Response configuration ===

    /// Set the merge methods reported for the repository
    pub fn set_merge_methods(&self, methods: MergeMethods) {
        *self.merge_methods.lock().unwrap() = methods;
    }

    /// Set the `is_merged` response for a PR (unset PRs report false)
    pub fn set_is_merged(&self, pr_number: u64, merged: bool) {
        self.is_merged_responses
            .lock()
            .unwrap()
            .insert(pr_number, merged);
    }

    // === Error injection methods ===

    /// Make `create_pull_request` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_labels` return an error
    pub fn fail_add_labels(&self, msg: &str) {
        *self.error_on_add_labels.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `create_pull_request` calls
    pub fn get_create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Get all `add_labels` calls
    pub fn get_add_labels_calls(&self) -> Vec<AddLabelsCall> {
        self.add_labels_calls.lock().unwrap().clone()
    }

    /// Get all `create_comment` calls
    pub fn get_create_comment_calls(&self) -> Vec<CreateCommentCall> {
        self.create_comment_calls.lock().unwrap().clone()
    }

    /// Get all PR numbers `is_merged` was called with
    pub fn get_is_merged_calls(&self) -> Vec<u64> {
        self.is_merged_calls.lock().unwrap().clone()
    }

    /// Assert that `create_pull_request` was called with specific head and base
    pub fn assert_create_pr_called(&self, head: &str, base: &str) {
        let calls = self.get_create_pr_calls();
        assert!(
            calls.iter().any(|c| c.head == head && c.base == base),
            "Expected create_pull_request({head}, {base}) but got: {calls:?}"
        );
    }
}

impl Default for MockHostingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostingService for MockHostingService {
    async fn merge_methods(&self) -> Result<MergeMethods> {
        Ok(*self.merge_methods.lock().unwrap())
    }

    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            head: head.to_string(),
            base: base.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/acme/widgets/pull/{number}"),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }

    async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<()> {
        self.add_labels_calls.lock().unwrap().push(AddLabelsCall {
            pr_number,
            labels: labels.to_vec(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_add_labels.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(())
    }

    async fn is_merged(&self, pr_number: u64) -> Result<bool> {
        self.is_merged_calls.lock().unwrap().push(pr_number);
        let responses = self.is_merged_responses.lock().unwrap();
        Ok(responses.get(&pr_number).copied().unwrap_or(false))
    }

    async fn create_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        self.create_comment_calls
            .lock()
            .unwrap()
            .push(CreateCommentCall {
                pr_number,
                body: body.to_string(),
            });
        Ok(())
    }

    fn config(&self) -> &HostConfig {
        &self.config
    }
}
