//! GitHub hosting service implementation

use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::types::{HostConfig, MergeMethods, PullRequest};
use async_trait::async_trait;
use octocrab::Octocrab;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: HostConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: HostConfig { owner, repo, host },
        })
    }
}

#[async_trait]
impl HostingService for GitHubService {
    async fn merge_methods(&self) -> Result<MergeMethods> {
        let repo = self
            .client
            .repos(&self.config.owner, &self.config.repo)
            .get()
            .await?;

        Ok(MergeMethods {
            merge_commit: repo.allow_merge_commit.unwrap_or_default(),
            rebase_merge: repo.allow_rebase_merge.unwrap_or_default(),
            squash_merge: repo.allow_squash_merge.unwrap_or_default(),
        })
    }

    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            base_ref: pr.base.ref_field.clone(),
            head_ref: pr.head.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }

    async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<()> {
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(pr_number, labels)
            .await?;
        Ok(())
    }

    async fn is_merged(&self, pr_number: u64) -> Result<bool> {
        match self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .is_merged(pr_number)
            .await
        {
            Ok(merged) => Ok(merged),
            // Unknown PRs report as not merged
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code.as_u16() == 404 =>
            {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(pr_number, body)
            .await?;
        Ok(())
    }

    fn config(&self) -> &HostConfig {
        &self.config
    }
}
