//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{CommitRef, PullRequest},
        traits::Forge,
    },
};

#[derive(Debug, Deserialize)]
struct LabelResponse {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct PullRequestResponse {
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub labels: Vec<LabelResponse>,
}

impl From<PullRequestResponse> for PullRequest {
    fn from(pr: PullRequestResponse) -> Self {
        Self {
            number: pr.number,
            title: pr.title,
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ListParams {
    pub per_page: u8,
}

/// GitHub forge implementation using Octocrab for read-only pull request
/// lookups.
pub struct Github {
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_url.trim_end_matches('/').to_string();

        let mut builder = Octocrab::builder().base_uri(base_uri.clone())?;

        if let Some(token) = config.token {
            builder = builder.personal_token(token);
        } else {
            warn!("no token configured: using unauthenticated github requests");
        }

        let instance = builder.build()?;

        Ok(Self { base_uri, instance })
    }

    fn commit_pulls_endpoint(&self, commit: &CommitRef) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}/pulls",
            self.base_uri, commit.owner, commit.repo, commit.sha
        )
    }
}

#[async_trait]
impl Forge for Github {
    async fn list_commit_pull_requests(
        &self,
        commit: &CommitRef,
    ) -> Result<Vec<PullRequest>> {
        let endpoint = self.commit_pulls_endpoint(commit);

        debug!("listing pull requests associated with commit: {endpoint}");

        let params = ListParams {
            per_page: DEFAULT_PAGE_SIZE,
        };

        let prs: Vec<PullRequestResponse> =
            self.instance.get(endpoint, Some(&params)).await?;

        info!(
            "found {} pull request(s) associated with commit {}",
            prs.len(),
            commit.sha
        );

        Ok(prs.into_iter().map(PullRequest::from).collect())
    }
}
