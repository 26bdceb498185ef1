//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::request::{CommitRef, PullRequest},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    /// Lists every pull request the forge associates with the commit.
    async fn list_commit_pull_requests(
        &self,
        commit: &CommitRef,
    ) -> Result<Vec<PullRequest>>;
}
