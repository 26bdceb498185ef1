//! Derives a release decision from the labels on the pull request associated
//! with a commit.
//!
//! A commit with no pull request, or whose pull request carries none of the
//! release labels, is never released. A commit associated with more than one
//! pull request cannot be classified and fails the invocation. When a pull
//! request carries several release labels the first one in label order wins
//! and a warning is reported.
use log::*;
use std::rc::Rc;

use crate::{
    error::{ClassifierError, Result},
    forge::{
        request::{CommitRef, PullRequest},
        traits::Forge,
    },
    reporter::Reporter,
};

/// Release kind and decision types.
pub mod kind;

pub use kind::{ReleaseDecision, ReleaseKind};

/// Name of the boolean "should release" output.
pub const RELEASE_OUTPUT: &str = "release";
/// Name of the release kind output.
pub const RELEASE_KIND_OUTPUT: &str = "release-kind";

/// Filters label names down to release kinds, preserving label order.
pub fn qualifying_labels<S: AsRef<str>>(labels: &[S]) -> Vec<ReleaseKind> {
    labels
        .iter()
        .filter_map(|label| ReleaseKind::from_label(label.as_ref()))
        .collect()
}

/// Picks the release kind for a set of labels. Returns the chosen kind along
/// with every qualifying kind found so callers can detect ambiguity.
pub fn decide<S: AsRef<str>>(labels: &[S]) -> (ReleaseKind, Vec<ReleaseKind>) {
    let qualifying = qualifying_labels(labels);
    let kind = qualifying.first().copied().unwrap_or_default();
    (kind, qualifying)
}

/// Classifies commits using an injected forge and reporter.
pub struct Classifier {
    forge: Box<dyn Forge>,
    reporter: Rc<dyn Reporter>,
}

impl Classifier {
    pub fn new(forge: Box<dyn Forge>, reporter: Rc<dyn Reporter>) -> Self {
        Self { forge, reporter }
    }

    /// Determine the release decision for a commit.
    pub async fn classify(
        &self,
        commit: &CommitRef,
    ) -> Result<ReleaseDecision> {
        info!("classifying commit {commit}");

        let mut prs = self.forge.list_commit_pull_requests(commit).await?;

        if prs.len() > 1 {
            let numbers = prs
                .iter()
                .map(|pr| format!("#{}", pr.number))
                .collect::<Vec<String>>();
            debug!("associated pull requests: {}", numbers.join(", "));

            let err =
                ClassifierError::ambiguous_pull_request(&commit.sha, prs.len());
            self.reporter.error(&err.to_string());
            return Err(err);
        }

        let Some(pr) = prs.pop() else {
            info!("no pull request associated with commit {}", commit.sha);
            return Ok(ReleaseDecision::no_release());
        };

        Ok(self.classify_pull_request(&pr))
    }

    fn classify_pull_request(&self, pr: &PullRequest) -> ReleaseDecision {
        debug!("pull request #{} labels: {:?}", pr.number, pr.labels);

        let (kind, qualifying) = decide(pr.labels.as_slice());

        if qualifying.len() > 1 {
            let names = qualifying
                .iter()
                .map(|k| format!("\"{k}\""))
                .collect::<Vec<String>>();
            self.reporter.warning(&format!(
                "pull request #{} has multiple release labels ({}): using \"{kind}\"",
                pr.number,
                names.join(", "),
            ));
        }

        if qualifying.is_empty() {
            info!(
                "pull request #{} has no release label: defaulting to \"{kind}\"",
                pr.number
            );
        }

        ReleaseDecision::new(kind)
    }

    /// Publish a decision as the `release` and `release-kind` outputs.
    pub fn report(&self, decision: &ReleaseDecision) -> Result<()> {
        self.reporter
            .set_output(RELEASE_OUTPUT, &decision.release().to_string())?;
        self.reporter
            .set_output(RELEASE_KIND_OUTPUT, decision.kind().as_str())?;
        Ok(())
    }

    /// Classify a commit and report the resulting decision.
    pub async fn run(&self, commit: &CommitRef) -> Result<ReleaseDecision> {
        let decision = self.classify(commit).await?;
        self.report(&decision)?;
        Ok(decision)
    }
}
