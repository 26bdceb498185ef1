use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifies a single commit in a remote repository.
pub struct CommitRef {
    pub owner: String,
    pub repo: String,
    pub sha: String,
}

impl Display for CommitRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.sha)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Pull request normalized from any forge. Labels keep the order the forge
/// returned them in.
pub struct PullRequest {
    pub number: u64,
    pub title: Option<String>,
    pub labels: Vec<String>,
}
