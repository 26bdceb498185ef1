//! Custom error types for release-kind.

use thiserror::Error;

/// Main error type for release-kind operations.
#[derive(Error, Debug)]
pub enum ClassifierError {
    // Classification errors
    #[error(
        "Expected at most one pull request associated with commit {sha} but found {count}: cannot determine release kind"
    )]
    AmbiguousPullRequest { sha: String, count: usize },

    // Cli args / execution context errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Output reporting errors
    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    #[error("Failed to write output file: {0}")]
    OutputFileError(#[from] std::io::Error),

    // Forge errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),
}

/// Result type alias using ClassifierError
pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    /// Create an ambiguous pull request error
    pub fn ambiguous_pull_request(
        sha: impl Into<String>,
        count: usize,
    ) -> Self {
        Self::AmbiguousPullRequest {
            sha: sha.into(),
            count,
        }
    }

    /// Create an invalid args error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid output error
    pub fn invalid_output(msg: impl Into<String>) -> Self {
        Self::InvalidOutput(msg.into())
    }

    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ClassifierError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ClassifierError::ambiguous_pull_request("abc123", 2);
        assert_eq!(
            err.to_string(),
            "Expected at most one pull request associated with commit abc123 but found 2: cannot determine release kind"
        );

        let err = ClassifierError::forge("API call failed");
        assert_eq!(err.to_string(), "Forge operation failed: API call failed");

        let err = ClassifierError::invalid_args("missing sha");
        assert_eq!(err.to_string(), "Invalid arguments: missing sha");
    }

    #[test]
    fn test_error_helpers() {
        let err = ClassifierError::ambiguous_pull_request("abc123", 3);
        assert!(matches!(
            err,
            ClassifierError::AmbiguousPullRequest { count: 3, .. }
        ));

        let err = ClassifierError::invalid_output("newline in value");
        assert!(matches!(err, ClassifierError::InvalidOutput(_)));
    }

    #[test]
    fn test_from_conversions() {
        let io_err = std::io::Error::other("disk full");
        let err: ClassifierError = io_err.into();
        assert!(matches!(err, ClassifierError::OutputFileError(_)));
    }
}
