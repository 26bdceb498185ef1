//! Read-only access to the git forge hosting the repository.
//!
//! Only the lookup of pull requests associated with a commit is needed, so
//! the [`traits::Forge`] abstraction stays small and is easy to fake in
//! tests.

/// Connection configuration for forge platforms.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Normalized request and response types shared by forge implementations.
pub mod request;

/// Common traits for forge platform abstraction.
pub mod traits;
