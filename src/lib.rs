//! Derives a release decision for a commit from the labels on its
//! associated pull request.
//!
//! The decision is published as two step outputs, `release` (`"true"` or
//! `"false"`) and `release-kind` (`"major"`, `"minor"`, `"patch"` or
//! `"no release"`), for a downstream pipeline to act on.

pub mod classifier;
pub mod cli;
pub mod command;
pub mod error;
pub mod forge;
pub mod reporter;

pub use classifier::{Classifier, ReleaseDecision, ReleaseKind};
pub use cli::Args;
pub use error::{ClassifierError, Result};

#[cfg(test)]
pub mod test_helpers;
