use std::{fmt::Display, str::FromStr};

use crate::error::ClassifierError;

/// Semantic-version bump category signalled by a pull request label.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReleaseKind {
    Major,
    Minor,
    Patch,
    #[default]
    NoRelease,
}

impl ReleaseKind {
    /// Every kind, in the order they are checked against labels.
    pub const ALL: [ReleaseKind; 4] = [
        ReleaseKind::Major,
        ReleaseKind::Minor,
        ReleaseKind::Patch,
        ReleaseKind::NoRelease,
    ];

    /// The label name that selects this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseKind::Major => "major",
            ReleaseKind::Minor => "minor",
            ReleaseKind::Patch => "patch",
            ReleaseKind::NoRelease => "no release",
        }
    }

    /// Matches a label name exactly (case-sensitive) against the label set
    /// of interest.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == label)
    }
}

impl Display for ReleaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseKind {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            ClassifierError::invalid_args(format!("unknown release kind: {s}"))
        })
    }
}

/// Outcome of classifying a commit: whether to release and at which level.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ReleaseDecision {
    release: bool,
    kind: ReleaseKind,
}

impl ReleaseDecision {
    pub fn new(kind: ReleaseKind) -> Self {
        Self {
            release: kind != ReleaseKind::NoRelease,
            kind,
        }
    }

    pub fn no_release() -> Self {
        Self::new(ReleaseKind::NoRelease)
    }

    pub fn release(&self) -> bool {
        self.release
    }

    pub fn kind(&self) -> ReleaseKind {
        self.kind
    }
}

impl From<ReleaseKind> for ReleaseDecision {
    fn from(kind: ReleaseKind) -> Self {
        Self::new(kind)
    }
}
