use std::fmt;

/// Warnings about unusual but valid repository states.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No version tag is reachable from HEAD
    NoPriorTag { initial_version: String },
    /// No new commits since the latest tag
    NoNewCommits { latest_tag: String },
    /// Tag has a different number of components than configured
    ComponentCountMismatch {
        tag: String,
        found: usize,
        expected: usize,
    },
    /// Pushing is enabled but tagging is not, so there is nothing to push
    PushWithoutTag { tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorTag { initial_version } => {
                write!(
                    f,
                    "No current version detected, starting at {}",
                    initial_version
                )
            }
            BoundaryWarning::NoNewCommits { latest_tag } => {
                write!(f, "No new commits since tag '{}'", latest_tag)
            }
            BoundaryWarning::ComponentCountMismatch {
                tag,
                found,
                expected,
            } => {
                write!(
                    f,
                    "Tag '{}' has {} components but numComponents is {}",
                    tag, found, expected
                )
            }
            BoundaryWarning::PushWithoutTag { tag } => {
                write!(
                    f,
                    "doPush is enabled but doTag is not; '{}' will not be pushed",
                    tag
                )
            }
        }
    }
}
