use crate::domain::{BumpAlias, BumpIndex};

const RELEASE_LABEL: &str = "release";
const RELEASE_SUFFIX: &str = " release";

/// Vote cast by a single labelled commit subject (e.g. "minor release: add x")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelVote {
    pub bump: Option<BumpIndex>,
    pub release: bool,
}

impl LabelVote {
    /// Parse a commit subject line.
    ///
    /// Only lines containing `:` carry a label; the label is everything before
    /// the first `:`. Supported labels:
    /// - `<alias>`: votes for a bump, no release request
    /// - `<alias> release`: votes for a bump and requests a release
    /// - `release`: requests a release without a bump vote
    ///
    /// Lines without a label return `None`; unknown labels cast an empty vote.
    pub fn parse(subject: &str) -> Option<Self> {
        let (label, _) = subject.split_once(':')?;
        Some(Self::from_label(label))
    }

    fn from_label(label: &str) -> Self {
        let stripped = label.strip_suffix(RELEASE_SUFFIX);
        let alias_name = stripped.unwrap_or(label);

        match BumpAlias::from_name(alias_name) {
            Some(alias) => LabelVote {
                bump: Some(alias.index()),
                release: stripped.is_some(),
            },
            None => LabelVote {
                bump: None,
                release: label == RELEASE_LABEL,
            },
        }
    }
}
