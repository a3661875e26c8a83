use crate::config::{PolicyConfig, ReleaseTrigger};
use crate::domain::{BumpIndex, LabelVote};

/// Aggregated release decision for a set of commits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitDecision {
    pub release: bool,
    pub bump: Option<BumpIndex>,
}

impl CommitDecision {
    /// Decision for a run without any commits
    pub fn nothing() -> Self {
        CommitDecision {
            release: false,
            bump: None,
        }
    }
}

/// Classifies commit subjects into a single release decision
pub struct CommitClassifier {
    release_trigger: ReleaseTrigger,
    default_bump: BumpIndex,
}

impl CommitClassifier {
    /// Create a new classifier
    pub fn new(release_trigger: ReleaseTrigger, default_bump: BumpIndex) -> Self {
        CommitClassifier {
            release_trigger,
            default_bump,
        }
    }

    pub fn from_config(config: &PolicyConfig) -> Self {
        Self::new(config.release_trigger, config.default_bump)
    }

    /// Classify raw `git log --format=%s` output
    pub fn classify_log(&self, log: &str) -> CommitDecision {
        let subjects: Vec<&str> = log.split('\n').collect();
        self.classify(&subjects)
    }

    /// Classify commit subject lines.
    ///
    /// Blank lines are ignored; if nothing is left there is nothing to release,
    /// whatever the trigger. Otherwise the most significant bump voted for wins,
    /// falling back to the default bump when no line votes.
    pub fn classify<S: AsRef<str>>(&self, subjects: &[S]) -> CommitDecision {
        let lines: Vec<&str> = subjects
            .iter()
            .map(|s| s.as_ref())
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return CommitDecision::nothing();
        }

        let votes: Vec<LabelVote> = lines.iter().filter_map(|line| LabelVote::parse(line)).collect();

        let release = self.release_trigger == ReleaseTrigger::Always
            || votes.iter().any(|vote| vote.release);
        let bump = votes
            .iter()
            .filter_map(|vote| vote.bump)
            .min()
            .unwrap_or(self.default_bump);

        CommitDecision {
            release,
            bump: Some(bump),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always() -> CommitClassifier {
        CommitClassifier::from_config(&PolicyConfig::default())
    }

    fn manual() -> CommitClassifier {
        CommitClassifier::new(ReleaseTrigger::Commit, 1)
    }

    fn decision(release: bool, bump: Option<BumpIndex>) -> CommitDecision {
        CommitDecision { release, bump }
    }

    #[test]
    fn test_classify_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(always().classify(&empty), decision(false, None));
        assert_eq!(manual().classify(&empty), decision(false, None));
        assert_eq!(always().classify(&["", ""]), decision(false, None));
        assert_eq!(always().classify_log(""), decision(false, None));
    }

    #[test]
    fn test_classify_single_alias() {
        assert_eq!(always().classify(&["major: thing"]), decision(true, Some(0)));
        assert_eq!(always().classify(&["minor: thing"]), decision(true, Some(1)));
        assert_eq!(always().classify(&["patch: thing"]), decision(true, Some(2)));
    }

    #[test]
    fn test_classify_unlabelled_uses_default() {
        assert_eq!(always().classify(&["other: thing"]), decision(true, Some(1)));
        assert_eq!(
            always().classify(&["no label at all"]),
            decision(true, Some(1))
        );
    }

    #[test]
    fn test_classify_most_significant_wins() {
        assert_eq!(
            always().classify(&["minor: woo", "major: woo"]),
            decision(true, Some(0))
        );
        assert_eq!(
            always().classify(&["minor: woo", "patch: woo"]),
            decision(true, Some(1))
        );
    }

    #[test]
    fn test_classify_commit_trigger() {
        assert_eq!(manual().classify(&["other: thing"]), decision(false, Some(1)));
        assert_eq!(manual().classify(&["release: thing"]), decision(true, Some(1)));
        assert_eq!(
            manual().classify(&["major release: thing"]),
            decision(true, Some(0))
        );
        assert_eq!(
            manual().classify(&["release: thing", "minor: woo"]),
            decision(true, Some(1))
        );
    }

    #[test]
    fn test_classify_commit_trigger_bump_without_release() {
        assert_eq!(manual().classify(&["major: thing"]), decision(false, Some(0)));
    }

    #[test]
    fn test_classify_release_request_from_any_line() {
        assert_eq!(
            manual().classify(&["patch: a", "misc", "patch release: b", "minor: c"]),
            decision(true, Some(1))
        );
    }

    #[test]
    fn test_classify_log_text() {
        let log = "minor: add option\n\nfix typo\npatch release: fix crash";
        assert_eq!(manual().classify_log(log), decision(true, Some(1)));
    }

    #[test]
    fn test_classify_owned_strings() {
        let subjects = vec!["major: rewrite".to_string()];
        assert_eq!(always().classify(&subjects), decision(true, Some(0)));
    }
}
