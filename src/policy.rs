//! Next-version computation under a [`PolicyConfig`].

use crate::analyzer::CommitDecision;
use crate::config::PolicyConfig;
use crate::domain::Version;
use crate::error::{AutotagError, Result};

/// Version used when the repository has no version tag yet.
pub fn initial_version(config: &PolicyConfig) -> Version {
    Version::zero(config.num_components)
}

/// Computes the version following `current`.
///
/// Returns `Ok(None)` when the decision does not call for a release. The bumped
/// component is incremented and every less significant component is reset to
/// zero, e.g. bumping index 1 of `v1.2.3` gives `v1.3.0`.
///
/// # Errors
/// * [`AutotagError::Policy`] - the bump is more significant than `maximum_bump`
/// * [`AutotagError::Range`] - `current` has no component at the bump index
/// * [`AutotagError::Overflow`] - the bumped component is already `u64::MAX`
/// * [`AutotagError::Length`] - `current` has more components than configured
pub fn next_version(
    config: &PolicyConfig,
    current: &Version,
    decision: &CommitDecision,
) -> Result<Option<Version>> {
    if !decision.release {
        return Ok(None);
    }

    let index = decision.bump.unwrap_or(config.default_bump);
    if index < config.maximum_bump {
        return Err(AutotagError::Policy {
            index,
            maximum: config.maximum_bump,
        });
    }

    let components = current.components();
    if components.len() <= index {
        return Err(AutotagError::Range {
            index,
            components: components.len(),
        });
    }

    let incremented = components[index]
        .checked_add(1)
        .ok_or_else(|| AutotagError::Overflow {
            version: current.to_string(),
            index,
        })?;

    let mut bumped = components[..index].to_vec();
    bumped.push(incremented);

    Version::new(bumped).extend_to(config.num_components).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(bump: usize) -> CommitDecision {
        CommitDecision {
            release: true,
            bump: Some(bump),
        }
    }

    fn v(components: &[u64]) -> Version {
        Version::new(components.to_vec())
    }

    #[test]
    fn test_initial_version() {
        assert_eq!(initial_version(&PolicyConfig::default()), v(&[0, 0, 0]));

        let config = PolicyConfig {
            num_components: 2,
            ..PolicyConfig::default()
        };
        assert_eq!(initial_version(&config).to_string(), "v0.0");
    }

    #[test]
    fn test_next_version_bumps() {
        let config = PolicyConfig::default();
        let current = v(&[1, 2, 3]);

        assert_eq!(next_version(&config, &current, &release(0)).unwrap(), Some(v(&[2, 0, 0])));
        assert_eq!(next_version(&config, &current, &release(1)).unwrap(), Some(v(&[1, 3, 0])));
        assert_eq!(next_version(&config, &current, &release(2)).unwrap(), Some(v(&[1, 2, 4])));
    }

    #[test]
    fn test_next_version_no_release() {
        let config = PolicyConfig::default();
        let decision = CommitDecision {
            release: false,
            bump: Some(0),
        };
        assert_eq!(next_version(&config, &v(&[1, 2, 3]), &decision).unwrap(), None);
        assert_eq!(
            next_version(&config, &v(&[1, 2, 3]), &CommitDecision::nothing()).unwrap(),
            None
        );
    }

    #[test]
    fn test_next_version_out_of_range() {
        let config = PolicyConfig::default();
        match next_version(&config, &v(&[1, 2, 3]), &release(3)) {
            Err(AutotagError::Range { index, components }) => {
                assert_eq!(index, 3);
                assert_eq!(components, 3);
            }
            other => panic!("expected range error, got {:?}", other),
        }
    }

    #[test]
    fn test_next_version_short_tag() {
        // "v1" tag with patch bump: there is no patch component to bump
        let config = PolicyConfig::default();
        assert!(matches!(
            next_version(&config, &v(&[1]), &release(2)),
            Err(AutotagError::Range { .. })
        ));
        assert_eq!(
            next_version(&config, &v(&[1]), &release(0)).unwrap(),
            Some(v(&[2, 0, 0]))
        );
    }

    #[test]
    fn test_next_version_above_maximum() {
        let config = PolicyConfig {
            maximum_bump: 1,
            ..PolicyConfig::default()
        };
        match next_version(&config, &v(&[1, 2, 3]), &release(0)) {
            Err(AutotagError::Policy { index, maximum }) => {
                assert_eq!(index, 0);
                assert_eq!(maximum, 1);
            }
            other => panic!("expected policy error, got {:?}", other),
        }
        assert_eq!(
            next_version(&config, &v(&[1, 2, 3]), &release(1)).unwrap(),
            Some(v(&[1, 3, 0]))
        );
    }

    #[test]
    fn test_next_version_policy_checked_before_range() {
        let config = PolicyConfig {
            maximum_bump: 2,
            ..PolicyConfig::default()
        };
        assert!(matches!(
            next_version(&config, &v(&[1]), &release(1)),
            Err(AutotagError::Policy { .. })
        ));
    }

    #[test]
    fn test_next_version_longer_tag_than_configured() {
        let config = PolicyConfig::default();
        let current = v(&[1, 2, 3, 4]);

        assert_eq!(next_version(&config, &current, &release(1)).unwrap(), Some(v(&[1, 3, 0])));
        assert!(matches!(
            next_version(&config, &current, &release(3)),
            Err(AutotagError::Length { .. })
        ));
    }

    #[test]
    fn test_next_version_missing_bump_uses_default() {
        let config = PolicyConfig::default();
        let decision = CommitDecision {
            release: true,
            bump: None,
        };
        assert_eq!(
            next_version(&config, &v(&[0, 4, 1]), &decision).unwrap(),
            Some(v(&[0, 5, 0]))
        );
    }

    #[test]
    fn test_next_version_four_components() {
        let config = PolicyConfig {
            num_components: 4,
            ..PolicyConfig::default()
        };
        assert_eq!(
            next_version(&config, &v(&[1, 2, 3, 4]), &release(3)).unwrap(),
            Some(v(&[1, 2, 3, 5]))
        );
        assert_eq!(
            next_version(&config, &v(&[1, 2]), &release(1)).unwrap(),
            Some(v(&[1, 3, 0, 0]))
        );
    }

    #[test]
    fn test_next_version_component_overflow() {
        let config = PolicyConfig::default();
        let current = v(&[1, u64::MAX, 0]);

        match next_version(&config, &current, &release(1)) {
            Err(AutotagError::Overflow { version, index }) => {
                assert_eq!(version, "v1.18446744073709551615.0");
                assert_eq!(index, 1);
            }
            other => panic!("expected overflow error, got {:?}", other),
        }

        // Only the bumped component matters
        assert_eq!(
            next_version(&config, &current, &release(0)).unwrap(),
            Some(v(&[2, 0, 0]))
        );
    }
}
