use crate::error::{AutotagError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Numeric version made of an ordered sequence of components (e.g. `v1.2.3`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Create a version from its components
    pub fn new(components: Vec<u64>) -> Self {
        Version { components }
    }

    /// Zero-filled version with `length` components
    pub fn zero(length: usize) -> Self {
        Version {
            components: vec![0; length],
        }
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Pad with trailing zeros up to `length` components.
    ///
    /// Fails with [`AutotagError::Length`] if the version is already longer.
    pub fn extend_to(&self, length: usize) -> Result<Self> {
        if self.components.len() > length {
            return Err(AutotagError::Length {
                version: self.to_string(),
                target: length,
            });
        }

        let mut components = self.components.clone();
        components.resize(length, 0);
        Ok(Version { components })
    }

    /// Parse a version from tag text (e.g. "v1.2.3" -> [1, 2, 3])
    ///
    /// The text must start with a literal `v`. Each dot-separated segment only
    /// contributes its leading digits, so "v1.2-rc1.3" parses as [1, 2, 3].
    pub fn parse(text: &str) -> Result<Self> {
        let rest = text
            .strip_prefix('v')
            .ok_or_else(|| AutotagError::format(text, "a version string starting with 'v'"))?;

        let components = rest
            .split('.')
            .map(parse_component)
            .collect::<Result<Vec<_>>>()?;

        Ok(Version { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "v{}", parts.join("."))
    }
}

fn leading_digits() -> &'static Regex {
    static LEADING_DIGITS: OnceLock<Regex> = OnceLock::new();
    LEADING_DIGITS.get_or_init(|| Regex::new(r"^[0-9]+").expect("static regex"))
}

/// Parse the leading run of ASCII digits of a version segment.
///
/// Trailing content is ignored ("1-rc2" -> 1). A segment that does not start
/// with a digit fails with [`AutotagError::Parse`].
pub fn parse_component(text: &str) -> Result<u64> {
    let digits = leading_digits()
        .find(text)
        .ok_or_else(|| AutotagError::parse(text))?;

    digits
        .as_str()
        .parse::<u64>()
        .map_err(|_| AutotagError::parse(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component() {
        assert_eq!(parse_component("08").unwrap(), 8);
        assert_eq!(parse_component("1-rc2").unwrap(), 1);
        assert_eq!(parse_component("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_component_invalid() {
        match parse_component("v1") {
            Err(AutotagError::Parse { input }) => assert_eq!(input, "v1"),
            other => panic!("expected parse error, got {:?}", other),
        }
        match parse_component("") {
            Err(AutotagError::Parse { input }) => assert_eq!(input, ""),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_component_overflow() {
        assert!(parse_component("99999999999999999999999").is_err());
    }

    #[test]
    fn test_version_parse() {
        assert_eq!(Version::parse("v1.2.3").unwrap(), Version::new(vec![1, 2, 3]));
        assert_eq!(Version::parse("v1").unwrap(), Version::new(vec![1]));
        assert_eq!(
            Version::parse("v1.2-rc1.3").unwrap(),
            Version::new(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_version_parse_requires_prefix() {
        match Version::parse("1") {
            Err(AutotagError::Format { input, .. }) => assert_eq!(input, "1"),
            other => panic!("expected format error, got {:?}", other),
        }
        assert!(Version::parse("V1.2.3").is_err());
    }

    #[test]
    fn test_version_parse_empty_segment() {
        assert!(Version::parse("v").is_err());
        assert!(Version::parse("v1..2").is_err());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(vec![1, 2, 3]).to_string(), "v1.2.3");
        assert_eq!(Version::new(vec![7]).to_string(), "v7");
        assert_eq!(Version::zero(4).to_string(), "v0.0.0.0");
    }

    #[test]
    fn test_render_parse_round_trip() {
        for text in ["v0.0.0", "v1.2.3", "v10.20", "v3"] {
            assert_eq!(Version::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_extend_to() {
        let v = Version::new(vec![1]);
        assert_eq!(v.extend_to(3).unwrap(), Version::new(vec![1, 0, 0]));
        assert_eq!(v.extend_to(1).unwrap(), v);
        assert_eq!(Version::zero(0).extend_to(2).unwrap(), Version::zero(2));
    }

    #[test]
    fn test_extend_to_too_long() {
        let v = Version::new(vec![1, 2, 3, 4]);
        match v.extend_to(3) {
            Err(AutotagError::Length { version, target }) => {
                assert_eq!(version, "v1.2.3.4");
                assert_eq!(target, 3);
            }
            other => panic!("expected length error, got {:?}", other),
        }
    }
}
