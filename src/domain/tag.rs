use crate::domain::Version;
use crate::error::{AutotagError, Result};
use std::fmt;

/// Represents a git tag, kept verbatim as found in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Nearest reachable version tag together with its parsed version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedTag {
    pub tag: Tag,
    pub version: Version,
}

/// Parse the long-form output of `git describe --tags --always --long`.
///
/// Supported shapes:
/// - `<tag>-<count>-g<hash>`: the tag may itself contain dashes
/// - `<hash>`: no tag is reachable, returns `Ok(None)`
///
/// Any other shape is rejected with the raw output in the error.
pub fn parse_describe(output: &str) -> Result<Option<DescribedTag>> {
    let trimmed = output.trim();
    let fields: Vec<&str> = trimmed.split('-').collect();

    match fields.len() {
        1 => Ok(None),
        2 => Err(AutotagError::format(
            trimmed,
            "`git describe` output of the form <tag>-<count>-g<hash>",
        )),
        n => {
            let name = fields[..n - 2].join("-");
            let version = Version::parse(&name)?;
            Ok(Some(DescribedTag {
                tag: Tag::new(name),
                version,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new() {
        let tag = Tag::new("v1.2.3");
        assert_eq!(tag.name, "v1.2.3");
        assert_eq!(tag.to_string(), "v1.2.3");
    }

    #[test]
    fn test_parse_describe_simple() {
        let described = parse_describe("v1.2.3-1-gabcd").unwrap().unwrap();
        assert_eq!(described.tag, Tag::new("v1.2.3"));
        assert_eq!(described.version, Version::new(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_describe_tag_with_dashes() {
        let described = parse_describe("v1.2-rc1.3-1-gabcd").unwrap().unwrap();
        assert_eq!(described.tag, Tag::new("v1.2-rc1.3"));
        assert_eq!(described.version, Version::new(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_describe_trims_newline() {
        let described = parse_describe("v0.4.0-0-g1234567\n").unwrap().unwrap();
        assert_eq!(described.tag.as_str(), "v0.4.0");
    }

    #[test]
    fn test_parse_describe_bare_hash() {
        assert_eq!(parse_describe("gabcd").unwrap(), None);
        assert_eq!(parse_describe("1a2b3c4").unwrap(), None);
    }

    #[test]
    fn test_parse_describe_two_fields() {
        match parse_describe("v1.2-gabcd") {
            Err(AutotagError::Format { input, .. }) => assert_eq!(input, "v1.2-gabcd"),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_describe_non_version_tag() {
        assert!(matches!(
            parse_describe("release-3-gabcd"),
            Err(AutotagError::Format { .. })
        ));
    }
}
