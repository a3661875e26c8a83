use crate::error::{AutotagError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Returns scripted `describe` output and commit subjects, and records the
/// tags it is asked to create and push.
pub struct MockRepository {
    describe_output: String,
    subjects: HashMap<String, Vec<String>>,
    created_tags: RefCell<Vec<String>>,
    pushed_tags: RefCell<Vec<(String, String)>>,
    fail_push: bool,
}

impl MockRepository {
    /// Create a mock whose history has no version tag
    pub fn new() -> Self {
        MockRepository {
            describe_output: "1a2b3c4".to_string(),
            subjects: HashMap::new(),
            created_tags: RefCell::new(Vec::new()),
            pushed_tags: RefCell::new(Vec::new()),
            fail_push: false,
        }
    }

    /// Set the raw `describe` output
    pub fn with_describe(mut self, output: impl Into<String>) -> Self {
        self.describe_output = output.into();
        self
    }

    /// Script the commit subjects logged since `tag`
    pub fn with_subjects(mut self, tag: impl Into<String>, subjects: &[&str]) -> Self {
        self.subjects.insert(
            tag.into(),
            subjects.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Make every push fail with a remote error
    pub fn with_failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Tags created so far, in order
    pub fn created_tags(&self) -> Vec<String> {
        self.created_tags.borrow().clone()
    }

    /// `(remote, tag)` pairs pushed so far, in order
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed_tags.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn describe(&self) -> Result<String> {
        Ok(self.describe_output.clone())
    }

    fn log_subjects_since(&self, tag: &str) -> Result<Vec<String>> {
        self.subjects
            .get(tag)
            .cloned()
            .ok_or_else(|| AutotagError::tag(format!("Cannot find tag '{}'", tag)))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let mut created = self.created_tags.borrow_mut();
        if created.iter().any(|t| t == name) {
            return Err(AutotagError::tag(format!("Tag '{}' already exists", name)));
        }
        created.push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(AutotagError::remote(format!(
                "Failed to push tag '{}' to '{}'",
                name, remote
            )));
        }
        self.pushed_tags
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
