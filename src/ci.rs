//! CI step outputs.
//!
//! GitHub Actions runners expose a file through `GITHUB_OUTPUT` where steps
//! append `name=value` lines. Without it, the legacy `::set-output` workflow
//! command is printed instead.

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Name of the step output carrying the new tag
pub const VERSION_TAG_OUTPUT: &str = "versionTag";

/// Sink for key/value annotations consumed by later pipeline steps
pub trait StepOutput {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// GitHub Actions step output
#[derive(Debug, Clone, Default)]
pub struct GithubOutput {
    path: Option<PathBuf>,
}

impl GithubOutput {
    /// Write to the given output file, or print workflow commands when `None`
    pub fn new(path: Option<PathBuf>) -> Self {
        GithubOutput { path }
    }

    /// Use the output file the runner advertises in `GITHUB_OUTPUT`, if any
    pub fn from_env() -> Self {
        let path = std::env::var_os("GITHUB_OUTPUT")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::new(path)
    }
}

impl StepOutput for GithubOutput {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", name, value)?;
            }
            None => println!("::set-output name={}::{}", name, value),
        }
        Ok(())
    }
}

/// In-memory step output, for callers that want to inspect what was emitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryOutput {
    pub entries: Vec<(String, String)>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl StepOutput for MemoryOutput {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.entries.push((name.to_string(), value.to_string()));
        Ok(())
    }
}
