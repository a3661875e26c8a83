//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of Git
//! operations git-autotag needs, so the release workflow can run against a
//! real repository or a scripted one in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. Implementations:
//!
//! - [repository::Git2Repository]: libgit2 via the `git2` crate (default)
//! - [system::SystemGit]: the `git` binary on `PATH`
//! - [mock::MockRepository]: scripted responses for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_autotag::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_autotag::Result<()> {
//! let described = repo.describe()?;
//! let subjects = repo.log_subjects_since("v1.2.3")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;
pub mod system;

pub use mock::MockRepository;
pub use repository::Git2Repository;
pub use system::SystemGit;

use crate::error::Result;

/// Only tags matching this glob are considered version tags
pub const VERSION_TAG_PATTERN: &str = "v*";

/// Version-control collaborator used by the release workflow
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map their
/// underlying failures (libgit2 errors, failed subprocesses) onto
/// [crate::error::AutotagError] variants.
pub trait Repository {
    /// Describe HEAD relative to the nearest reachable version tag
    ///
    /// Equivalent to `git describe --tags --match 'v*' --always --long HEAD`.
    ///
    /// # Returns
    /// * `Ok(String)` - `<tag>-<count>-g<hash>`, or the abbreviated commit id
    ///   alone when no version tag is reachable
    /// * `Err` - If HEAD cannot be resolved
    fn describe(&self) -> Result<String>;

    /// Subject lines of the commits reachable from HEAD but not from `tag`
    ///
    /// # Arguments
    /// * `tag` - Name of the tag to start from (exclusive)
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - One subject per commit, newest first
    /// * `Err` - If the tag does not exist or history cannot be walked
    fn log_subjects_since(&self, tag: &str) -> Result<Vec<String>>;

    /// Create a lightweight tag named `name` at HEAD
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists or HEAD cannot be resolved
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push the tag `name` to `remote`
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `name` - Name of an existing local tag
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the remote doesn't exist or the push is rejected
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
