use crate::error::{AutotagError, Result};
use crate::git::VERSION_TAG_PATTERN;
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn remote_callbacks<'a>(&self) -> git2::RemoteCallbacks<'a> {
        let git_config = self.repo.config().ok();

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(move |url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                // Try the agent first, then the usual key files
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }

                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }
            }

            if allowed_types.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                if let Some(config) = git_config.as_ref() {
                    if let Ok(cred) = git2::Cred::credential_helper(config, url, username_from_url)
                    {
                        return Ok(cred);
                    }
                }
            }

            git2::Cred::default()
        });

        // Surface per-reference rejections, which libgit2 does not report as errors
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        callbacks
    }
}

impl super::Repository for Git2Repository {
    fn describe(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;

        let mut options = DescribeOptions::new();
        options
            .describe_tags()
            .pattern(VERSION_TAG_PATTERN)
            .show_commit_oid_as_fallback(true);

        let mut format = DescribeFormatOptions::new();
        format.always_use_long_format(true);

        let described = head.as_object().describe(&options)?.format(Some(&format))?;
        Ok(described)
    }

    fn log_subjects_since(&self, tag: &str) -> Result<Vec<String>> {
        let tag_commit = self
            .repo
            .revparse_single(&format!("refs/tags/{}", tag))
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| AutotagError::tag(format!("Cannot find tag '{}': {}", tag, e)))?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.hide(tag_commit.id())?;

        let mut subjects = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let summary = commit.summary_bytes().unwrap_or_default();
            subjects.push(String::from_utf8_lossy(summary).into_owned());
        }

        Ok(subjects)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| AutotagError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| AutotagError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| AutotagError::remote(format!("Cannot find remote '{}': {}", remote, e)))?;

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(self.remote_callbacks());

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);

        remote_handle
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    AutotagError::remote(format!("Network error during push: {}", e))
                }
                _ => AutotagError::remote(format!(
                    "Failed to push tag '{}' to '{}': {}",
                    name, remote, e
                )),
            })?;

        Ok(())
    }
}
