use crate::error::{AutotagError, Result};
use crate::git::VERSION_TAG_PATTERN;
use crate::ui;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend driving the `git` binary found on `PATH`.
///
/// Useful on CI runners where push credentials are configured for the git
/// CLI (credential helpers, `http.extraheader`) rather than for libgit2.
pub struct SystemGit {
    work_tree: PathBuf,
}

impl SystemGit {
    /// Open the repository containing `path`
    pub fn open(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()?;

        if !output.status.success() {
            return Err(AutotagError::Command {
                command: "git rev-parse --show-toplevel".to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(SystemGit {
            work_tree: PathBuf::from(stdout.trim()),
        })
    }

    /// Top-level directory of the repository
    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    /// Run `git <args>` in the work tree, echoing the command first.
    ///
    /// Returns trimmed stdout; a non-zero exit becomes [`AutotagError::Command`].
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        ui::display_command(&command);

        let output = Command::new("git")
            .current_dir(&self.work_tree)
            .args(args)
            .output()?;

        if !output.status.success() {
            return Err(AutotagError::Command {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl super::Repository for SystemGit {
    fn describe(&self) -> Result<String> {
        self.run(&[
            "describe",
            "--tags",
            "--match",
            VERSION_TAG_PATTERN,
            "--always",
            "--long",
            "HEAD",
        ])
    }

    fn log_subjects_since(&self, tag: &str) -> Result<Vec<String>> {
        let range = format!("refs/tags/{}..HEAD", tag);
        let log = self.run(&["log", "--format=format:%s", &range])?;

        Ok(log.lines().map(|line| line.to_string()).collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", name, "HEAD"]).map(|_| ())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);
        self.run(&["push", remote, &refspec]).map(|_| ())
    }
}
