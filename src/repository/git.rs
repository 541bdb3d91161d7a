// file: src/repository/git.rs
// description: subprocess git client behind a mockable trait
// reference: https://docs.rs/mockall

use crate::error::{Result, SyncError};
use std::path::Path;
use std::process::{Command, Output};

#[cfg(test)]
use mockall::automock;

/// Version-control operations against a working copy. Every call names the
/// target path explicitly; the process-wide current directory is never
/// changed.
#[cfg_attr(test, automock)]
pub trait GitClient {
    /// Configured URL of the given remote, trimmed.
    fn remote_url(&self, repo: &Path, remote: &str) -> Result<String>;

    /// `git status --porcelain` output, trimmed. Empty means a clean tree.
    fn status_porcelain(&self, repo: &Path) -> Result<String>;

    /// Stage everything under the working copy.
    fn stage_all(&self, repo: &Path) -> Result<()>;

    /// Stage a single pathspec.
    fn stage(&self, repo: &Path, pathspec: &str) -> Result<()>;

    /// Create a commit with the given message.
    fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Push the current branch to the named remote.
    fn push(&self, repo: &Path, remote: &str) -> Result<()>;
}

/// Real implementation shelling out to the `git` binary.
#[derive(Clone, Copy, Default)]
pub struct ProcessGit;

impl ProcessGit {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, repo: &Path, args: &[&str]) -> Result<Output> {
        let output = Command::new("git")
            .args(args)
            .current_dir(repo)
            .output()
            .map_err(|e| {
                let detail = if e.kind() == std::io::ErrorKind::NotFound {
                    "git not installed or not in PATH".to_string()
                } else {
                    e.to_string()
                };
                SyncError::Git {
                    command: args.join(" "),
                    path: repo.to_path_buf(),
                    detail,
                }
            })?;

        if output.status.success() {
            Ok(output)
        } else {
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = match (stdout.is_empty(), stderr.is_empty()) {
                (false, false) => format!("{}\n{}", stdout, stderr),
                (false, true) => stdout,
                _ => stderr,
            };
            Err(SyncError::Git {
                command: args.join(" "),
                path: repo.to_path_buf(),
                detail,
            })
        }
    }

    fn run_for_stdout(&self, repo: &Path, args: &[&str]) -> Result<String> {
        let output = self.run(repo, args)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitClient for ProcessGit {
    fn remote_url(&self, repo: &Path, remote: &str) -> Result<String> {
        self.run_for_stdout(repo, &["remote", "get-url", remote])
    }

    fn status_porcelain(&self, repo: &Path) -> Result<String> {
        self.run_for_stdout(repo, &["status", "--porcelain"])
    }

    fn stage_all(&self, repo: &Path) -> Result<()> {
        self.run(repo, &["add", "."]).map(|_| ())
    }

    fn stage(&self, repo: &Path, pathspec: &str) -> Result<()> {
        self.run(repo, &["add", pathspec]).map(|_| ())
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        self.run(repo, &["commit", "-m", message]).map(|_| ())
    }

    fn push(&self, repo: &Path, remote: &str) -> Result<()> {
        self.run(repo, &["push", remote]).map(|_| ())
    }
}
