// file: src/repository/sync.rs
// description: per-repository synchronization loop and dry-run survey
// reference: commit-or-touch upstream keeper behavior

use crate::config::Config;
use crate::error::Result;
use crate::repository::git::GitClient;
use crate::repository::marker;
use crate::repository::remote::parse_remote_url;
use crate::repository::scanner::{EntryKind, RepoScanner, ScannedEntry};
use chrono::Local;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

pub const UPSTREAM_REMOTE: &str = "origin";

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// What happened to a single working copy. Failures here are per-entry
/// diagnostics, never run-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    ChangesPushed,
    MarkerPushed,
    SkippedForeignOwner(String),
    SkippedUnparseableRemote(String),
    RemoteLookupFailed,
    StatusCheckFailed,
    CommitPushFailed,
    MarkerPushFailed,
}

/// One row of the read-only `scan` report.
#[derive(Debug, Clone, Serialize)]
pub struct RepoReport {
    pub path: String,
    pub kind: String,
    pub remote_url: Option<String>,
    pub owner: Option<String>,
    pub owned: bool,
}

pub struct RepoSyncer<G: GitClient> {
    config: Config,
    git: G,
}

impl<G: GitClient> RepoSyncer<G> {
    pub fn new(config: Config, git: G) -> Self {
        Self { config, git }
    }

    /// Process every immediate child of the root once, sequentially.
    /// Per-entry failures are reported and skipped; the run itself only
    /// fails if the root cannot be enumerated.
    pub fn run(&self) -> Result<()> {
        let entries = RepoScanner::new().scan(&self.config.scan.root_dir)?;

        for entry in &entries {
            match entry.kind {
                EntryKind::NotADirectory => {
                    info!("{} is not a directory, skipping", entry.path.display());
                }
                EntryKind::NotARepository => {
                    info!("{} is not a git repository, skipping", entry.path.display());
                }
                EntryKind::Repository => {
                    self.sync_repo(&entry.path);
                }
            }
        }

        Ok(())
    }

    /// Synchronize one working copy: push pending changes if any exist,
    /// otherwise refresh the timestamp marker and push that.
    pub fn sync_repo(&self, path: &Path) -> SyncOutcome {
        let url = match self.git.remote_url(path, UPSTREAM_REMOTE) {
            Ok(url) => url,
            Err(e) => {
                warn!("Failed to get the remote URL of {}: {}", path.display(), e);
                return SyncOutcome::RemoteLookupFailed;
            }
        };

        let Some(remote) = parse_remote_url(&url, &self.config.remote.provider) else {
            warn!(
                "Could not parse the remote URL '{}' in {}",
                url,
                path.display()
            );
            return SyncOutcome::SkippedUnparseableRemote(url);
        };

        if remote.owner != self.config.remote.account {
            info!(
                "The repository {} does not belong to the user {}, skipping",
                path.display(),
                self.config.remote.account
            );
            return SyncOutcome::SkippedForeignOwner(remote.owner);
        }

        let status = match self.git.status_porcelain(path) {
            Ok(status) => status,
            Err(e) => {
                warn!("Failed to check the status of {}: {}", path.display(), e);
                return SyncOutcome::StatusCheckFailed;
            }
        };

        if !status.is_empty() {
            match self.push_changes(path) {
                Ok(()) => {
                    info!("Repository updated with changes: {}", path.display());
                    SyncOutcome::ChangesPushed
                }
                Err(e) => {
                    warn!(
                        "Failed to commit and push changes in {}: {}",
                        path.display(),
                        e
                    );
                    SyncOutcome::CommitPushFailed
                }
            }
        } else {
            match self.push_marker(path) {
                Ok(()) => {
                    info!("README.md updated in the repository: {}", path.display());
                    SyncOutcome::MarkerPushed
                }
                Err(e) => {
                    warn!(
                        "Failed to commit and push README.md in {}: {}",
                        path.display(),
                        e
                    );
                    SyncOutcome::MarkerPushFailed
                }
            }
        }
    }

    /// Read-only ownership report over the root, for the `scan` subcommand.
    pub fn survey(&self) -> Result<Vec<RepoReport>> {
        let entries = RepoScanner::new().scan(&self.config.scan.root_dir)?;
        Ok(entries.iter().map(|e| self.report_entry(e)).collect())
    }

    fn report_entry(&self, entry: &ScannedEntry) -> RepoReport {
        let kind = match entry.kind {
            EntryKind::NotADirectory => "not a directory",
            EntryKind::NotARepository => "not a git repository",
            EntryKind::Repository => "repository",
        };

        let mut report = RepoReport {
            path: entry.path.display().to_string(),
            kind: kind.to_string(),
            remote_url: None,
            owner: None,
            owned: false,
        };

        if entry.kind != EntryKind::Repository {
            return report;
        }

        match self.git.remote_url(&entry.path, UPSTREAM_REMOTE) {
            Ok(url) => {
                if let Some(remote) = parse_remote_url(&url, &self.config.remote.provider) {
                    report.owned = remote.owner == self.config.remote.account;
                    report.owner = Some(remote.owner);
                }
                report.remote_url = Some(url);
            }
            Err(e) => {
                warn!(
                    "Failed to get the remote URL of {}: {}",
                    entry.path.display(),
                    e
                );
            }
        }

        report
    }

    fn push_changes(&self, path: &Path) -> Result<()> {
        self.git.stage_all(path)?;
        self.git.commit(path, &self.commit_message())?;
        self.git.push(path, UPSTREAM_REMOTE)
    }

    fn push_marker(&self, path: &Path) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        marker::write_timestamp(path, &timestamp)?;

        self.git.stage(path, marker::MARKER_FILE)?;
        self.git.commit(path, &self.commit_message())?;
        self.git.push(path, UPSTREAM_REMOTE)
    }

    fn commit_message(&self) -> String {
        format!("{} auto update", Local::now().format(DATE_FORMAT))
    }
}
