// file: src/repository/mod.rs
// description: Repository operations module exports
// reference: Internal module structure

pub mod git;
pub mod marker;
pub mod remote;
pub mod scanner;
pub mod sync;

pub use git::{GitClient, ProcessGit};
pub use remote::{RemoteRef, parse_remote_url};
pub use scanner::{EntryKind, RepoScanner, ScannedEntry};
pub use sync::{RepoReport, RepoSyncer, SyncOutcome};
