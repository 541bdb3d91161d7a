// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod repository;
pub mod utils;

pub use config::{Config, DEFAULT_PROVIDER, DEFAULT_ROOT_DIR, RemoteConfig, ScanConfig};
pub use error::{Result, SyncError};
pub use repository::{
    EntryKind, GitClient, ProcessGit, RemoteRef, RepoReport, RepoScanner, RepoSyncer, ScannedEntry,
    SyncOutcome, parse_remote_url,
};
pub use utils::{OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _scanner = RepoScanner::new();
        let _git = ProcessGit::new();
    }
}
