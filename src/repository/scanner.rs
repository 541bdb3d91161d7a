// file: src/repository/scanner.rs
// description: root directory enumeration and working-copy detection
// reference: https://docs.rs/walkdir

use crate::error::Result;
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct RepoScanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    NotADirectory,
    NotARepository,
    Repository,
}

#[derive(Debug, Clone)]
pub struct ScannedEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl RepoScanner {
    pub fn new() -> Self {
        Self
    }

    /// Enumerate the immediate children of the root in directory-listing
    /// order. No sorting guarantee; order is whatever the filesystem yields.
    pub fn scan(&self, root: &Path) -> Result<Vec<ScannedEntry>> {
        info!("Scanning directory: {}", root.display());
        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let kind = self.classify(&entry);
            debug!("Found entry {} ({:?})", path.display(), kind);

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            entries.push(ScannedEntry {
                path: path.to_path_buf(),
                name,
                kind,
            });
        }

        info!(
            "Found {} working copies under {}",
            entries
                .iter()
                .filter(|e| e.kind == EntryKind::Repository)
                .count(),
            root.display()
        );
        Ok(entries)
    }

    fn classify(&self, entry: &walkdir::DirEntry) -> EntryKind {
        if !entry.file_type().is_dir() {
            return EntryKind::NotADirectory;
        }

        if !Validator::has_git_metadata(entry.path()) {
            return EntryKind::NotARepository;
        }

        EntryKind::Repository
    }
}

impl Default for RepoScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn kind_of<'a>(entries: &'a [ScannedEntry], name: &str) -> &'a ScannedEntry {
        entries
            .iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("missing entry {name}"))
    }

    #[test]
    fn test_scan_classifies_entries() {
        let temp = TempDir::new().unwrap();

        fs::write(temp.path().join("stray.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("plain")).unwrap();
        fs::create_dir_all(temp.path().join("checkout/.git")).unwrap();

        let entries = RepoScanner::new().scan(temp.path()).unwrap();
        assert_eq!(entries.len(), 3);

        assert_eq!(kind_of(&entries, "stray.txt").kind, EntryKind::NotADirectory);
        assert_eq!(kind_of(&entries, "plain").kind, EntryKind::NotARepository);
        assert_eq!(kind_of(&entries, "checkout").kind, EntryKind::Repository);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("outer/inner/.git")).unwrap();

        let entries = RepoScanner::new().scan(temp.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::NotARepository);
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = TempDir::new().unwrap();
        let entries = RepoScanner::new().scan(temp.path()).unwrap();
        assert!(entries.is_empty());
    }
}
