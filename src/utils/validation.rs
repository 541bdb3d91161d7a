// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SyncError};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SyncError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(SyncError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// A working copy is recognized by a `.git` subdirectory. A `.git`
    /// file (worktree or submodule pointer) does not count.
    pub fn has_git_metadata(path: &Path) -> bool {
        path.join(".git").is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());

        let missing = temp.path().join("missing");
        assert!(Validator::validate_directory(&missing).is_err());

        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(Validator::validate_directory(&file).is_err());
    }

    #[test]
    fn test_git_metadata_detection() {
        let temp = TempDir::new().unwrap();
        assert!(!Validator::has_git_metadata(temp.path()));

        fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(Validator::has_git_metadata(temp.path()));
    }

    #[test]
    fn test_git_file_is_not_metadata() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".git"), "gitdir: ../elsewhere").unwrap();

        assert!(!Validator::has_git_metadata(temp.path()));
    }
}
