// file: src/config.rs
// description: application configuration assembled once at process entry
// reference: https://docs.rs/clap

use crate::error::{Result, SyncError};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ROOT_DIR: &str = "/githubdirs";
pub const DEFAULT_PROVIDER: &str = "github.com";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    pub root_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub account: String,
    pub provider: String,
}

impl Config {
    /// Build and validate the run configuration. Both failure modes are
    /// fatal and fire before any repository is touched.
    pub fn new(root_dir: PathBuf, account: Option<String>, provider: String) -> Result<Self> {
        let account = match account {
            Some(account) if !account.trim().is_empty() => account,
            _ => {
                return Err(SyncError::Config(
                    "no git account configured (set --user or the GIT_USER environment variable)"
                        .to_string(),
                ));
            }
        };

        let config = Self {
            scan: ScanConfig { root_dir },
            remote: RemoteConfig { account, provider },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_directory(&self.scan.root_dir)?;

        if self.remote.provider.trim().is_empty() {
            return Err(SyncError::Config(
                "provider hostname must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(
            temp.path().to_path_buf(),
            Some("alice".to_string()),
            DEFAULT_PROVIDER.to_string(),
        )
        .unwrap();

        assert_eq!(config.remote.account, "alice");
        assert_eq!(config.remote.provider, "github.com");
        assert_eq!(config.scan.root_dir, temp.path());
    }

    #[test]
    fn test_missing_account_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = Config::new(temp.path().to_path_buf(), None, DEFAULT_PROVIDER.to_string());

        assert!(matches!(result, Err(SyncError::Config(_))));
    }

    #[test]
    fn test_blank_account_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = Config::new(
            temp.path().to_path_buf(),
            Some("   ".to_string()),
            DEFAULT_PROVIDER.to_string(),
        );

        assert!(matches!(result, Err(SyncError::Config(_))));
    }

    #[test]
    fn test_missing_root_dir_is_fatal() {
        let result = Config::new(
            PathBuf::from("/nonexistent/mount/point"),
            Some("alice".to_string()),
            DEFAULT_PROVIDER.to_string(),
        );

        assert!(matches!(result, Err(SyncError::Validation(_))));
    }
}
