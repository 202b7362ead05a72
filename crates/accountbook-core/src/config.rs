//! Store configuration.

use std::path::PathBuf;

use crate::storage::FileStorage;

/// Application directory name under the platform data dir.
pub const APP_DIR: &str = "accountbook";

/// Slot the account list is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "accounts";

/// Where and under which key the account list is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the storage files.
    pub data_dir: PathBuf,
    /// Storage slot for the account list.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Config rooted at an explicit directory with the default key.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// File storage for this configuration.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

/// Platform data directory for the application, `./accountbook` if unknown.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "accounts");
        assert!(config.data_dir.ends_with(APP_DIR));
    }

    #[test]
    fn test_with_data_dir() {
        let config = StoreConfig::with_data_dir("/tmp/books");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/books"));
        assert_eq!(config.storage().dir(), PathBuf::from("/tmp/books").as_path());
    }
}
