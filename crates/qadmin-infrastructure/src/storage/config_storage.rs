//! `config.toml` storage.

use super::AtomicFile;
use crate::paths::QadminPaths;
use qadmin_core::config::RootConfig;
use qadmin_core::error::Result;
use std::path::{Path, PathBuf};

/// Reads and writes the qadmin configuration file.
///
/// A missing or empty file reads as `RootConfig::default()`; nothing is
/// written until `save` is called.
pub struct ConfigStorage {
    file: AtomicFile<RootConfig>,
}

impl ConfigStorage {
    /// Storage at the default path (`~/.config/qadmin/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(QadminPaths::config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::toml(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn load(&self) -> Result<RootConfig> {
        let config = self.file.load()?.unwrap_or_default();
        tracing::debug!("[Config] Loaded {}", self.path().display());
        Ok(config)
    }

    pub fn save(&self, config: &RootConfig) -> Result<()> {
        Ok(self.file.save(config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qadmin_core::config::DEFAULT_BASE_URL;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(temp_dir.path().join("config.toml"));

        let config = storage.load().unwrap();
        assert_eq!(config, RootConfig::default());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[client]
base_url = "http://localhost:5678/webhook/v1/qa"

[storage]
credentials_file = "/tmp/creds.json"
"#,
        )
        .unwrap();

        let config = ConfigStorage::with_path(path).load().unwrap();
        assert_eq!(config.client.base_url, "http://localhost:5678/webhook/v1/qa");
        assert_eq!(
            config.storage.credentials_file,
            Some(PathBuf::from("/tmp/creds.json"))
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(temp_dir.path().join("qadmin").join("config.toml"));
        let mut config = RootConfig::default();
        config.client.request_timeout_secs = Some(5);

        storage.save(&config).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.client.request_timeout_secs, Some(5));
        assert_eq!(loaded.client.base_url, DEFAULT_BASE_URL);
    }
}
