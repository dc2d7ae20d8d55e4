//! Unified path management for qadmin files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/qadmin/            # Config directory (platform config dir)
//! ├── config.toml              # Client / storage / logging settings
//! └── qa_admin_auth.json       # Persisted credential pair
//! ```

use qadmin_core::auth::AUTH_STORAGE_KEY;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "qadmin";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for qadmin_core::QadminError {
    fn from(err: PathError) -> Self {
        qadmin_core::QadminError::config(err.to_string())
    }
}

pub struct QadminPaths;

impl QadminPaths {
    /// Returns the qadmin configuration directory (e.g. `~/.config/qadmin/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path of the credential file, named after the storage key.
    ///
    /// # Security Note
    ///
    /// The file holds the password in plaintext; it is created with 600
    /// permissions on Unix.
    pub fn credentials_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(format!("{}.json", AUTH_STORAGE_KEY)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_file_uses_storage_key() {
        // Config dir may be unavailable in minimal CI containers
        if let Ok(path) = QadminPaths::credentials_file() {
            assert_eq!(path.file_name().unwrap(), "qa_admin_auth.json");
            assert_eq!(path.parent().unwrap().file_name().unwrap(), "qadmin");
        }
    }
}
