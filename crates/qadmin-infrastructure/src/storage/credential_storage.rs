//! Credential persistence.
//!
//! The single credential pair is stored as `{"username": .., "password": ..}`
//! in `~/.config/qadmin/qa_admin_auth.json`.

use super::AtomicFile;
use crate::paths::QadminPaths;
use qadmin_core::auth::{CredentialStore, Credentials};
use qadmin_core::error::{QadminError, Result};
use std::path::PathBuf;
use std::sync::Mutex;

/// File-backed credential store.
///
/// Responsibilities:
/// - Write the pair atomically with owner-only permissions
/// - Read it back at startup
/// - Delete the file on logout
///
/// Does NOT:
/// - Encrypt the password (plaintext JSON)
/// - Validate the credentials against the remote service
pub struct FileCredentialStore {
    file: AtomicFile<Credentials>,
}

impl FileCredentialStore {
    /// Creates a store at the default path (`~/.config/qadmin/qa_admin_auth.json`).
    pub fn new() -> Result<Self> {
        let path = QadminPaths::credentials_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a store at a custom path (config override, tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::json(path).private(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, credentials: &Credentials) -> Result<()> {
        self.file.save(credentials)?;
        tracing::debug!("[CredentialStore] Saved credentials to {}", self.path().display());
        Ok(())
    }

    fn load(&self) -> Result<Option<Credentials>> {
        Ok(self.file.load()?)
    }

    fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!("[CredentialStore] Cleared {}", self.path().display());
        Ok(())
    }
}

/// Process-local credential store; nothing survives a restart.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<Credentials>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a pair already stored, as if saved by a previous login.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            slot: Mutex::new(Some(credentials)),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<Credentials>>> {
        self.slot
            .lock()
            .map_err(|_| QadminError::internal("credential slot lock poisoned"))
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, credentials: &Credentials) -> Result<()> {
        *self.slot()? = Some(credentials.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Credentials>> {
        Ok(self.slot()?.clone())
    }

    fn clear(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}
