//! Storage layer for atomic file operations.

mod atomic_file;
mod config_storage;
mod credential_storage;

pub use atomic_file::{AtomicFile, AtomicFileError, FileFormat};
pub use config_storage::ConfigStorage;
pub use credential_storage::{FileCredentialStore, MemoryCredentialStore};
