pub mod paths;
pub mod storage;

pub use crate::paths::QadminPaths;
pub use crate::storage::{ConfigStorage, FileCredentialStore, MemoryCredentialStore};
