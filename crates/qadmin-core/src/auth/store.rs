//! Credential persistence trait.

use super::Credentials;
use crate::error::Result;

/// Fixed key the credential pair is persisted under.
pub const AUTH_STORAGE_KEY: &str = "qa_admin_auth";

/// Persistent slot for the single active credential pair.
///
/// Reads happen once at startup, synchronously, before any request is made.
///
/// # Security Note
///
/// Implementations store the password in plaintext. They must never log it
/// or include it in error messages.
pub trait CredentialStore: Send + Sync {
    /// Replaces whatever pair was stored.
    fn save(&self, credentials: &Credentials) -> Result<()>;

    /// Returns the stored pair, or `None` if nothing was saved.
    fn load(&self) -> Result<Option<Credentials>>;

    /// Removes the stored pair. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
