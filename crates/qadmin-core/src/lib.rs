//! Domain layer for qadmin.
//!
//! Records, credentials, session state, the API error taxonomy and the
//! seams (`QaApi`, `CredentialStore`) the outer crates implement.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod record;

// Re-export common error type
pub use error::{QadminError, Result};
