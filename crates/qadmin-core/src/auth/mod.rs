//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `credentials`: the username/password pair and its Basic header
//! - `session`: logged-in / logged-out state
//! - `store`: persistence seam for the single credential pair

mod credentials;
mod session;
mod store;

pub use credentials::Credentials;
pub use session::SessionState;
pub use store::{AUTH_STORAGE_KEY, CredentialStore};
