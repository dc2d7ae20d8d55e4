//! Remote Q&A service contract.
//!
//! # Module Structure
//!
//! - `error`: `ApiError`, its two-tier classification and the logout policy
//! - `client`: the `QaApi` trait implemented by the HTTP client

mod client;
mod error;

pub use client::QaApi;
pub use error::{ApiError, FailureClass, should_force_logout};
