//! API failure taxonomy.

use std::fmt;

/// Failure reported by a `QaApi` call.
///
/// `status` is `Some` only when the remote service produced a response with a
/// non-success status code. Transport failures (unreachable host, timeout,
/// unreadable or malformed body) carry no status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    message: String,
    status: Option<u16>,
}

/// The two failure categories callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// No interpretable response was obtained.
    Transport,
    /// The service answered with this non-2xx status.
    Service(u16),
}

impl ApiError {
    /// Service-level failure with the status preserved.
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Transport-level failure, no status.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn classify(&self) -> FailureClass {
        match self.status {
            Some(status) => FailureClass::Service(status),
            None => FailureClass::Transport,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.classify() == FailureClass::Service(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.classify() == FailureClass::Service(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Single policy point for reactive session expiry.
///
/// True iff the service rejected the Basic credentials (401). Every caller of
/// a `QaApi` operation routes its failures through this instead of checking
/// statuses itself.
pub fn should_force_logout(error: &ApiError) -> bool {
    error.is_unauthorized()
}
