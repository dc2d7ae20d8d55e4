//! Operator credentials.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Username/password pair sent with every request as HTTP Basic auth.
///
/// Replaced as a whole on login and dropped as a whole on logout; there are no
/// setters for individual fields.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// `Authorization` header value: `Basic base64(username:password)`.
    pub fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64_STANDARD.encode(pair))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let credentials = Credentials::new("admin", "secret");
        // base64("admin:secret")
        assert_eq!(credentials.basic_auth_header(), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn test_basic_auth_header_with_colon_in_password() {
        let credentials = Credentials::new("user", "pa:ss");
        let encoded = credentials
            .basic_auth_header()
            .strip_prefix("Basic ")
            .map(str::to_string)
            .unwrap();
        let decoded = BASE64_STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"user:pa:ss");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("admin", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_json_shape() {
        let credentials = Credentials::new("admin", "secret");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json, serde_json::json!({"username": "admin", "password": "secret"}));
    }
}
