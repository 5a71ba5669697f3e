//! Credentials and the auth key issued in exchange for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Email/password pair used for the key exchange.
///
/// `Debug` redacts the password so credentials can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque token sent as the `auth_key` header on every pet operation.
///
/// Decodes directly from the `{"key": "..."}` body of a successful key
/// exchange. Any other string becomes a key only through [`AuthKey::from_raw`].
///
/// ```rust
/// use pet_friends::AuthKey;
///
/// let key: AuthKey = serde_json::from_str(r#"{"key": "ea738148a1f1"}"#).unwrap();
/// assert_eq!(key.as_str(), "ea738148a1f1");
/// assert_eq!(AuthKey::from_raw("12345").as_str(), "12345");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthKey {
    key: String,
}

impl AuthKey {
    /// Wrap a raw token value that did not come from a key exchange.
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.key.chars().take(4).collect();
        write!(f, "AuthKey({visible}…)")
    }
}
