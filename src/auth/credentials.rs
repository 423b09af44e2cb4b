//! Credential records
//!
//! A stored user: the username and the hash of their password.

use std::fmt;

/// A registered user. The plaintext password is never kept.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    username: String,
    password_hash: String,
}

impl UserRecord {
    pub(crate) fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The stored hash. Do not hand this to untrusted parties.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_hash() {
        let record = UserRecord::new("alice", "$2b$04$secretsecretsecret");
        let rendered = format!("{:?}", record);

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret"));
    }
}
