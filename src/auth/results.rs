//! Authentication result types
//!
//! Defines outcomes returned by credential store operations. They carry no
//! sensitive payload; text for users is produced in `crate::responses`.

/// Result of a registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    UsernameTaken,
}

/// Result of an authentication attempt
///
/// `Failed` covers both an unknown username and a wrong password so callers
/// cannot tell which one happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Succeeded,
    Failed,
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Succeeded)
    }
}
