//! Error types
//!
//! Defines error types for the credential store and the demo application.

use std::fmt;

use tokio::task::JoinError;

/// Credential store errors
///
/// Raised only when the hashing collaborator itself fails. Rejected
/// registrations and failed logins are outcomes, not errors.
#[derive(Debug)]
pub enum CredentialError {
    Hashing(String),
    Verification(String),
    Worker(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Hashing(e) => write!(f, "Password hashing failed: {}", e),
            CredentialError::Verification(e) => write!(f, "Password verification failed: {}", e),
            CredentialError::Worker(e) => write!(f, "Hashing worker failed: {}", e),
        }
    }
}

impl std::error::Error for CredentialError {}

impl From<JoinError> for CredentialError {
    fn from(error: JoinError) -> Self {
        CredentialError::Worker(error.to_string())
    }
}

/// Application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Credential(CredentialError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Credential(e) => write!(f, "Credential error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Credential(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<CredentialError> for AppError {
    fn from(error: CredentialError) -> Self {
        AppError::Credential(error)
    }
}
