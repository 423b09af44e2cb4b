//! Error handlers
//!
//! Provides error reporting and exit code mapping.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("Credential store error: {}", err);
}

/// Convert error to a process exit code (sysexits.h values)
pub fn error_to_exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Config(_) => 78,
        AppError::Credential(_) => 70,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialError;

    #[test]
    fn test_exit_codes() {
        let config_err = AppError::Config(config::ConfigError::Message("bad".into()));
        let cred_err = AppError::from(CredentialError::Hashing("boom".into()));

        assert_eq!(error_to_exit_code(&config_err), 78);
        assert_eq!(error_to_exit_code(&cred_err), 70);
    }

    #[test]
    fn test_display_wraps_inner_error() {
        let err = AppError::from(CredentialError::Verification("invalid hash".into()));
        assert_eq!(
            err.to_string(),
            "Credential error: Password verification failed: invalid hash"
        );
    }
}
