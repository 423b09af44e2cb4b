//! User-facing messages
//!
//! Renders store outcomes to text at the application boundary.

use crate::auth::{AuthOutcome, RegisterOutcome};

pub const REGISTERED: &str = "User registered successfully.";
pub const USERNAME_TAKEN: &str = "Username is already taken. Please choose a different username.";
pub const LOGIN_SUCCESS: &str = "You can successfully log in.";
pub const AUTH_FAILED: &str = "Authentication failed. Please check your username and password.";

pub fn register_message(outcome: &RegisterOutcome) -> &'static str {
    match outcome {
        RegisterOutcome::Registered => REGISTERED,
        RegisterOutcome::UsernameTaken => USERNAME_TAKEN,
    }
}

pub fn auth_message(outcome: &AuthOutcome) -> &'static str {
    match outcome {
        AuthOutcome::Succeeded => LOGIN_SUCCESS,
        AuthOutcome::Failed => AUTH_FAILED,
    }
}
