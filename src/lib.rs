//! RAX Credential Store
//!
//! In-memory user credential store: register users with bcrypt-hashed
//! passwords, authenticate them, look them up and remove them.

pub mod auth;
pub mod config;
pub mod error;
pub mod responses;
pub mod utils;

pub use auth::{AuthOutcome, CredentialStore, RegisterOutcome, UserRecord};
pub use config::StoreConfig;
pub use error::{AppError, CredentialError};
