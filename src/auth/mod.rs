//! Authentication system
//!
//! Handles user registration, password hashing and credential verification.

pub mod credentials;
pub mod hasher;
pub mod results;
pub mod store;

pub use credentials::UserRecord;
pub use hasher::{BcryptHasher, PasswordHasher};
pub use results::{AuthOutcome, RegisterOutcome};
pub use store::CredentialStore;
