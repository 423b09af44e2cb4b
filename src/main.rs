//! RAX Credential Store - Demo
//!
//! Registers a few users and walks through every store operation.

use std::process::ExitCode;

use log::info;

use rax_credential_store::error::handlers::{error_to_exit_code, handle_error};
use rax_credential_store::responses::{auth_message, register_message};
use rax_credential_store::utils::logging::setup_logging;
use rax_credential_store::{AppError, CredentialStore, StoreConfig};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = StoreConfig::load()?;
    setup_logging(config.level_filter()?);

    info!("Starting credential store (bcrypt cost {})", config.bcrypt_cost);
    let store = CredentialStore::from_config(&config);

    let users = [
        ("user1", "password1"),
        ("user2", "password2"),
        ("user3", "password3"),
    ];
    for (username, password) in users {
        store.register(username, password).await?;
    }

    let outcome = store.register("user1", "randompass").await?;
    println!("{}", register_message(&outcome));

    println!("Users: {:?}", store.usernames());

    let outcome = store.authenticate("user1", "password1").await?;
    println!("{}", auth_message(&outcome));
    let outcome = store.authenticate("user1", "wrongpassword").await?;
    println!("{}", auth_message(&outcome));

    println!("user2 exists: {}", store.username_exists("user2"));

    println!("{:?}", store.get_user_by_username("user3"));

    store.remove_user_by_username("user3");
    println!("Users: {:?}", store.usernames());

    Ok(())
}
