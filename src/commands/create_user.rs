//! Create-user command - administrative account creation.

use std::sync::Arc;

use crate::cli::args::CreateUserArgs;
use crate::config::Config;
use crate::domain::NewUser;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Execute the create-user command
pub async fn execute(args: CreateUserArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(AppError::from)?;

    let users = UserManager::new(Arc::new(UserStore::new(db.get_connection())));

    let user = users
        .create_user(NewUser {
            email: args.email,
            password: args.password,
            role: args.role,
        })
        .await?;

    tracing::info!(user = %user.email, "user created");
    println!("User created successfully.");
    Ok(())
}
