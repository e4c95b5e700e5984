//! User service - account creation for the admin CLI.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{check_new_user, NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and create a user account
    async fn create_user(&self, input: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserService
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: NewUser) -> AppResult<User> {
        let violations = check_new_user(&input);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        self.users
            .create(input.email, password_hash, vec![input.role])
            .await
    }
}
