//! Change Password Use Case

use std::sync::Arc;

use platform::password::{MIN_PASSWORD_LENGTH, hash_password, verify_password};

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Change password input. `user_id` comes from the resolved session, never
/// from the request body.
pub struct ChangePasswordInput {
    pub user_id: String,
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ChangePasswordInput) -> AuthResult<()> {
        if input.new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }

        let user_id: i64 = input
            .user_id
            .parse()
            .map_err(|_| AuthError::UserNotFound)?;

        let record = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(&input.current_password, &record.password_hash) {
            return Err(AuthError::WrongCurrentPassword);
        }

        let new_hash = hash_password(&input.new_password);
        self.repo.update_password_hash(user_id, &new_hash).await?;

        tracing::info!(user_id = user_id, "Password changed");

        Ok(())
    }
}
