//! Sign In Use Case

use std::sync::Arc;

use platform::password::verify_password;

use crate::application::config::AuthConfig;
use crate::application::token::issue_token;
use crate::domain::repository::UserRepository;
use crate::domain::user::SessionUser;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub user: SessionUser,
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown user and wrong password produce the same error so the
    /// response does not reveal which usernames exist.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let record = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&input.password, &record.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let user = record.to_session_user();
        let token = issue_token(&user, &self.config.secret, self.config.token_ttl)?;

        tracing::info!(user_id = %user.id, role = %user.role, "User signed in");

        Ok(SignInOutput { user, token })
    }
}
