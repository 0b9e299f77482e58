//! Repository Traits
//!
//! Interface for user persistence. Implementations live in the
//! infrastructure layer (one per backend).

use crate::domain::user::UserRecord;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a user by login name
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<UserRecord>>;

    /// Find a user by row id
    async fn find_by_id(&self, id: i64) -> AuthResult<Option<UserRecord>>;

    /// Replace a user's password digest
    async fn update_password_hash(&self, id: i64, password_hash: &str) -> AuthResult<()>;
}
