// User Repository Port (Interface)

use crate::domain::{NewUser, User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for user accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email (at most one row)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Insert a new user and return the stored row
    async fn insert(&self, user: &NewUser) -> Result<User>;
}
