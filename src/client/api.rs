use async_trait::async_trait;

use crate::error::UsersResult;
use crate::models::{NewUser, User, UserId};

/// Operations offered by the remote users collection.
///
/// Implemented over HTTP by [`super::UsersClient`]; the sync controller only
/// sees this trait so it can be driven by any backend.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch the whole collection in the order the service stores it.
    async fn list_users(&self) -> UsersResult<Vec<User>>;

    async fn get_user(&self, id: UserId) -> UsersResult<User>;

    /// Create a record and return it with its assigned id.
    async fn create_user(&self, new_user: &NewUser) -> UsersResult<User>;

    async fn update_user(&self, id: UserId, changes: &NewUser) -> UsersResult<User>;

    async fn delete_user(&self, id: UserId) -> UsersResult<()>;
}
