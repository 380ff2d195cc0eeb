use crate::ClientResult;

use ur_core::User;

use async_trait::async_trait;

/// The two registry operations the cache and controller depend on
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// All users in insertion order
    async fn list_users(&self) -> ClientResult<Vec<User>>;

    /// Create a user; the server validates and assigns id and timestamp
    async fn create_user(&self, name: &str, email: &str) -> ClientResult<User>;
}
