use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::user::errors::AuthError;

/// Credential store consumed by the authentication core.
///
/// One capability: resolve a user record by login identifier, plus
/// persistence of the whole record. Any store (in-memory, relational,
/// document) can implement it. Implementations must be safe for concurrent
/// reads and concurrent independent writes.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Look up a user by email address.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Persist a user record, inserting or replacing by id.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn save(&self, user: User) -> Result<User, AuthError>;
}
