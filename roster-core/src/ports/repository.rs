//! Repository port - user storage abstraction

use crate::domain::result::Result;
use crate::domain::User;

/// User storage abstraction
///
/// Implementations own the users they are given. There is no update or
/// delete: `insert` on an existing id replaces the stored user.
pub trait UserRepository: Send + Sync {
    /// Store a user, replacing any user with the same id
    ///
    /// Returns `true` when an existing user was replaced.
    fn insert(&self, user: User) -> Result<bool>;

    /// Get a user by id, `None` when no user has that id
    fn get(&self, id: i64) -> Result<Option<User>>;

    /// Get every stored user, ordered by id
    fn list(&self) -> Result<Vec<User>>;

    /// Number of stored users
    fn count(&self) -> Result<usize>;
}
