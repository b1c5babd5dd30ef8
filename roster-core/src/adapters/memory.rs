//! In-memory repository backed by [`UserRegistry`]

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::result::Result;
use crate::domain::{User, UserRegistry};
use crate::ports::UserRepository;

/// Repository holding all users in process memory
///
/// The registry sits behind one exclusive lock. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    registry: Mutex<UserRegistry>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are whole values; a poisoned guard never exposes a partial write.
    fn lock(&self) -> MutexGuard<'_, UserRegistry> {
        self.registry.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("user registry lock was poisoned, continuing");
            poisoned.into_inner()
        })
    }
}

impl UserRepository for MemoryRepository {
    fn insert(&self, user: User) -> Result<bool> {
        let id = user.id();
        let replaced = self.lock().insert(user);
        match &replaced {
            Some(previous) => debug!(id, previous_name = previous.name(), "replaced user"),
            None => debug!(id, "inserted user"),
        }
        Ok(replaced.is_some())
    }

    fn get(&self, id: i64) -> Result<Option<User>> {
        Ok(self.lock().lookup(id).cloned())
    }

    fn list(&self) -> Result<Vec<User>> {
        Ok(self.lock().list_all())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.lock().len())
    }
}
