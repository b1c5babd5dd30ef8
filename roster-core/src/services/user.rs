//! User service - registration and lookup

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::UserRepository;

/// User service for registering and reading users
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Build a user and store it, replacing any user with the same id
    pub fn add_user(
        &self,
        id: i64,
        name: impl Into<String>,
        email: Option<String>,
    ) -> Result<Registration> {
        let user = User::new(id, name, email);
        let replaced = self.repository.insert(user.clone())?;
        Ok(Registration { user, replaced })
    }

    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.repository.get(id)
    }

    /// Like [`get_user`](Self::get_user), but a missing user is an error
    pub fn require_user(&self, id: i64) -> Result<User> {
        self.repository
            .get(id)?
            .ok_or_else(|| Error::not_found(format!("user {}", id)))
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }

    /// Get overall registry summary
    pub fn summary(&self) -> Result<RegistrySummary> {
        let users = self.repository.list()?;
        let placeholder_emails = users.iter().filter(|u| u.has_default_email()).count();

        Ok(RegistrySummary {
            total_users: users.len(),
            placeholder_emails,
            lowest_id: users.first().map(User::id),
            highest_id: users.last().map(User::id),
        })
    }
}

/// Result of [`UserService::add_user`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub user: User,
    /// An earlier user with the same id was replaced
    pub replaced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub total_users: usize,
    /// Users stored with the placeholder email
    pub placeholder_emails: usize,
    pub lowest_id: Option<i64>,
    pub highest_id: Option<i64>,
}
