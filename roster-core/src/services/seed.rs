//! Seed service - populate the registry from a JSON document
//!
//! A seed document is a JSON array of user objects:
//! ```json
//! [
//!   { "id": 1, "name": "Alice" },
//!   { "id": 2, "name": "Bob", "email": "bob@example.com" }
//! ]
//! ```
//! Entries are inserted in document order, so a repeated id keeps the last
//! entry. Seeding only fills memory; nothing is written back to the file.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::UserRepository;

/// Loads seed documents into a repository
pub struct SeedService {
    repository: Arc<dyn UserRepository>,
}

impl SeedService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn load_file(&self, path: &Path) -> Result<SeedReport> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::seed(format!("failed to read {}: {}", path.display(), e))
        })?;
        let report = self.load_str(&content)?;
        info!(
            path = %path.display(),
            loaded = report.loaded,
            replaced = report.replaced.len(),
            "seed file loaded"
        );
        Ok(report)
    }

    pub fn load_str(&self, content: &str) -> Result<SeedReport> {
        let users = parse_seed(content)?;
        let mut report = SeedReport::default();
        for user in users {
            let id = user.id();
            if self.repository.insert(user)? {
                report.replaced.push(id);
            }
            report.loaded += 1;
        }
        Ok(report)
    }
}

/// Outcome of loading one seed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Entries read from the document
    pub loaded: usize,
    /// Ids whose earlier entry was replaced during this load
    pub replaced: Vec<i64>,
}

fn parse_seed(content: &str) -> Result<Vec<User>> {
    let document: Value = serde_json::from_str(content)?;
    let Value::Array(entries) = document else {
        return Err(Error::seed("expected a JSON array of users"));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<User>(entry)
                .map_err(|e| Error::seed(format!("entry {}: {}", index, e)))
        })
        .collect()
}
