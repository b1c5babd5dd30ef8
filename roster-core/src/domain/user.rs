//! User domain model

use serde::{Deserialize, Serialize};

/// Email stored for every user created without one
pub const DEFAULT_EMAIL: &str = "noemail@example.com";

/// A registered user
///
/// Fields are fixed at construction. A user built without an email carries
/// [`DEFAULT_EMAIL`], including users read back from JSON with a missing or
/// null `email` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserDraft")]
pub struct User {
    id: i64,
    name: String,
    email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: Option<impl Into<String>>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.map_or_else(|| DEFAULT_EMAIL.to_string(), Into::into),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// True when the email is the placeholder rather than a caller-supplied value
    pub fn has_default_email(&self) -> bool {
        self.email == DEFAULT_EMAIL
    }
}

/// Wire shape accepted when deserializing a [`User`]
#[derive(Debug, Deserialize)]
struct UserDraft {
    id: i64,
    name: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<UserDraft> for User {
    fn from(draft: UserDraft) -> Self {
        User::new(draft.id, draft.name, draft.email)
    }
}
