//! Keyed in-memory store of users

use std::collections::BTreeMap;

use super::User;

/// Users keyed by id
///
/// At most one user is held per id. Inserting an id that is already present
/// replaces the stored user. Enumeration is in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: BTreeMap<i64, User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a user, replacing any user already held under the same id
    ///
    /// Returns the replaced user, if there was one.
    pub fn insert(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id(), user)
    }

    pub fn lookup(&self, id: i64) -> Option<&User> {
        self.users.get(&id)
    }

    /// Snapshot of every stored user
    pub fn list_all(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.users.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_EMAIL;

    #[test]
    fn test_insert_then_lookup() {
        let mut registry = UserRegistry::new();
        let user = User::new(10, "Ada", Some("ada@example.com"));
        registry.insert(user.clone());

        assert_eq!(registry.lookup(10), Some(&user));
        assert!(registry.contains(10));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        let mut registry = UserRegistry::new();
        assert!(registry.lookup(1).is_none());

        registry.insert(User::new(1, "Ada", None::<String>));
        assert!(registry.lookup(2).is_none());
    }

    #[test]
    fn test_last_insert_wins() {
        let mut registry = UserRegistry::new();
        let first = User::new(1, "Alice", Some("a@old.com"));
        let second = User::new(1, "Alice B.", Some("a@new.com"));

        assert!(registry.insert(first.clone()).is_none());
        assert_eq!(registry.insert(second.clone()), Some(first));
        assert_eq!(registry.lookup(1), Some(&second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_all_returns_every_user_in_id_order() {
        let mut registry = UserRegistry::new();
        for id in [3, 1, 2] {
            registry.insert(User::new(id, format!("user{}", id), None::<String>));
        }

        let ids: Vec<i64> = registry.list_all().iter().map(User::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let mut registry = UserRegistry::new();
        registry.insert(User::new(1, "Alice", None::<String>));

        let snapshot = registry.list_all();
        registry.insert(User::new(1, "Changed", Some("c@example.com")));
        registry.insert(User::new(2, "Bob", None::<String>));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name(), "Alice");
    }

    #[test]
    fn test_alice_scenario() {
        let mut registry = UserRegistry::new();

        let alice = User::new(1, "Alice", None::<String>);
        assert_eq!(alice.email(), DEFAULT_EMAIL);
        registry.insert(alice);

        let found = registry.lookup(1).unwrap();
        assert_eq!((found.id(), found.name(), found.email()), (1, "Alice", DEFAULT_EMAIL));

        registry.insert(User::new(1, "Alice B.", Some("alice@b.com")));
        let found = registry.lookup(1).unwrap();
        assert_eq!((found.name(), found.email()), ("Alice B.", "alice@b.com"));

        assert!(registry.lookup(2).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = UserRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.list_all().is_empty());
    }
}
