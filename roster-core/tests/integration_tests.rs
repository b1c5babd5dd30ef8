//! Integration tests for roster-core
//!
//! Settings and seed files are written to a temporary roster directory.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use roster_core::adapters::memory::MemoryRepository;
use roster_core::config::Config;
use roster_core::ports::UserRepository;
use roster_core::services::{SeedService, UserService};
use roster_core::{Error, RosterContext, DEFAULT_EMAIL};

// ============================================================================
// Test Helpers
// ============================================================================

fn write_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("Failed to write test file");
}

const SEED: &str = r#"[
    {"id": 2, "name": "Bob", "email": "bob@example.com"},
    {"id": 1, "name": "Alice"},
    {"id": 3, "name": "Carol", "email": null}
]"#;

// ============================================================================
// Context Tests
// ============================================================================

#[test]
fn test_context_without_settings_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = RosterContext::new(temp_dir.path()).unwrap();

    assert!(ctx.config.seed_file.is_none());
    assert!(ctx.user_service.list_users().unwrap().is_empty());
}

#[test]
fn test_context_loads_relative_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "users.json", SEED);
    write_file(temp_dir.path(), "settings.json", r#"{"seedFile": "users.json"}"#);

    let ctx = RosterContext::new(temp_dir.path()).unwrap();
    let users = ctx.user_service.list_users().unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(users[0].email(), DEFAULT_EMAIL);
    assert_eq!(users[1].email(), "bob@example.com");
    assert_eq!(users[2].email(), DEFAULT_EMAIL);
}

#[test]
fn test_context_missing_seed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "settings.json", r#"{"seedFile": "absent.json"}"#);

    let err = RosterContext::new(temp_dir.path()).err().unwrap();
    assert!(format!("{:#}", err).contains("absent.json"));
}

#[test]
fn test_malformed_settings_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "settings.json", "{not json");

    let err = Config::load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_unknown_log_level_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "settings.json", r#"{"logLevel": "loud"}"#);

    let err = Config::load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("loud"));
}

#[test]
fn test_log_level_is_normalized() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "settings.json", r#"{"logLevel": "DEBUG"}"#);

    let config = Config::load(temp_dir.path()).unwrap();
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_config_save_preserves_unmanaged_keys() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "settings.json", r#"{"theme": "dark"}"#);

    let mut config = Config::load(temp_dir.path()).unwrap();
    config.log_level = "debug".to_string();
    config.save(temp_dir.path()).unwrap();

    let saved = std::fs::read_to_string(temp_dir.path().join("settings.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value["theme"], "dark");
    assert_eq!(value["logLevel"], "debug");

    let reloaded = Config::load(temp_dir.path()).unwrap();
    assert_eq!(reloaded.log_level, "debug");
}

// ============================================================================
// Registry Behaviour Through Services
// ============================================================================

#[test]
fn test_alice_scenario_through_services() {
    let repo = Arc::new(MemoryRepository::new());
    let users = UserService::new(Arc::clone(&repo) as Arc<dyn UserRepository>);

    let alice = users.add_user(1, "Alice", None).unwrap().user;
    assert_eq!(alice.email(), DEFAULT_EMAIL);
    assert_eq!(users.get_user(1).unwrap(), Some(alice));

    let registration = users
        .add_user(1, "Alice B.", Some("alice@b.com".to_string()))
        .unwrap();
    assert!(registration.replaced);
    let found = users.get_user(1).unwrap().unwrap();
    assert_eq!(found.name(), "Alice B.");
    assert_eq!(found.email(), "alice@b.com");

    assert_eq!(users.get_user(2).unwrap(), None);
}

#[test]
fn test_seed_then_insert_overwrites_seeded_user() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "users.json", SEED);

    let repo = Arc::new(MemoryRepository::new());
    let seeds = SeedService::new(Arc::clone(&repo) as Arc<dyn UserRepository>);
    let users = UserService::new(Arc::clone(&repo) as Arc<dyn UserRepository>);

    let report = seeds.load_file(&temp_dir.path().join("users.json")).unwrap();
    assert_eq!(report.loaded, 3);
    assert!(report.replaced.is_empty());

    assert!(users.add_user(2, "Robert", None).unwrap().replaced);
    let bob = users.require_user(2).unwrap();
    assert_eq!(bob.name(), "Robert");
    assert_eq!(bob.email(), DEFAULT_EMAIL);
    assert_eq!(users.summary().unwrap().total_users, 3);
}

#[test]
fn test_seed_file_is_never_written() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.json");
    write_file(temp_dir.path(), "users.json", SEED);

    let repo = Arc::new(MemoryRepository::new());
    let seeds = SeedService::new(Arc::clone(&repo) as Arc<dyn UserRepository>);
    seeds.load_file(&path).unwrap();
    repo.insert(roster_core::User::new(9, "Zed", None::<String>)).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SEED);
}

#[test]
fn test_listed_users_are_copies() {
    let repo = MemoryRepository::new();
    repo.insert(roster_core::User::new(1, "Alice", None::<String>)).unwrap();

    let mut listed = repo.list().unwrap();
    listed.clear();

    assert_eq!(repo.count().unwrap(), 1);
}
