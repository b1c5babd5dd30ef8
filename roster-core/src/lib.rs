//! Roster Core - in-memory user registry
//!
//! - **domain**: the `User` record and the `UserRegistry` that stores it
//! - **ports**: the `UserRepository` trait services depend on
//! - **adapters**: concrete repositories (process memory)
//! - **services**: registration, lookup and seed loading

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::memory::MemoryRepository;
use config::Config;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{User, UserRegistry, DEFAULT_EMAIL};

/// Main context for Roster operations
///
/// Holds the configuration, one in-memory repository, and the services
/// built over it. The registry lives as long as the context.
pub struct RosterContext {
    pub config: Config,
    pub repository: Arc<MemoryRepository>,
    pub user_service: UserService,
    pub seed_service: SeedService,
}

impl RosterContext {
    /// Create a context from the settings in `roster_dir`
    ///
    /// When the config names a seed file it is loaded before returning.
    pub fn new(roster_dir: &Path) -> Result<Self> {
        let config = Config::load(roster_dir)
            .with_context(|| format!("Failed to load settings from {}", roster_dir.display()))?;
        Self::with_config(config)
    }

    /// Create a context from an explicit config
    pub fn with_config(config: Config) -> Result<Self> {
        let repository = Arc::new(MemoryRepository::new());
        let user_service = UserService::new(Arc::clone(&repository) as Arc<dyn ports::UserRepository>);
        let seed_service = SeedService::new(Arc::clone(&repository) as Arc<dyn ports::UserRepository>);

        if let Some(seed_file) = &config.seed_file {
            seed_service
                .load_file(seed_file)
                .with_context(|| format!("Failed to load seed file {}", seed_file.display()))?;
        }

        Ok(Self {
            config,
            repository,
            user_service,
            seed_service,
        })
    }
}
