//! CLI command implementations

pub mod get;
pub mod list;
pub mod shell;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roster_core::config::{self, Config};
use roster_core::RosterContext;

/// Build the roster context, loading settings and any seed file
///
/// `seed` replaces the configured seed file and, like `ROSTER_SEED_FILE`, is
/// used as given. Logging is installed before the seed is read so the load
/// is reported.
pub fn get_context(seed: Option<PathBuf>, debug: bool) -> Result<RosterContext> {
    let roster_dir = config::roster_dir()?;
    let mut config = Config::load(&roster_dir)
        .with_context(|| format!("Failed to load settings from {}", roster_dir.display()))?;
    if seed.is_some() {
        config.seed_file = seed;
    }

    init_logging(config.level_filter(), debug);

    RosterContext::with_config(config).context("Failed to initialize roster context")
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(level: LevelFilter, debug: bool) {
    let level = effective_level(level, debug);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    // A second install (tests) is not an error worth reporting.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// `--debug` raises the configured level to at least `debug`
fn effective_level(level: LevelFilter, debug: bool) -> LevelFilter {
    if debug {
        level.max(LevelFilter::DEBUG)
    } else {
        level
    }
}
